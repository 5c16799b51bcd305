//! Vector helpers shared by the encoder and the index.

use verity_core::errors::EncodingError;

/// Norms at or below this are treated as zero.
pub const MIN_NORM: f32 = 1e-12;

pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Scale `v` to unit length in place. Returns `false` and leaves `v`
/// untouched when it has (near) zero norm or non-finite components.
pub fn l2_normalize(v: &mut [f32]) -> bool {
    let norm = l2_norm(v);
    if !norm.is_finite() || norm <= MIN_NORM {
        return false;
    }
    for x in v.iter_mut() {
        *x /= norm;
    }
    true
}

/// Check that an embedding has the expected dimensions.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> Result<(), EncodingError> {
    if embedding.len() != expected {
        return Err(EncodingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        });
    }
    Ok(())
}

/// Dot product; equals cosine similarity when both inputs are unit length.
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
