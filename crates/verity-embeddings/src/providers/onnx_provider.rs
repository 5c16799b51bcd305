//! ONNX Runtime sentence-embedding provider.
//!
//! Runs a BERT-style encoder (default all-MiniLM-L6-v2, 384-dim) through
//! `ort`, tokenizing with the model's own `tokenizer.json` and mean-pooling
//! the last hidden state under the attention mask.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tokenizers::{Tokenizer, TruncationParams};
use tracing::debug;
use verity_core::errors::EncodingError;
use verity_core::traits::IEmbeddingProvider;

pub struct OnnxProvider {
    /// `Session::run` needs `&mut`, the trait only gives `&self`.
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    dimensions: usize,
    max_tokens: usize,
    model_name: String,
}

impl OnnxProvider {
    /// Load the model and its tokenizer.
    ///
    /// # Errors
    /// `EncodingError::ModelLoadFailed` if either file is missing or invalid.
    pub fn load(
        model_path: &str,
        tokenizer_path: &str,
        model_name: &str,
        dimensions: usize,
        max_tokens: usize,
    ) -> Result<Self, EncodingError> {
        for path in [model_path, tokenizer_path] {
            if !Path::new(path).exists() {
                return Err(EncodingError::ModelLoadFailed {
                    path: path.to_string(),
                    reason: "file not found".to_string(),
                });
            }
        }

        let load_failed = |e: &dyn std::fmt::Display| EncodingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason: e.to_string(),
        };

        let session = Session::builder()
            .map_err(|e| load_failed(&e))?
            .with_intra_threads(2)
            .map_err(|e| load_failed(&e))?
            .commit_from_file(model_path)
            .map_err(|e| load_failed(&e))?;

        let mut tokenizer =
            Tokenizer::from_file(tokenizer_path).map_err(|e| EncodingError::ModelLoadFailed {
                path: tokenizer_path.to_string(),
                reason: e.to_string(),
            })?;
        truncate_to(&mut tokenizer, max_tokens).map_err(|e| EncodingError::ModelLoadFailed {
            path: tokenizer_path.to_string(),
            reason: e.to_string(),
        })?;

        debug!(model = %model_name, dims = dimensions, max_tokens, "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
            max_tokens,
            model_name: model_name.to_string(),
        })
    }

    fn tokenize(&self, text: &str) -> Result<(Vec<i64>, Vec<i64>, Vec<i64>), EncodingError> {
        token_inputs(&self.tokenizer, text, self.max_tokens)
    }

    fn infer(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        let (ids, mask, type_ids) = self.tokenize(text)?;
        let seq_len = ids.len();
        let shape = vec![1i64, seq_len as i64];

        let tensor_failed = |e: ort::Error| EncodingError::InferenceFailed {
            reason: format!("tensor creation error: {e}"),
        };
        let ids_tensor = Tensor::from_array((shape.clone(), ids)).map_err(tensor_failed)?;
        let mask_tensor = Tensor::from_array((shape.clone(), mask.clone())).map_err(tensor_failed)?;
        let type_tensor = Tensor::from_array((shape, type_ids)).map_err(tensor_failed)?;

        let mut session = self.session.lock().map_err(|e| EncodingError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![
                "input_ids" => ids_tensor,
                "attention_mask" => mask_tensor,
                "token_type_ids" => type_tensor,
            ])
            .map_err(|e| EncodingError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| EncodingError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (shape, data) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| EncodingError::InferenceFailed {
                    reason: format!("tensor extraction failed: {e}"),
                })?;

        let embedding = match shape.len() {
            // [batch=1, seq, dims]: masked mean pooling.
            3 => {
                let seq = shape[1] as usize;
                let dims = shape[2] as usize;
                let mut pooled = vec![0.0f32; dims];
                let mut weight = 0.0f32;
                for (s, &m) in mask.iter().enumerate().take(seq) {
                    if m == 0 {
                        continue;
                    }
                    weight += 1.0;
                    for (d, p) in pooled.iter_mut().enumerate() {
                        *p += data[s * dims + d];
                    }
                }
                if weight > 0.0 {
                    for p in &mut pooled {
                        *p /= weight;
                    }
                }
                pooled
            }
            // [batch=1, dims]: already pooled.
            2 => data[..shape[1] as usize].to_vec(),
            _ => {
                return Err(EncodingError::InferenceFailed {
                    reason: format!("unexpected output shape: {shape:?}"),
                })
            }
        };

        if embedding.len() != self.dimensions {
            return Err(EncodingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            });
        }
        Ok(embedding)
    }
}

/// Cap encodings at `max_tokens`, special tokens included.
///
/// The tokenizer reserves room for `[CLS]`/`[SEP]` before cutting, so an
/// oversized input still ends with `[SEP]`.
fn truncate_to(tokenizer: &mut Tokenizer, max_tokens: usize) -> tokenizers::Result<()> {
    tokenizer.with_truncation(Some(TruncationParams {
        max_length: max_tokens,
        ..Default::default()
    }))?;
    Ok(())
}

/// Token ids, attention mask and type ids for `text`.
fn token_inputs(
    tokenizer: &Tokenizer,
    text: &str,
    max_tokens: usize,
) -> Result<(Vec<i64>, Vec<i64>, Vec<i64>), EncodingError> {
    let encoding = tokenizer
        .encode(text, true)
        .map_err(|e| EncodingError::InferenceFailed {
            reason: format!("tokenization failed: {e}"),
        })?;

    if encoding.get_ids().is_empty() {
        return Err(EncodingError::NoTokens {
            preview: text.chars().take(40).collect(),
        });
    }
    if !encoding.get_overflowing().is_empty() {
        debug!(max = max_tokens, "input truncated");
    }

    let widen = |xs: &[u32]| xs.iter().map(|&x| x as i64).collect::<Vec<_>>();
    Ok((
        widen(encoding.get_ids()),
        widen(encoding.get_attention_mask()),
        widen(encoding.get_type_ids()),
    ))
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        self.infer(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
