//! Hashed TF-IDF provider.
//!
//! Hashes terms into fixed-dimension buckets weighted by term frequency.
//! No model files needed; useful for air-gapped setups and tests.

use std::collections::BTreeMap;

use verity_core::errors::EncodingError;
use verity_core::traits::IEmbeddingProvider;

pub struct HashedTfIdfProvider {
    dimensions: usize,
    name: String,
}

impl HashedTfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            name: format!("hashed-tfidf-{dimensions}"),
        }
    }

    /// FNV-1a bucket for a term.
    fn hash_term(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.chars().count() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn tfidf_vector(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return Err(EncodingError::NoTokens {
                preview: text.chars().take(40).collect(),
            });
        }

        // Ordered so bucket sums are accumulated identically on every call.
        let mut tf: BTreeMap<&str, f32> = BTreeMap::new();
        for tok in &tokens {
            *tf.entry(tok.as_str()).or_default() += 1.0;
        }

        let total = tokens.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in tf {
            let freq = count / total;
            // Short terms are mostly stopwords.
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::hash_term(term, self.dimensions)] += freq * idf;
        }
        Ok(vec)
    }
}

impl IEmbeddingProvider for HashedTfIdfProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        self.tfidf_vector(text)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.name
    }
}
