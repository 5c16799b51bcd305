use verity_core::errors::EncodingError;
use verity_core::traits::IEmbeddingProvider;

/// Keyword stems, one axis each. A token matches when it starts with the stem.
const TOPICS: &[&str] = &[
    "fast", "pray", "charit", "patien", "merc", "death", "path",
];

/// Constant weight on the trailing axis so no text maps to the zero vector.
const OTHER_WEIGHT: f32 = 0.1;

/// Deterministic bag-of-topics encoder.
///
/// Texts about the same topic land close together; texts with no known topic
/// collapse onto the trailing axis.
#[derive(Debug, Default, Clone)]
pub struct TopicEncoder;

impl TopicEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl IEmbeddingProvider for TopicEncoder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EncodingError> {
        if text.trim().is_empty() {
            return Err(EncodingError::EmptyInput);
        }
        let mut vector = vec![0.0f32; TOPICS.len() + 1];
        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let token = token.to_lowercase();
            if let Some(axis) = TOPICS.iter().position(|stem| token.starts_with(stem)) {
                vector[axis] += 1.0;
            }
        }
        vector[TOPICS.len()] = OTHER_WEIGHT;
        Ok(vector)
    }

    fn dimensions(&self) -> usize {
        TOPICS.len() + 1
    }

    fn name(&self) -> &str {
        "topic-encoder-v1"
    }
}
