/// Output of the grounded answer generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAnswer {
    pub text: String,
    pub has_answer: bool,
    /// Whether the language model was called for this answer.
    pub model_invoked: bool,
}

impl GeneratedAnswer {
    /// The fixed "no answer" response, produced without a model call.
    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            has_answer: false,
            model_invoked: false,
        }
    }
}
