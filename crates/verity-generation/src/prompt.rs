use serde::Serialize;
use verity_core::config::GenerationConfig;
use verity_core::traits::Prompt;
use verity_core::{CitationBundle, Record, SearchHit};

/// Builds the citation-locked prompt sent to the language model.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    source_label: String,
    fallback_text: String,
}

#[derive(Serialize)]
struct CitationPayload<'a> {
    query: &'a str,
    has_answer: bool,
    results: Vec<CitationEntry<'a>>,
}

#[derive(Serialize)]
struct CitationEntry<'a> {
    reference: String,
    original_text: &'a str,
    translation_text: &'a str,
    score: f32,
    context: Vec<ContextEntry<'a>>,
}

#[derive(Serialize)]
struct ContextEntry<'a> {
    reference: String,
    original_text: &'a str,
    translation_text: &'a str,
}

impl<'a> From<&'a Record> for ContextEntry<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            reference: r.reference(),
            original_text: &r.original_text,
            translation_text: &r.translation_text,
        }
    }
}

impl<'a> From<&'a SearchHit> for CitationEntry<'a> {
    fn from(hit: &'a SearchHit) -> Self {
        Self {
            reference: hit.record.reference(),
            original_text: &hit.record.original_text,
            translation_text: &hit.record.translation_text,
            score: hit.similarity_score,
            context: hit.context.iter().map(ContextEntry::from).collect(),
        }
    }
}

impl PromptBuilder {
    pub fn new(source_label: impl Into<String>, fallback_text: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            fallback_text: fallback_text.into(),
        }
    }

    pub fn from_config(config: &GenerationConfig) -> Self {
        Self::new(&config.source_label, &config.fallback_text)
    }

    pub fn fallback_text(&self) -> &str {
        &self.fallback_text
    }

    pub fn system_prompt(&self) -> String {
        let source = &self.source_label;
        let fallback = &self.fallback_text;
        format!(
            "You answer questions about {source} using only the passages in the citation JSON.\n\
             \n\
             RULES (MANDATORY):\n\
             1. Use ONLY the passages provided in the citation JSON.\n\
             2. Do NOT add, invent, or reference any passage not present in the JSON.\n\
             3. Do NOT use external knowledge, commentary, history, or opinions.\n\
             4. If \"has_answer\" is false, the results list is empty, or the passages do not \
             answer the question, respond EXACTLY with:\n   \"{fallback}\"\n\
             5. Cite passages using their \"reference\" field, e.g. (Name Collection, Sequence).\n\
             6. Keep a neutral, calm tone and plain language.\n\
             7. If the question has spelling mistakes or informal wording, infer the intended \
             meaning without mentioning the mistakes.\n\
             8. You may combine several passages when all of them are present and relevant.\n\
             9. Every statement must be directly supported by the cited passages.\n\
             10. Do NOT speculate beyond what the passages explicitly state."
        )
    }

    /// Full prompt for `query` over `bundle`.
    pub fn build(&self, query: &str, bundle: &CitationBundle) -> Prompt {
        let payload = CitationPayload {
            query,
            has_answer: bundle.sufficient(),
            results: bundle.hits().iter().map(CitationEntry::from).collect(),
        };
        // Serializing plain strings and floats cannot fail.
        let citation_json = serde_json::to_string_pretty(&payload).unwrap_or_default();
        Prompt {
            system: self.system_prompt(),
            user: format!(
                "Question: {query}\n\nHere is the citation JSON:\n{citation_json}\n\n\
                 Answer the question using only these passages."
            ),
        }
    }
}
