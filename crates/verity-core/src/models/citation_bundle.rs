use serde::Serialize;

use super::search_hit::SearchHit;

/// Ranked, deduplicated hits backing an answer, plus the sufficiency verdict.
///
/// Built by the citation assembler; consumed once by the answer generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationBundle {
    hits: Vec<SearchHit>,
    sufficient: bool,
}

impl CitationBundle {
    /// Wrap already ranked and deduplicated hits.
    /// The bundle is sufficient exactly when it holds at least one hit.
    pub fn from_ranked(hits: Vec<SearchHit>) -> Self {
        let sufficient = !hits.is_empty();
        Self { hits, sufficient }
    }

    pub fn empty() -> Self {
        Self::from_ranked(Vec::new())
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn into_hits(self) -> Vec<SearchHit> {
        self.hits
    }

    pub fn sufficient(&self) -> bool {
        self.sufficient
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}
