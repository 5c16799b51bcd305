use std::fmt;

/// Pipeline states an `answer_query` call moves through, in order.
///
/// Exactly one of `Generating` or `Fallback` occurs per successful call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryStage {
    Embedding,
    Searching,
    Expanding,
    Assembling,
    Generating,
    Fallback,
    Done,
}

impl QueryStage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Embedding => "EMBEDDING",
            Self::Searching => "SEARCHING",
            Self::Expanding => "EXPANDING",
            Self::Assembling => "ASSEMBLING",
            Self::Generating => "GENERATING",
            Self::Fallback => "FALLBACK",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for QueryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
