use thiserror::Error;

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// All failure modes of dictionary loading, lattice construction and search.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalyzerError {
    #[error("{context}: {cause}")]
    Io {
        cause: std::io::Error,
        context: String,
    },

    #[error("{0}")]
    Format(String),

    #[error("trie integrity violation: {0}")]
    Integrity(String),

    #[error("invalid UTF-8 at byte offset {0}")]
    Decode(usize),

    #[error("no path from BOS to EOS: {0}")]
    Search(String),
}

impl From<std::io::Error> for AnalyzerError {
    fn from(e: std::io::Error) -> Self {
        AnalyzerError::Io {
            cause: e,
            context: String::from("I/O error"),
        }
    }
}

impl AnalyzerError {
    pub fn with_context<S: Into<String>>(self, ctx: S) -> Self {
        match self {
            AnalyzerError::Io { cause, .. } => AnalyzerError::Io {
                cause,
                context: ctx.into(),
            },
            other => other,
        }
    }
}
