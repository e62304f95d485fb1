use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RadixError {
    #[error("pattern already exists")]
    PatternExists { pattern: String },
    #[error("a similar pattern already exists.")]
    SimilarPatternExists { pattern: String },
}

impl RadixError {
    pub fn pattern(&self) -> &str {
        match self {
            RadixError::PatternExists { pattern } | RadixError::SimilarPatternExists { pattern } => {
                pattern
            }
        }
    }
}

pub type RadixResult<T> = Result<T, RadixError>;
