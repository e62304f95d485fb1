use crate::pattern::PatternError;
use crate::radix::RadixError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Radix(#[from] RadixError),
}

impl TreeError {
    pub fn is_syntax(&self) -> bool {
        matches!(self, TreeError::Pattern(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, TreeError::Radix(_))
    }
}

pub type TreeResult<T> = Result<T, TreeError>;
