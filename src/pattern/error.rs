use std::fmt;
use thiserror::Error;

/// The rule a pattern broke, rendered as the tail of the syntax error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxViolation {
    WildcardNotLast,
    ParameterNotDelimited,
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxViolation::WildcardNotLast => f.write_str("a '*' must be the last character"),
            SyntaxViolation::ParameterNotDelimited => {
                f.write_str("Named parameters must be separated by \"-\", \".\", \"/\"")
            }
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error(
        "Invalid pattern syntax in pattern '{pattern}'. The {position}th character is incorrect; {reason}."
    )]
    InvalidSyntax {
        pattern: String,
        /// 1-based character position of the offending character.
        position: usize,
        reason: SyntaxViolation,
    },
}

impl PatternError {
    pub(crate) fn syntax(pattern: &str, byte_index: usize, reason: SyntaxViolation) -> Self {
        PatternError::InvalidSyntax {
            pattern: pattern.to_string(),
            position: pattern[..byte_index].chars().count() + 1,
            reason,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            PatternError::InvalidSyntax { position, .. } => *position,
        }
    }

    pub fn reason(&self) -> SyntaxViolation {
        match self {
            PatternError::InvalidSyntax { reason, .. } => *reason,
        }
    }
}

pub type PatternResult<T> = Result<T, PatternError>;
