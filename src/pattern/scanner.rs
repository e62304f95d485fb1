use smallvec::SmallVec;

use super::escape::{no_escape, starts_with_live, strip_escapes};
use super::{PatternError, PatternResult, SyntaxViolation};

pub const WILDCARD_CHAR: u8 = b'*';
pub const PARAMETER_DELIMITERS: [u8; 3] = [b'-', b'.', b'/'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPair {
    pub open: u8,
    pub close: u8,
}

pub const PARAMETER_BOUNDS: BoundaryPair = BoundaryPair {
    open: b'{',
    close: b'}',
};

pub const CONSTRAINT_BOUNDS: BoundaryPair = BoundaryPair {
    open: b'<',
    close: b'>',
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Byte index of the opening `{` of the innermost closed parameter.
    Parameter(usize),
    /// Byte index of the trailing `*`.
    Wildcard(usize),
}

impl Boundary {
    pub fn index(&self) -> usize {
        match self {
            Boundary::Parameter(index) | Boundary::Wildcard(index) => *index,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedParameter {
    /// Byte index of the closing `}`.
    pub end: usize,
    pub name: String,
    pub constraint: String,
}

/// Scans `pattern` from `start` for the next live parameter or wildcard.
///
/// Byte indices are absolute, so errors always point into the full pattern.
pub fn find_nearest_special_character(
    pattern: &str,
    start: usize,
) -> PatternResult<Option<Boundary>> {
    let bytes = pattern.as_bytes();
    let mut open: SmallVec<[usize; 4]> = SmallVec::new();

    for index in start..bytes.len() {
        match bytes[index] {
            WILDCARD_CHAR if no_escape(pattern, index) => {
                if index != bytes.len() - 1 {
                    return Err(PatternError::syntax(
                        pattern,
                        index,
                        SyntaxViolation::WildcardNotLast,
                    ));
                }
                return Ok(Some(Boundary::Wildcard(index)));
            }
            b if b == PARAMETER_BOUNDS.open && no_escape(pattern, index) => {
                open.push(index);
            }
            b if b == PARAMETER_BOUNDS.close && !open.is_empty() && no_escape(pattern, index) => {
                if index + 1 < bytes.len()
                    && !starts_with_live(pattern, index + 1, &PARAMETER_DELIMITERS)
                {
                    return Err(PatternError::syntax(
                        pattern,
                        index,
                        SyntaxViolation::ParameterNotDelimited,
                    ));
                }
                return Ok(open.pop().map(Boundary::Parameter));
            }
            _ => {}
        }
    }

    Ok(None)
}

/// Returns the innermost balanced `(open, close)` pair at or after `start`.
pub fn find_bounds(pattern: &str, pair: BoundaryPair, start: usize) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();
    let mut open: SmallVec<[usize; 4]> = SmallVec::new();

    for index in start..bytes.len() {
        let b = bytes[index];
        if b == pair.open && no_escape(pattern, index) {
            open.push(index);
            continue;
        }
        if b == pair.close && !open.is_empty() && no_escape(pattern, index) {
            return open.pop().map(|begin| (begin, index));
        }
    }

    None
}

/// Splits the parameter opening at `open` into its trimmed name and constraint.
///
/// The constraint search never leaves the parameter's own braces.
pub fn parse_named_parameter(pattern: &str, open: usize) -> Option<NamedParameter> {
    let (open, close) = find_bounds(pattern, PARAMETER_BOUNDS, open)?;
    let (name, constraint) = match find_bounds(&pattern[..close], CONSTRAINT_BOUNDS, open) {
        Some((begin, end)) => (&pattern[open + 1..begin], &pattern[begin + 1..end]),
        None => (&pattern[open + 1..close], ""),
    };

    Some(NamedParameter {
        end: close,
        name: strip_escapes(name.trim()),
        constraint: strip_escapes(constraint.trim()),
    })
}
