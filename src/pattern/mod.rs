mod compiled;
mod error;
mod escape;
mod scanner;

pub use compiled::{CompiledPattern, PatternSpan, Segment, compile_pattern, split_pattern};
pub use error::{PatternError, PatternResult, SyntaxViolation};
pub use escape::{ESCAPE_CHAR, no_escape, strip_escapes};
pub use scanner::{
    Boundary, BoundaryPair, CONSTRAINT_BOUNDS, NamedParameter, PARAMETER_BOUNDS,
    PARAMETER_DELIMITERS, WILDCARD_CHAR, find_bounds, find_nearest_special_character,
    parse_named_parameter,
};
