pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod radix;
pub mod router;
mod tree;
pub mod types;

pub use errors::{TreeError, TreeResult};
pub use path::{NormalizationOptions, normalize_path, normalize_pattern};
pub use pattern::{PatternError, SyntaxViolation};
pub use radix::{NodeKind, NodeRef, RadixError};
pub use router::{Router, RouterOptions};
pub use tree::Tree;
pub use types::{Constraints, Match, Params, RouteMatch};
