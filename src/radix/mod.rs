mod alloc;
mod error;
mod insert;
mod node;
mod priority;
mod remove;
pub mod traversal;
mod tree;

pub use error::{RadixError, RadixResult};
pub use node::{NodeId, NodeKind};
pub use priority::{PriorityList, Rank};
pub use traversal::NodeRef;
pub use tree::RadixTree;
