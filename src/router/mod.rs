mod options;
mod service;

pub use options::{RouterOptions, RouterOptionsBuilder};
pub use service::Router;
