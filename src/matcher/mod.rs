mod params;
pub mod resolver;

pub use resolver::find_route;
