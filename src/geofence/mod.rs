pub mod engine;
pub mod resolve;

pub use engine::*;
pub use resolve::*;
