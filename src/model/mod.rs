pub mod context;
pub mod course;
pub mod geo;
pub mod score;
pub mod trigger;
pub mod utils;
pub mod zone;

pub use context::*;
pub use course::*;
pub use geo::*;
pub use score::*;
pub use trigger::*;
pub use utils::*;
pub use zone::*;
