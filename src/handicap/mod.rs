pub mod differential;
pub mod esc;
pub mod index;
pub mod round;

pub use differential::*;
pub use esc::*;
pub use index::*;
pub use round::*;
