pub mod notify;
pub mod round;
pub mod runtime;
