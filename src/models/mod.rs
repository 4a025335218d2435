pub mod operations;
pub mod presentation;

pub use operations::*;
pub use presentation::*;
