pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use error::{GeokernError, Result};
