//! Cross-cutting primitives: error type and result alias

pub mod error;

pub use error::{EvalError, Result};
