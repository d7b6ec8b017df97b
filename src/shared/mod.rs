/// Shared utilities - error types and result alias used across layers
pub mod error;
pub mod result;

pub use error::{CompatError, ExitCode};
pub use result::Result;
