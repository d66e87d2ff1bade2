//! Error handling for parameter-set resolution

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

#[cfg(feature = "std")]
impl std::error::Error for Error {}
