//! Public API traits and types for the XMSS parameter registry
//!
//! This crate provides the error type shared by every registry and the
//! traits downstream signers and verifiers consume parameter sets through.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::{params_from_name, AlgorithmId, ParameterSet};
