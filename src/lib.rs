//! # xmss-registry
//!
//! The parameter registry for the XMSS hash-based signature scheme
//! (RFC 8391). It turns a canonical name such as `XMSS-SHA2_10_256`, an
//! [`XmssAlgorithm`](params::XmssAlgorithm) value or an RFC 8391 numeric code
//! into the fixed record that tree construction and WOTS+ chaining size
//! everything from.
//!
//! ## Usage
//!
//! ```
//! use xmss_registry::prelude::*;
//!
//! let params = XmssParams::from_name("XMSS-SHAKE_20_512")?;
//! assert_eq!(params.element_size(), 64);
//! assert_eq!(params.len(), 131);
//! assert_eq!(params.tree_height(), 20);
//! assert_eq!(params.hash_function_name(), "SHAKE-256(512)");
//!
//! let err = XmssParams::from_name("XMSS-SHA3_10_256").unwrap_err();
//! assert!(err.is_recoverable());
//! # Ok::<(), Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`Error`](api::Error), implies `alloc`
//! - `alloc`: lookup errors carry the rejected name
//! - `serde`: identifiers (de)serialize as their canonical names
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`xmss-registry-api`]: error type and parameter-set traits
//! - [`xmss-registry-params`]: XMSS and WOTS+ parameter tables

#![cfg_attr(not(feature = "std"), no_std)]

pub use xmss_registry_api as api;
pub use xmss_registry_params as params;

use api::{ResultExt, Result};
use params::XmssParams;

/// Resolve a configured parameter-set name, tagging failures with `context`.
///
/// Intended for configuration loading, where the caller knows which setting
/// the name came from and wants that in the error.
pub fn resolve_configured(name: &str, context: &'static str) -> Result<&'static XmssParams> {
    let params = XmssParams::from_name(name).with_context(context)?;
    tracing::debug!(
        name = params.name(),
        tree_height = params.tree_height(),
        element_size = params.element_size(),
        "resolved XMSS parameter set"
    );
    Ok(params)
}

/// Common imports for xmss-registry users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::{params_from_name, AlgorithmId, ParameterSet};

    // Re-export the registries
    pub use crate::params::{
        HashFunction,
        WotsAlgorithm,
        WotsParams,
        XmssAlgorithm,
        XmssParams,
    };
}
