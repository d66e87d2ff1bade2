//! Parameter tables for the XMSS hash-based signature scheme
//!
//! This crate holds the closed set of XMSS parameter sets defined by
//! RFC 8391 together with the WOTS+ sets they reference. Records are
//! compile-time constants; lookups are pure and allocation-free apart from
//! the offending name carried by a lookup error.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod hash;
pub mod wots;
pub mod xmss;

#[cfg(feature = "serde")]
mod serde_impl;

pub use hash::HashFunction;
pub use wots::{WotsAlgorithm, WotsParams};
pub use xmss::{XmssAlgorithm, XmssParams};
