//! Loads known-answer parameter vectors from TOML and checks the registry
//! against them.

pub mod error;

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;
use xmss_registry_params::{WotsParams, XmssParams};

pub use error::{Result, VectorError};

/// Expected values for one XMSS parameter set
#[derive(Debug, Clone, Deserialize)]
pub struct XmssVector {
    pub name: String,
    pub code: u32,
    pub hash: String,
    pub n: usize,
    pub w: usize,
    pub len: usize,
    pub h: usize,
    pub strength: usize,
    pub wots: String,
    pub public_key_size: usize,
    pub signature_size: usize,
}

/// Expected values for one WOTS+ parameter set
#[derive(Debug, Clone, Deserialize)]
pub struct WotsVector {
    pub name: String,
    pub code: u32,
    pub hash: String,
    pub n: usize,
    pub w: usize,
    pub len_1: usize,
    pub len_2: usize,
    pub len: usize,
}

/// Inputs that must be rejected
#[derive(Debug, Clone, Deserialize)]
pub struct Rejected {
    pub names: Vec<String>,
    pub codes: Vec<u32>,
}

/// The whole vector file
#[derive(Debug, Clone, Deserialize)]
pub struct VectorFile {
    pub xmss: Vec<XmssVector>,
    pub wots: Vec<WotsVector>,
    pub rejected: Rejected,
}

fn vector_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("xmss_params.toml")
}

/// Read and parse the vector file
pub fn load_vectors() -> Result<VectorFile> {
    let path = vector_path();
    let text = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Parsed once per test binary
pub static VECTORS: Lazy<VectorFile> = Lazy::new(|| match load_vectors() {
    Ok(vectors) => vectors,
    Err(e) => panic!("cannot load XMSS parameter vectors: {}", e),
});

fn expect_eq<T: PartialEq + Display>(
    name: &str,
    field: &'static str,
    expected: T,
    actual: T,
) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(VectorError::Mismatch {
            name: name.to_string(),
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

/// Resolve `v.name` and compare every field of the record with the vector
pub fn check_xmss(v: &XmssVector) -> Result<&'static XmssParams> {
    let p = XmssParams::from_name(&v.name)?;
    let by_code = XmssParams::from_code(v.code)?;

    expect_eq(&v.name, "name", v.name.as_str(), p.name())?;
    expect_eq(&v.name, "code", v.code, p.oid().code())?;
    expect_eq(&v.name, "code lookup", v.name.as_str(), by_code.name())?;
    expect_eq(&v.name, "hash", v.hash.as_str(), p.hash_function_name())?;
    expect_eq(&v.name, "n", v.n, p.element_size())?;
    expect_eq(&v.name, "w", v.w, p.w())?;
    expect_eq(&v.name, "len", v.len, p.len())?;
    expect_eq(&v.name, "h", v.h, p.tree_height())?;
    expect_eq(&v.name, "strength", v.strength, p.strength())?;
    expect_eq(&v.name, "wots", v.wots.as_str(), p.wots_oid().name())?;
    expect_eq(&v.name, "public_key_size", v.public_key_size, p.public_key_size())?;
    expect_eq(&v.name, "signature_size", v.signature_size, p.signature_size())?;
    Ok(p)
}

/// Resolve `v.name` in the WOTS+ registry and compare every field
pub fn check_wots(v: &WotsVector) -> Result<&'static WotsParams> {
    let p = WotsParams::from_name(&v.name)?;
    let by_code = WotsParams::from_code(v.code)?;

    expect_eq(&v.name, "name", v.name.as_str(), p.name())?;
    expect_eq(&v.name, "code lookup", v.name.as_str(), by_code.name())?;
    expect_eq(&v.name, "hash", v.hash.as_str(), p.hash_function_name())?;
    expect_eq(&v.name, "n", v.n, p.element_size())?;
    expect_eq(&v.name, "w", v.w, p.w())?;
    expect_eq(&v.name, "len_1", v.len_1, p.len_1())?;
    expect_eq(&v.name, "len_2", v.len_2, p.len_2())?;
    expect_eq(&v.name, "len", v.len, p.len())?;
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_file_parses() {
        let vectors = load_vectors().unwrap();
        assert_eq!(vectors.xmss.len(), 12);
        assert_eq!(vectors.wots.len(), 4);
        assert!(vectors.rejected.names.iter().any(|n| n.is_empty()));
    }

    #[test]
    fn mismatch_is_reported() {
        let mut v = VECTORS.xmss[0].clone();
        v.h = 11;
        let err = check_xmss(&v).unwrap_err();
        assert_eq!(
            err.to_string(),
            "XMSS-SHA2_10_256: h mismatch - expected: 11, got: 10"
        );
    }
}
