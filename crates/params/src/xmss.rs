//! Constants for XMSS single-tree parameter sets
//!
//! Twelve parameter sets, one per combination of hash family (SHA2 or SHAKE
//! at 256 or 512 bits of output) and tree height (10, 16 or 20). Tree
//! construction, WOTS+ chaining and signature encoding size their buffers
//! and loop bounds from these records alone.
//!
//! # Example
//!
//! ```
//! use xmss_registry_params::xmss::{XmssAlgorithm, XmssParams};
//!
//! let params = XmssParams::from_name("XMSS-SHA2_10_256")?;
//! assert_eq!(params.oid(), XmssAlgorithm::Sha2_10_256);
//! assert_eq!(params.tree_height(), 10);
//! assert_eq!(params.len(), 67);
//! # Ok::<(), xmss_registry_api::Error>(())
//! ```

use core::fmt;
use core::str::FromStr;

use tracing::{debug, error, instrument};
use xmss_registry_api::{AlgorithmId, Error, ParameterSet, Result};

use crate::hash::HashFunction;
use crate::wots::{WotsAlgorithm, WotsParams};

const CONTEXT: &str = "XMSS";

/// Bytes used to encode the leaf index in a signature and the OID in a public key
pub const XMSS_CODE_SIZE: usize = 4;

/// XMSS parameter-set identifiers with their RFC 8391 codes
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum XmssAlgorithm {
    /// XMSS-SHA2_10_256
    Sha2_10_256 = 0x0000_0001,
    /// XMSS-SHA2_16_256
    Sha2_16_256 = 0x0000_0002,
    /// XMSS-SHA2_20_256
    Sha2_20_256 = 0x0000_0003,
    /// XMSS-SHA2_10_512
    Sha2_10_512 = 0x0000_0004,
    /// XMSS-SHA2_16_512
    Sha2_16_512 = 0x0000_0005,
    /// XMSS-SHA2_20_512
    Sha2_20_512 = 0x0000_0006,
    /// XMSS-SHAKE_10_256
    Shake_10_256 = 0x0000_0007,
    /// XMSS-SHAKE_16_256
    Shake_16_256 = 0x0000_0008,
    /// XMSS-SHAKE_20_256
    Shake_20_256 = 0x0000_0009,
    /// XMSS-SHAKE_10_512
    Shake_10_512 = 0x0000_000a,
    /// XMSS-SHAKE_16_512
    Shake_16_512 = 0x0000_000b,
    /// XMSS-SHAKE_20_512
    Shake_20_512 = 0x0000_000c,
}

/// An XMSS parameter set
///
/// Records are only ever handed out as `&'static` references into the
/// fixed table below; there is no way to build or register another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XmssParams {
    oid: XmssAlgorithm,
    element_size: usize,
    w: usize,
    len: usize,
    tree_height: usize,
    name: &'static str,
    hash: HashFunction,
    strength: usize,
    wots_oid: WotsAlgorithm,
}

/// XMSS-SHA2_10_256 parameters
pub const XMSS_SHA2_10_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_10_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 10,
    name: "XMSS-SHA2_10_256",
    hash: HashFunction::Sha256,
    strength: 256,
    wots_oid: WotsAlgorithm::Sha2_256,
};

/// XMSS-SHA2_16_256 parameters
pub const XMSS_SHA2_16_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_16_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 16,
    name: "XMSS-SHA2_16_256",
    hash: HashFunction::Sha256,
    strength: 256,
    wots_oid: WotsAlgorithm::Sha2_256,
};

/// XMSS-SHA2_20_256 parameters
pub const XMSS_SHA2_20_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_20_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 20,
    name: "XMSS-SHA2_20_256",
    hash: HashFunction::Sha256,
    strength: 256,
    wots_oid: WotsAlgorithm::Sha2_256,
};

/// XMSS-SHA2_10_512 parameters
pub const XMSS_SHA2_10_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_10_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 10,
    name: "XMSS-SHA2_10_512",
    hash: HashFunction::Sha512,
    strength: 512,
    wots_oid: WotsAlgorithm::Sha2_512,
};

/// XMSS-SHA2_16_512 parameters
pub const XMSS_SHA2_16_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_16_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 16,
    name: "XMSS-SHA2_16_512",
    hash: HashFunction::Sha512,
    strength: 512,
    wots_oid: WotsAlgorithm::Sha2_512,
};

/// XMSS-SHA2_20_512 parameters
pub const XMSS_SHA2_20_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Sha2_20_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 20,
    name: "XMSS-SHA2_20_512",
    hash: HashFunction::Sha512,
    strength: 512,
    wots_oid: WotsAlgorithm::Sha2_512,
};

/// XMSS-SHAKE_10_256 parameters
pub const XMSS_SHAKE_10_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_10_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 10,
    name: "XMSS-SHAKE_10_256",
    hash: HashFunction::Shake128_256,
    strength: 256,
    wots_oid: WotsAlgorithm::Shake_256,
};

/// XMSS-SHAKE_16_256 parameters
pub const XMSS_SHAKE_16_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_16_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 16,
    name: "XMSS-SHAKE_16_256",
    hash: HashFunction::Shake128_256,
    strength: 256,
    wots_oid: WotsAlgorithm::Shake_256,
};

/// XMSS-SHAKE_20_256 parameters
pub const XMSS_SHAKE_20_256: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_20_256,
    element_size: 32,
    w: 16,
    len: 67,
    tree_height: 20,
    name: "XMSS-SHAKE_20_256",
    hash: HashFunction::Shake128_256,
    strength: 256,
    wots_oid: WotsAlgorithm::Shake_256,
};

/// XMSS-SHAKE_10_512 parameters
pub const XMSS_SHAKE_10_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_10_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 10,
    name: "XMSS-SHAKE_10_512",
    hash: HashFunction::Shake256_512,
    strength: 512,
    wots_oid: WotsAlgorithm::Shake_512,
};

/// XMSS-SHAKE_16_512 parameters
pub const XMSS_SHAKE_16_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_16_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 16,
    name: "XMSS-SHAKE_16_512",
    hash: HashFunction::Shake256_512,
    strength: 512,
    wots_oid: WotsAlgorithm::Shake_512,
};

/// XMSS-SHAKE_20_512 parameters
pub const XMSS_SHAKE_20_512: XmssParams = XmssParams {
    oid: XmssAlgorithm::Shake_20_512,
    element_size: 64,
    w: 16,
    len: 131,
    tree_height: 20,
    name: "XMSS-SHAKE_20_512",
    hash: HashFunction::Shake256_512,
    strength: 512,
    wots_oid: WotsAlgorithm::Shake_512,
};

// Every record must agree with its identifier and its WOTS+ set, and the
// n / len / strength pairing must hold. Checked when the crate compiles.
const _: () = {
    let mut i = 0;
    while i < XmssAlgorithm::ALL.len() {
        let id = XmssAlgorithm::ALL[i];
        let p = id.params();
        let wots = p.wots();

        assert!(p.oid as u32 == id as u32);
        assert!(id as u32 == i as u32 + 1);
        assert!(p.element_size == p.hash.output_size());
        assert!(p.element_size == wots.element_size());
        assert!(p.w == wots.w());
        assert!(p.len == wots.len());
        assert!(p.hash as u8 == wots.hash_function() as u8);
        assert!(p.element_size != 32 || (p.len == 67 && p.strength == 256));
        assert!(p.element_size != 64 || (p.len == 131 && p.strength == 512));
        assert!(p.element_size == 32 || p.element_size == 64);
        assert!(p.tree_height == 10 || p.tree_height == 16 || p.tree_height == 20);

        i += 1;
    }
};

impl XmssAlgorithm {
    /// Every XMSS identifier, in code order
    pub const ALL: [XmssAlgorithm; 12] = [
        XmssAlgorithm::Sha2_10_256,
        XmssAlgorithm::Sha2_16_256,
        XmssAlgorithm::Sha2_20_256,
        XmssAlgorithm::Sha2_10_512,
        XmssAlgorithm::Sha2_16_512,
        XmssAlgorithm::Sha2_20_512,
        XmssAlgorithm::Shake_10_256,
        XmssAlgorithm::Shake_16_256,
        XmssAlgorithm::Shake_20_256,
        XmssAlgorithm::Shake_10_512,
        XmssAlgorithm::Shake_16_512,
        XmssAlgorithm::Shake_20_512,
    ];

    /// RFC 8391 numeric code
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Canonical name
    pub const fn name(self) -> &'static str {
        self.params().name
    }

    /// The record bound to this identifier
    pub const fn params(self) -> &'static XmssParams {
        match self {
            XmssAlgorithm::Sha2_10_256 => &XMSS_SHA2_10_256,
            XmssAlgorithm::Sha2_16_256 => &XMSS_SHA2_16_256,
            XmssAlgorithm::Sha2_20_256 => &XMSS_SHA2_20_256,
            XmssAlgorithm::Sha2_10_512 => &XMSS_SHA2_10_512,
            XmssAlgorithm::Sha2_16_512 => &XMSS_SHA2_16_512,
            XmssAlgorithm::Sha2_20_512 => &XMSS_SHA2_20_512,
            XmssAlgorithm::Shake_10_256 => &XMSS_SHAKE_10_256,
            XmssAlgorithm::Shake_16_256 => &XMSS_SHAKE_16_256,
            XmssAlgorithm::Shake_20_256 => &XMSS_SHAKE_20_256,
            XmssAlgorithm::Shake_10_512 => &XMSS_SHAKE_10_512,
            XmssAlgorithm::Shake_16_512 => &XMSS_SHAKE_16_512,
            XmssAlgorithm::Shake_20_512 => &XMSS_SHAKE_20_512,
        }
    }

    /// Resolve an exact canonical name such as `XMSS-SHA2_10_256`.
    ///
    /// Matching is case-sensitive, with no trimming or normalization.
    #[instrument(level = "trace")]
    pub fn from_name(name: &str) -> Result<Self> {
        match Self::ALL.iter().copied().find(|id| id.name() == name) {
            Some(id) => Ok(id),
            None => {
                debug!(name, "unknown XMSS parameter set");
                Err(Error::lookup(CONTEXT, name))
            }
        }
    }
}

impl TryFrom<u32> for XmssAlgorithm {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        match Self::ALL.iter().copied().find(|id| id.code() == code) {
            Some(id) => Ok(id),
            None => {
                error!(code, "XMSS algorithm id does not match any known id");
                Err(Error::not_implemented(CONTEXT, code))
            }
        }
    }
}

impl FromStr for XmssAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for XmssAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl XmssParams {
    /// Record for an identifier; total over the enumeration
    pub const fn from_algorithm(oid: XmssAlgorithm) -> &'static Self {
        oid.params()
    }

    /// Record for a canonical name
    #[instrument(level = "trace")]
    pub fn from_name(name: &str) -> Result<&'static Self> {
        XmssAlgorithm::from_name(name).map(XmssAlgorithm::params)
    }

    /// Record for an RFC 8391 numeric code, e.g. one read from a public key
    pub fn from_code(code: u32) -> Result<&'static Self> {
        XmssAlgorithm::try_from(code).map(XmssAlgorithm::params)
    }

    /// All records, in code order
    pub fn iter() -> impl Iterator<Item = &'static XmssParams> {
        XmssAlgorithm::ALL.into_iter().map(XmssAlgorithm::params)
    }

    pub const fn oid(&self) -> XmssAlgorithm {
        self.oid
    }

    /// Hash output size in bytes (n)
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    /// Winternitz width (w)
    pub const fn w(&self) -> usize {
        self.w
    }

    /// Number of WOTS+ chains (len)
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Merkle tree height (h)
    pub const fn tree_height(&self) -> usize {
        self.tree_height
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn hash_function(&self) -> HashFunction {
        self.hash
    }

    pub const fn hash_function_name(&self) -> &'static str {
        self.hash.name()
    }

    /// Nominal security strength in bits
    pub const fn strength(&self) -> usize {
        self.strength
    }

    pub const fn wots_oid(&self) -> WotsAlgorithm {
        self.wots_oid
    }

    /// The WOTS+ parameter set this XMSS set is built on
    pub const fn wots(&self) -> &'static WotsParams {
        self.wots_oid.params()
    }

    /// Number of signatures one key pair can issue (2^h)
    pub const fn max_signatures(&self) -> u64 {
        1u64 << self.tree_height
    }

    /// Encoded public key size: OID, root and public seed
    pub const fn public_key_size(&self) -> usize {
        XMSS_CODE_SIZE + 2 * self.element_size
    }

    /// Encoded signature size: index, randomness, WOTS+ signature and
    /// authentication path
    pub const fn signature_size(&self) -> usize {
        XMSS_CODE_SIZE + self.element_size + (self.len + self.tree_height) * self.element_size
    }
}

impl AlgorithmId for XmssAlgorithm {
    type Params = XmssParams;

    const ALL: &'static [Self] = &XmssAlgorithm::ALL;

    fn name(self) -> &'static str {
        XmssAlgorithm::name(self)
    }

    fn code(self) -> u32 {
        XmssAlgorithm::code(self)
    }

    fn from_name(name: &str) -> Result<Self> {
        XmssAlgorithm::from_name(name)
    }

    fn from_code(code: u32) -> Result<Self> {
        XmssAlgorithm::try_from(code)
    }

    fn params(self) -> &'static XmssParams {
        XmssAlgorithm::params(self)
    }
}

impl ParameterSet for XmssParams {
    type Id = XmssAlgorithm;

    fn id(&self) -> XmssAlgorithm {
        self.oid
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn element_size(&self) -> usize {
        self.element_size
    }

    fn wots_width(&self) -> usize {
        self.w
    }

    fn chain_count(&self) -> usize {
        self.len
    }

    fn hash_function_name(&self) -> &'static str {
        self.hash.name()
    }

    fn security_strength(&self) -> usize {
        self.strength
    }
}
