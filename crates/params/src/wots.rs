//! Constants for WOTS+ one-time signature parameter sets
//!
//! Each XMSS parameter set references exactly one of these through its
//! `wots_oid`. Chain counts are derived from `n` and `w` as in RFC 8391,
//! section 3.1.1:
//!
//! ```text
//! len_1 = ceil(8n / lg(w))
//! len_2 = floor(lg(len_1 * (w - 1)) / lg(w)) + 1
//! len   = len_1 + len_2
//! ```

use core::fmt;
use core::str::FromStr;

use tracing::{debug, error, instrument};
use xmss_registry_api::{AlgorithmId, Error, ParameterSet, Result};

use crate::hash::HashFunction;

const CONTEXT: &str = "WOTS+";

/// Winternitz width shared by every defined WOTS+ parameter set
pub const WOTS_W: usize = 16;

/// WOTS+ parameter-set identifiers with their RFC 8391 codes
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum WotsAlgorithm {
    /// WOTSP-SHA2_256
    Sha2_256 = 0x0000_0001,
    /// WOTSP-SHA2_512
    Sha2_512 = 0x0000_0002,
    /// WOTSP-SHAKE_256
    Shake_256 = 0x0000_0003,
    /// WOTSP-SHAKE_512
    Shake_512 = 0x0000_0004,
}

/// A WOTS+ parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WotsParams {
    oid: WotsAlgorithm,
    name: &'static str,
    hash: HashFunction,
    element_size: usize,
    w: usize,
    lg_w: usize,
    len_1: usize,
    len_2: usize,
    len: usize,
    strength: usize,
}

impl WotsParams {
    /// Build a record, deriving every size from the hash output size and `w`
    const fn derive(oid: WotsAlgorithm, name: &'static str, hash: HashFunction, w: usize) -> Self {
        let n = hash.output_size();
        let lg_w = w.ilog2() as usize;
        let len_1 = (8 * n + lg_w - 1) / lg_w;
        let len_2 = (len_1 * (w - 1)).ilog2() as usize / lg_w + 1;
        Self {
            oid,
            name,
            hash,
            element_size: n,
            w,
            lg_w,
            len_1,
            len_2,
            len: len_1 + len_2,
            strength: 8 * n,
        }
    }
}

/// WOTSP-SHA2_256 parameters
pub const WOTSP_SHA2_256: WotsParams =
    WotsParams::derive(WotsAlgorithm::Sha2_256, "WOTSP-SHA2_256", HashFunction::Sha256, WOTS_W);

/// WOTSP-SHA2_512 parameters
pub const WOTSP_SHA2_512: WotsParams =
    WotsParams::derive(WotsAlgorithm::Sha2_512, "WOTSP-SHA2_512", HashFunction::Sha512, WOTS_W);

/// WOTSP-SHAKE_256 parameters
pub const WOTSP_SHAKE_256: WotsParams = WotsParams::derive(
    WotsAlgorithm::Shake_256,
    "WOTSP-SHAKE_256",
    HashFunction::Shake128_256,
    WOTS_W,
);

/// WOTSP-SHAKE_512 parameters
pub const WOTSP_SHAKE_512: WotsParams = WotsParams::derive(
    WotsAlgorithm::Shake_512,
    "WOTSP-SHAKE_512",
    HashFunction::Shake256_512,
    WOTS_W,
);

impl WotsAlgorithm {
    /// Every WOTS+ identifier, in code order
    pub const ALL: [WotsAlgorithm; 4] = [
        WotsAlgorithm::Sha2_256,
        WotsAlgorithm::Sha2_512,
        WotsAlgorithm::Shake_256,
        WotsAlgorithm::Shake_512,
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
    pub const fn params(self) -> &'static WotsParams {
        match self {
            WotsAlgorithm::Sha2_256 => &WOTSP_SHA2_256,
            WotsAlgorithm::Sha2_512 => &WOTSP_SHA2_512,
            WotsAlgorithm::Shake_256 => &WOTSP_SHAKE_256,
            WotsAlgorithm::Shake_512 => &WOTSP_SHAKE_512,
        }
    }

    /// Resolve an exact canonical name such as `WOTSP-SHA2_256`
    #[instrument(level = "trace")]
    pub fn from_name(name: &str) -> Result<Self> {
        match Self::ALL.iter().copied().find(|id| id.name() == name) {
            Some(id) => Ok(id),
            None => {
                debug!(name, "unknown WOTS+ parameter set");
                Err(Error::lookup(CONTEXT, name))
            }
        }
    }
}

impl TryFrom<u32> for WotsAlgorithm {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        match Self::ALL.iter().copied().find(|id| id.code() == code) {
            Some(id) => Ok(id),
            None => {
                error!(code, "WOTS+ algorithm id does not match any known id");
                Err(Error::not_implemented(CONTEXT, code))
            }
        }
    }
}

impl FromStr for WotsAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for WotsAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl WotsParams {
    /// Record for an identifier; total over the enumeration
    pub const fn from_algorithm(oid: WotsAlgorithm) -> &'static Self {
        oid.params()
    }

    /// Record for a canonical name
    pub fn from_name(name: &str) -> Result<&'static Self> {
        WotsAlgorithm::from_name(name).map(WotsAlgorithm::params)
    }

    /// Record for an RFC 8391 numeric code
    pub fn from_code(code: u32) -> Result<&'static Self> {
        WotsAlgorithm::try_from(code).map(WotsAlgorithm::params)
    }

    pub const fn oid(&self) -> WotsAlgorithm {
        self.oid
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

    /// Hash output size in bytes (n)
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    /// Winternitz width (w)
    pub const fn w(&self) -> usize {
        self.w
    }

    /// log2(w)
    pub const fn lg_w(&self) -> usize {
        self.lg_w
    }

    /// Number of message chains
    pub const fn len_1(&self) -> usize {
        self.len_1
    }

    /// Number of checksum chains
    pub const fn len_2(&self) -> usize {
        self.len_2
    }

    /// Total number of chains
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn strength(&self) -> usize {
        self.strength
    }

    /// Size of one WOTS+ signature or public key in bytes
    pub const fn signature_size(&self) -> usize {
        self.len * self.element_size
    }
}

impl AlgorithmId for WotsAlgorithm {
    type Params = WotsParams;

    const ALL: &'static [Self] = &WotsAlgorithm::ALL;

    fn name(self) -> &'static str {
        WotsAlgorithm::name(self)
    }

    fn code(self) -> u32 {
        WotsAlgorithm::code(self)
    }

    fn from_name(name: &str) -> Result<Self> {
        WotsAlgorithm::from_name(name)
    }

    fn from_code(code: u32) -> Result<Self> {
        WotsAlgorithm::try_from(code)
    }

    fn params(self) -> &'static WotsParams {
        WotsAlgorithm::params(self)
    }
}

impl ParameterSet for WotsParams {
    type Id = WotsAlgorithm;

    fn id(&self) -> WotsAlgorithm {
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
