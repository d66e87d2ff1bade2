//! Hash functions underlying the XMSS and WOTS+ parameter sets

use core::fmt;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHAKE128 as used by the 256-bit SHAKE sets, in bytes
pub const SHAKE128_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHAKE256 as used by the 512-bit SHAKE sets, in bytes
pub const SHAKE256_512_OUTPUT_SIZE: usize = 64;

/// Hash function or XOF used for tree and chain computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashFunction {
    /// SHA-256
    Sha256,
    /// SHA-512
    Sha512,
    /// SHAKE128 with 256 bits of output
    Shake128_256,
    /// SHAKE256 with 512 bits of output
    Shake256_512,
}

impl HashFunction {
    /// Hash function name as it appears in the parameter records
    pub const fn name(self) -> &'static str {
        match self {
            HashFunction::Sha256 => "SHA-256",
            HashFunction::Sha512 => "SHA-512",
            HashFunction::Shake128_256 => "SHAKE-128(256)",
            HashFunction::Shake256_512 => "SHAKE-256(512)",
        }
    }

    /// Output size in bytes
    pub const fn output_size(self) -> usize {
        match self {
            HashFunction::Sha256 => SHA256_OUTPUT_SIZE,
            HashFunction::Sha512 => SHA512_OUTPUT_SIZE,
            HashFunction::Shake128_256 => SHAKE128_256_OUTPUT_SIZE,
            HashFunction::Shake256_512 => SHAKE256_512_OUTPUT_SIZE,
        }
    }

    /// Whether this is an extendable-output function
    pub const fn is_xof(self) -> bool {
        matches!(self, HashFunction::Shake128_256 | HashFunction::Shake256_512)
    }
}

impl fmt::Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
