//! Parameter-set traits
//!
//! Downstream tree-construction and one-time-signature code sizes its
//! buffers and iteration counts from these accessors alone.

use crate::Result;

/// A closed enumeration of parameter-set identifiers.
///
/// Every implementor is a finite, statically known set: `ALL` lists each
/// member exactly once and `name` returns its canonical, stable name.
pub trait AlgorithmId: Copy + Eq + Sized + 'static {
    /// The record type each identifier resolves to
    type Params: ParameterSet<Id = Self>;

    /// Every member of the enumeration, in code order
    const ALL: &'static [Self];

    /// Canonical name, part of the external compatibility contract
    fn name(self) -> &'static str;

    /// Numeric code as assigned by the governing standard
    fn code(self) -> u32;

    /// Resolve an exact, case-sensitive canonical name
    fn from_name(name: &str) -> Result<Self>;

    /// Resolve a raw numeric code
    fn from_code(code: u32) -> Result<Self>;

    /// The fixed record bound to this identifier
    fn params(self) -> &'static Self::Params;
}

/// An immutable parameter record bound to one identifier.
pub trait ParameterSet: 'static {
    /// Identifier type of the enumeration this record belongs to
    type Id: AlgorithmId;

    /// Identifier this record is bound to
    fn id(&self) -> Self::Id;

    /// Canonical name
    fn name(&self) -> &'static str;

    /// Hash output size in bytes (n)
    fn element_size(&self) -> usize;

    /// Winternitz width (w)
    fn wots_width(&self) -> usize;

    /// Number of hash chains in one WOTS+ signature (len)
    fn chain_count(&self) -> usize;

    /// Name of the underlying hash function or XOF
    fn hash_function_name(&self) -> &'static str;

    /// Nominal security strength in bits
    fn security_strength(&self) -> usize;
}

/// Resolve a canonical name straight to its record in registry `I`.
pub fn params_from_name<I: AlgorithmId>(name: &str) -> Result<&'static I::Params> {
    I::from_name(name).map(I::params)
}
