//! Canonical-name (de)serialization of parameter-set identifiers
//!
//! Identifiers are stored as their canonical name strings, the same contract
//! `from_name` resolves, so persisted configuration keeps resolving across
//! versions regardless of enum layout.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::wots::WotsAlgorithm;
use crate::xmss::XmssAlgorithm;

macro_rules! impl_serde_by_name {
    ($ty:ty, $visitor:ident, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        struct $visitor;

        impl<'de> Visitor<'de> for $visitor {
            type Value = $ty;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str($expecting)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<$ty, E> {
                <$ty>::from_name(v).map_err(E::custom)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str($visitor)
            }
        }
    };
}

impl_serde_by_name!(XmssAlgorithm, XmssAlgorithmVisitor, "an XMSS parameter set name");
impl_serde_by_name!(WotsAlgorithm, WotsAlgorithmVisitor, "a WOTS+ parameter set name");
