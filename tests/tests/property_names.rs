//! Property-based tests for name and code resolution

use proptest::prelude::*;
use xmss_registry::prelude::*;

fn is_canonical(s: &str) -> bool {
    XmssAlgorithm::ALL.iter().any(|id| id.name() == s)
}

/// A canonical name with one character altered, inserted or removed
fn near_miss() -> impl Strategy<Value = String> {
    (0..XmssAlgorithm::ALL.len(), any::<prop::sample::Index>(), any::<char>(), 0..3u8).prop_map(
        |(i, at, c, op)| {
            let mut chars: Vec<char> = XmssAlgorithm::ALL[i].name().chars().collect();
            let pos = at.index(chars.len());
            match op {
                0 => chars[pos] = c,
                1 => chars.insert(pos, c),
                _ => {
                    chars.remove(pos);
                }
            }
            chars.into_iter().collect()
        },
    )
}

proptest! {
    #[test]
    fn arbitrary_strings_resolve_iff_canonical(s in ".*") {
        match XmssAlgorithm::from_name(&s) {
            Ok(id) => prop_assert_eq!(id.name(), s.as_str()),
            Err(e) => {
                prop_assert!(!is_canonical(&s));
                prop_assert_eq!(e.name(), Some(s.as_str()));
            }
        }
    }

    #[test]
    fn near_misses_are_rejected(s in near_miss()) {
        prop_assume!(!is_canonical(&s));
        let err = XmssParams::from_name(&s).unwrap_err();
        prop_assert!(err.is_recoverable());
    }

    #[test]
    fn case_variants_are_rejected(i in 0..12usize, lower in any::<bool>()) {
        let name = XmssAlgorithm::ALL[i].name();
        let variant = if lower { name.to_lowercase() } else { name.replace("XMSS", "Xmss") };
        prop_assert!(XmssAlgorithm::from_name(&variant).is_err());
    }

    #[test]
    fn codes_resolve_iff_in_range(code in any::<u32>()) {
        match XmssParams::from_code(code) {
            Ok(p) => {
                prop_assert!((1..=12).contains(&code));
                prop_assert_eq!(p.oid().code(), code);
            }
            Err(e) => {
                prop_assert!(!(1..=12).contains(&code));
                prop_assert_eq!(e.code(), Some(code));
            }
        }
    }
}
