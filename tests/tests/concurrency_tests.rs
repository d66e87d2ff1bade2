// Concurrent resolution against the shared static table

use std::thread;

use xmss_registry::prelude::*;

const CALLERS: usize = 1000;

#[test]
fn test_concurrent_from_algorithm() {
    let records: Vec<XmssParams> = thread::scope(|s| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| s.spawn(|| *XmssParams::from_algorithm(XmssAlgorithm::Sha2_16_512)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(records.len(), CALLERS);
    assert!(records.iter().all(|p| *p == records[0]));
    assert_eq!(records[0], *XmssAlgorithm::Sha2_16_512.params());
}

#[test]
fn test_concurrent_mixed_lookups() {
    thread::scope(|s| {
        for t in 0..16 {
            s.spawn(move || {
                for i in 0..CALLERS {
                    let id = XmssAlgorithm::ALL[(t + i) % 12];
                    let p = XmssParams::from_name(id.name()).unwrap();
                    assert_eq!(p.oid(), id);
                    assert!(XmssParams::from_name("XMSS-SHA2_10_256x").is_err());
                }
            });
        }
    });
}
