//! Property tests for capability algebra and map enforcement.
//!
//! These tests validate invariants that must hold for every key, value
//! and capability, not just the hand-picked cases in the unit tests.

use std::collections::BTreeMap;

use proxied_map::{
    Auditor, Capability, FullAccessAuditor, OwnMapAuditor, ProxiedMap, ProxyAuditor,
    SlaveAuditor,
};
use proptest::prelude::*;

// Strategy: any combination of the five named bits
fn arb_capability() -> impl Strategy<Value = Capability> {
    (0u8..32).prop_map(Capability::from_bits_truncate)
}

// Strategy: short lowercase keys so collisions actually happen
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,2}").unwrap()
}

fn arb_store() -> impl Strategy<Value = BTreeMap<String, i64>> {
    prop::collection::btree_map(arb_key(), any::<i64>(), 0..8)
}

proptest! {
    /// Property: grants is exactly the containment test, and PROHIBITED grants nothing
    #[test]
    fn proptest_grants_is_containment(c in arb_capability(), r in arb_capability()) {
        let expected = !c.is_empty() && (c & r) == r;
        prop_assert_eq!(c.grants(r), expected);
        prop_assert!(!Capability::PROHIBITED.grants(r));
    }

    /// Property: containment is a partial order
    #[test]
    fn proptest_containment_is_partial_order(
        a in arb_capability(),
        b in arb_capability(),
        c in arb_capability()
    ) {
        // reflexive
        prop_assert!(a.contains(a));
        // antisymmetric
        if a.contains(b) && b.contains(a) {
            prop_assert_eq!(a, b);
        }
        // transitive
        if a.contains(b) && b.contains(c) {
            prop_assert!(a.contains(c));
        }
    }

    /// Property: FullAccess add then read yields the added value, edit then read the edited value
    #[test]
    fn proptest_full_access_round_trip(
        store in arb_store(),
        key in arb_key(),
        v in any::<i64>(),
        v2 in any::<i64>()
    ) {
        let auditor = FullAccessAuditor::new();
        let mut map = ProxiedMap::new(store, &auditor);

        map.add(&key, v).unwrap();
        prop_assert_eq!(map.read(&key).unwrap(), v);

        map.edit(&key, v2).unwrap();
        prop_assert_eq!(map.read(&key).unwrap(), v2);
    }

    /// Property: removing an absent key is a silent no-op
    #[test]
    fn proptest_remove_is_idempotent(store in arb_store(), key in arb_key()) {
        let auditor = FullAccessAuditor::new();
        let mut map = ProxiedMap::new(store, &auditor);

        map.remove(&key).unwrap();
        let len = map.len();
        prop_assert!(map.remove(&key).is_ok());
        prop_assert_eq!(map.len(), len);
        prop_assert!(map.read(&key).unwrap_err().is_key_not_found());
    }

    /// Property: the prohibit list always wins over the write list
    #[test]
    fn proptest_proxy_prohibit_precedence(
        write in prop::collection::vec(arb_key(), 0..5),
        prohibited in prop::collection::vec(arb_key(), 0..5),
        key in arb_key()
    ) {
        let auditor = ProxyAuditor::new(write.clone(), prohibited.clone());
        let cap = auditor.check_read(&key).capability;

        if prohibited.contains(&key) {
            prop_assert_eq!(cap, Capability::PROHIBITED);
        } else if write.contains(&key) {
            prop_assert_eq!(cap, Capability::READ_WRITE);
        } else {
            prop_assert_eq!(cap, Capability::READABLE);
        }
        prop_assert!(!cap.intersects(Capability::ADDABLE | Capability::REMOVABLE));
    }

    /// Property: owned edits never reach the backing store
    #[test]
    fn proptest_own_map_isolates_backing_store(
        store in arb_store(),
        key in arb_key(),
        owned in any::<i64>(),
        v in any::<i64>()
    ) {
        let auditor = OwnMapAuditor::new([(key.clone(), owned)], true);
        let mut map = ProxiedMap::new(store.clone(), &auditor);

        prop_assert_eq!(map.read(&key).unwrap(), owned);
        map.edit(&key, v).unwrap();
        prop_assert_eq!(map.read(&key).unwrap(), v);
        prop_assert_eq!(map.len(), store.len());

        // A plain reader over the same snapshot sees the untouched store.
        let full = FullAccessAuditor::new();
        let plain = ProxiedMap::new(store.clone(), &full);
        match store.get(&key) {
            Some(&original) => prop_assert_eq!(plain.read(&key).unwrap(), original),
            None => prop_assert!(plain.read(&key).unwrap_err().is_key_not_found()),
        }
    }

    /// Property: a slave auditor never permits a mutation
    #[test]
    fn proptest_slave_never_mutates(
        allowed in prop::collection::vec(arb_key(), 0..5),
        store in arb_store(),
        key in arb_key(),
        v in any::<i64>()
    ) {
        let auditor = SlaveAuditor::new(allowed.clone());
        let mut map = ProxiedMap::new(store, &auditor);

        prop_assert!(map.edit(&key, v).unwrap_err().is_access_denied());
        prop_assert!(map.add(&key, v).unwrap_err().is_access_denied());
        prop_assert!(map.remove(&key).unwrap_err().is_access_denied());

        if !allowed.contains(&key) {
            prop_assert!(map.read(&key).unwrap_err().is_access_denied());
        }
    }
}
