//! Property-based tests for the universal trie properties — the ones that
//! need a live `Trie`, as opposed to the codec- and ordering-only
//! properties already covered under `src/bits/`.

use proptest::prelude::*;

use binary_prefix_trie::Trie;

fn arb_key() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

fn arb_value() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..64)
}

proptest! {
    /// A key immediately read back after `put` yields the value just
    /// written, regardless of what else is already in the trie.
    #[test]
    fn get_after_put_returns_the_value(
        key in arb_key(),
        value in arb_value(),
        other_keys in prop::collection::vec(arb_key(), 0..8),
    ) {
        let mut t = Trie::new();
        for (i, k) in other_keys.iter().enumerate() {
            t = t.put(k, &[i as u8]).unwrap();
        }
        let t = t.put(&key, &value).unwrap();
        prop_assert_eq!(t.get(&key).unwrap(), Some(value));
    }

    /// Putting the same key twice is idempotent on the second value — the
    /// first write leaves no observable trace.
    #[test]
    fn overwrite_fully_replaces(
        key in arb_key(),
        first in arb_value(),
        second in arb_value(),
    ) {
        let t = Trie::new();
        let t = t.put(&key, &first).unwrap();
        let t = t.put(&key, &second).unwrap();
        prop_assert_eq!(t.get(&key).unwrap(), Some(second));
    }

    /// `put` never disturbs a previously-written, distinct key.
    #[test]
    fn put_does_not_alias_unrelated_keys(
        key_a in arb_key(),
        key_b in arb_key(),
        value_a in arb_value(),
        value_b in arb_value(),
    ) {
        prop_assume!(key_a != key_b);
        let t = Trie::new();
        let t = t.put(&key_a, &value_a).unwrap();
        let t = t.put(&key_b, &value_b).unwrap();
        prop_assert_eq!(t.get(&key_a).unwrap(), Some(value_a));
        prop_assert_eq!(t.get(&key_b).unwrap(), Some(value_b));
    }

    /// `Trie` is persistent — a handle obtained before a `put` keeps
    /// observing the pre-`put` state, since `put` returns a new root
    /// rather than mutating the old one.
    #[test]
    fn prior_handles_are_unaffected_by_later_puts(
        key in arb_key(),
        before in arb_value(),
        after in arb_value(),
    ) {
        prop_assume!(before != after);
        let t0 = Trie::new().put(&key, &before).unwrap();
        let t1 = t0.put(&key, &after).unwrap();
        prop_assert_eq!(t0.get(&key).unwrap(), Some(before));
        prop_assert_eq!(t1.get(&key).unwrap(), Some(after));
    }
}
