// ChainHashMap property tests over the public API.
//
// Property 1: last-write-wins. After inserting an arbitrary pair list, each
// distinct key retrieves the last value written for it, and the pair set
// survives a resize byte for byte.
//
// Property 2: removal is surgical. Removing an arbitrary subset of keys
// reports presence correctly and leaves the complement untouched.
use chain_hashmap::ChainHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn last_write_wins_and_survives_resize(
        pairs in proptest::collection::vec((".{0,8}", ".{0,8}"), 0..40),
        capacity in 1usize..8,
    ) {
        let mut table = ChainHashMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();
        for (k, v) in &pairs {
            table.insert(k, v);
            model.insert(k.clone(), v.clone());
        }
        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v.as_str()));
        }

        let before = table.capacity();
        let table = table.resize().unwrap();
        prop_assert_eq!(table.capacity(), 2 * before);
        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v.as_str()));
        }
    }

    #[test]
    fn removal_only_affects_targets(
        pairs in proptest::collection::vec(("[a-p]{1,4}", "[0-9]{1,4}"), 0..32),
        victims in proptest::collection::vec("[a-p]{1,4}", 0..16),
        capacity in 1usize..4,
    ) {
        let mut table = ChainHashMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();
        for (k, v) in &pairs {
            table.insert(k, v);
            model.insert(k.clone(), v.clone());
        }

        for k in &victims {
            let removed = table.remove(k);
            prop_assert_eq!(removed, model.remove(k).is_some());
            prop_assert_eq!(table.retrieve(k), None);
        }

        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v.as_str()));
        }
    }
}
