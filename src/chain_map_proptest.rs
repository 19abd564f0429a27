#![cfg(test)]

// Property tests for ChainHashMap kept inside the crate so they can start
// from deliberately tiny capacities and interleave resize freely.

use crate::ChainHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, String),
    Remove(usize),
    Retrieve(usize),
    Resize,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>, usize)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            (idx.clone(), "[a-z0-9]{0,6}").prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.prop_map(OpI::Retrieve),
            Just(OpI::Resize),
        ];
        (
            Just(pool),
            proptest::collection::vec(op, 1..64),
            1usize..5,
        )
    })
}

proptest! {
    /// The table agrees with a `std::collections::HashMap` model across any
    /// interleaving of insert, remove, retrieve, and resize, starting from
    /// capacities small enough to force chaining.
    #[test]
    fn matches_std_hashmap_model((pool, ops, capacity) in arb_scenario()) {
        let mut table = ChainHashMap::with_capacity(capacity).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    table.insert(&pool[i], &v);
                    model.insert(pool[i].clone(), v);
                }
                OpI::Remove(i) => {
                    let removed = table.remove(&pool[i]);
                    prop_assert_eq!(removed, model.remove(&pool[i]).is_some());
                }
                OpI::Retrieve(i) => {
                    prop_assert_eq!(
                        table.retrieve(&pool[i]),
                        model.get(&pool[i]).map(String::as_str)
                    );
                }
                OpI::Resize => {
                    // Cap the growth so an all-resize op list stays small.
                    if table.capacity() <= 1 << 12 {
                        let before = table.capacity();
                        table = table.resize().unwrap();
                        prop_assert_eq!(table.capacity(), 2 * before);
                    }
                }
            }
            prop_assert_eq!(table.len(), model.len());
        }

        for (k, v) in &model {
            prop_assert_eq!(table.retrieve(k), Some(v.as_str()));
        }
    }
}
