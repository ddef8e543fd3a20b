#![cfg(test)]

// State-machine property tests for ChainedHashTable against a std HashMap
// model, with the default hash and with every key forced into one chain.

use crate::chained_table::{ChainedHashTable, DEFAULT_BUCKETS};
use crate::hash::KeyHash;
use proptest::prelude::*;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, String),
    Get(usize),
    Remove(usize),
    Contains(String),
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    // A small alphabet makes anagrams, and so bucket collisions, common.
    proptest::collection::vec("[abcAB]{0,4}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), "[0-9]{0,6}").prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Get),
            idx.clone().prop_map(OpI::Remove),
            prop_oneof![contains_pool, "[abcAB]{0,4}"].prop_map(OpI::Contains),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Applies `ops` to both the table and a std HashMap model and checks, after
// every step:
// - `get`/`contains_key` agree with the model for every pool key.
// - `remove` returns true iff the model held the key.
// - `len` equals the model's size and the sum of all chain lengths.
fn run_against_model<H: KeyHash>(
    mut sut: ChainedHashTable<H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Set(i, v) => {
                let k = &pool[i];
                sut.set(k, v.clone());
                model.insert(k.clone(), v);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k).is_some());
                prop_assert!(sut.get(k).is_none());
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
        }

        for k in pool {
            prop_assert_eq!(sut.get(k), model.get(k).map(String::as_str));
        }
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        let chained: usize = (0..sut.bucket_count())
            .map(|b| sut.chain_len(b).unwrap_or(0))
            .sum();
        prop_assert_eq!(chained, sut.len());
    }
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap with
// the default character-sum hash over a small bucket array.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), buckets in 1usize..=DEFAULT_BUCKETS) {
        let sut = ChainedHashTable::with_buckets(buckets).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Worst-case hash: every key lands in one chain, so each operation exercises
// head, middle and tail relinking.
#[derive(Clone, Copy, Default)]
struct ConstHash;
impl KeyHash for ConstHash {
    fn hash_key(&self, _key: &str) -> u64 {
        0
    }
}

// Property: same equivalence under a constant hash.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        let sut = ChainedHashTable::with_hasher(DEFAULT_BUCKETS, ConstHash).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}

// Property: inserting and removing one key never disturbs any other key.
proptest! {
    #[test]
    fn prop_non_interference(
        others in proptest::collection::hash_map("[a-z]{0,6}", "[0-9]{1,4}", 0..20),
        key in "[a-z]{0,6}",
        value in "[0-9]{1,4}",
    ) {
        prop_assume!(!others.contains_key(&key));
        let mut t = ChainedHashTable::new();
        for (k, v) in &others {
            t.set(k, v.as_str());
        }

        t.set(&key, value.as_str());
        prop_assert_eq!(t.get(&key), Some(value.as_str()));
        for (k, v) in &others {
            prop_assert_eq!(t.get(k), Some(v.as_str()));
        }

        prop_assert!(t.remove(&key));
        prop_assert_eq!(t.get(&key), None);
        for (k, v) in &others {
            prop_assert_eq!(t.get(k), Some(v.as_str()));
        }
        prop_assert_eq!(t.len(), others.len());
    }
}
