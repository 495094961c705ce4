//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the memoization and eviction properties.

use proptest::prelude::*;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::TtlCache;

// == Test Configuration ==
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys in the namespace:identifier convention
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}:[a-z0-9]{1,12}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Set { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Has { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // For any key-value pair stored with a long TTL, an immediate read
    // returns the payload unchanged.
    #[test]
    fn prop_fresh_read_returns_stored_value(key in key_strategy(), value in value_strategy()) {
        let mut cache = TtlCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), value.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // Storing V1 then V2 under the same key always reads back V2, with one
    // physical entry.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut cache = TtlCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), value1, None);
        cache.set(key.clone(), value2.clone(), None);

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // After delete, both get and has report absence.
    #[test]
    fn prop_delete_removes_entry(key in key_strategy(), value in value_strategy()) {
        let mut cache = TtlCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), value, None);
        prop_assert!(cache.has(&key));

        cache.delete(&key);

        prop_assert!(!cache.has(&key));
        prop_assert_eq!(cache.get(&key), None);
    }

    // For any operation sequence, hit/miss statistics match what the
    // operations observed, and the physical size matches the key list.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = TtlCache::new(TEST_DEFAULT_TTL);
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => cache.set(key, value, None),
                CacheOp::Get { key } => match cache.get(&key) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Has { key } => {
                    if cache.has(&key) {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                }
            }
        }

        let stats = cache.stats();
        prop_assert_eq!(stats.hits, expected_hits, "hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "misses mismatch");
        prop_assert_eq!(stats.total_entries, cache.len());
        prop_assert_eq!(cache.keys().len(), cache.len());
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // An entry stored with a 1 second TTL reads as absent after the TTL
    // elapses, through get and has alike, and leaves the key list.
    #[test]
    fn prop_ttl_expiration_behavior(key in key_strategy(), value in value_strategy()) {
        let mut cache = TtlCache::new(TEST_DEFAULT_TTL);

        cache.set(key.clone(), value.clone(), Some(1));
        prop_assert_eq!(cache.get(&key), Some(value));

        sleep(Duration::from_millis(1500));

        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(!cache.has(&key));
        prop_assert!(!cache.keys().contains(&key));
    }
}
