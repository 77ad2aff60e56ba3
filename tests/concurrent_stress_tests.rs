//! Stress Tests for the Concurrent 2Q Cache
//!
//! These tests verify thread safety and correctness under high contention.
//! Every test finishes with a full structural audit.

#![cfg(feature = "concurrent")]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use twoq_cache::config::TwoQCacheConfig;
use twoq_cache::meta::PromotionPlacement;
use twoq_cache::metrics::CacheMetrics;
use twoq_cache::ConcurrentTwoQCache;

const NUM_THREADS: usize = 16;
const OPS_PER_THREAD: usize = 10_000;

fn assert_bounded<K, V>(cache: &ConcurrentTwoQCache<K, V>)
where
    K: std::hash::Hash + Eq + Clone + Send,
    V: Clone + Send,
{
    let total = cache.hot_capacity() + cache.cold_capacity();
    assert!(cache.size() <= total, "size {} over {}", cache.size(), total);
    assert!(cache.cold_len() <= cache.cold_capacity());
    assert_eq!(cache.check_invariants(), Ok(()));
}

/// Test high contention with many threads hammering the same keys
#[test]
fn stress_high_contention() {
    let cache: Arc<ConcurrentTwoQCache<usize, usize>> =
        Arc::new(ConcurrentTwoQCache::new(80, 20));
    let hits = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let hits = Arc::clone(&hits);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (i * 31 + t) % 150;
                    if cache.get(&key).is_some() {
                        hits.fetch_add(1, Ordering::Relaxed);
                    } else {
                        cache.set(key, key);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(hits.load(Ordering::Relaxed) > 0);
    let metrics = cache.metrics();
    assert_eq!(
        metrics.get("cache_hits").copied(),
        Some(hits.load(Ordering::Relaxed) as f64)
    );
    assert_bounded(&cache);
}

/// Mixed get/set/del/peek across all threads, with values checked on read
#[test]
fn stress_mixed_operations() {
    let cache: Arc<ConcurrentTwoQCache<usize, usize>> =
        Arc::new(ConcurrentTwoQCache::new(500, 100));

    let handles: Vec<_> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD {
                    let key = (i * 7919 + t * 104_729) % 2_000;
                    match i % 10 {
                        0..=3 => {
                            if let Some(v) = cache.get(&key) {
                                assert_eq!(v, key * 3);
                            }
                        }
                        4..=7 => cache.set(key, key * 3),
                        8 => {
                            cache.del(&key);
                        }
                        _ => {
                            if let Some(v) = cache.peek(&key) {
                                assert_eq!(v, key * 3);
                            }
                        }
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_bounded(&cache);
}

/// Promotions land at the front of hot; hot overflow is repaired by sets
#[test]
fn stress_hot_front_promotions() {
    let config = TwoQCacheConfig::new(64, 64).with_promotion(PromotionPlacement::HotFront);
    let cache: Arc<ConcurrentTwoQCache<u64, u64>> = Arc::new(ConcurrentTwoQCache::init(config, None));

    let handles: Vec<_> = (0..NUM_THREADS as u64)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD as u64 {
                    let key = (i + t * 13) % 256;
                    if i % 3 == 0 {
                        cache.set(key, key);
                    } else {
                        let _ = cache.get(&key);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // One final set restores the hot bound
    cache.set(u64::MAX, 0);
    assert!(cache.hot_len() <= 64);
    assert_bounded(&cache);
}

/// Readers and writers race against periodic resets
#[test]
fn stress_with_resets() {
    let cache: Arc<ConcurrentTwoQCache<String, usize>> =
        Arc::new(ConcurrentTwoQCache::new(100, 50));

    let mut handles: Vec<thread::JoinHandle<()>> = (0..NUM_THREADS)
        .map(|t| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..OPS_PER_THREAD / 10 {
                    let key = format!("key_{}", (i + t) % 300);
                    cache.set(key.clone(), i);
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();

    {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                cache.reset();
                thread::yield_now();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_bounded(&cache);
}

/// Debug output and describe() can be taken while other threads mutate
#[test]
fn stress_diagnostics_during_writes() {
    let cache: Arc<ConcurrentTwoQCache<usize, usize>> =
        Arc::new(ConcurrentTwoQCache::new(32, 8));

    let writer = {
        let cache = Arc::clone(&cache);
        thread::spawn(move || {
            for i in 0..OPS_PER_THREAD {
                cache.set(i % 100, i);
            }
        })
    };

    for _ in 0..200 {
        let dump = cache.describe();
        assert!(dump.starts_with("hot ("));
        let hot = cache.hot_keys();
        let cold = cache.cold_keys();
        assert!(cold.len() <= 8);
        assert!(hot.len() + cold.len() <= 40);
        let _ = format!("{:?}", cache);
    }

    writer.join().unwrap();
    assert_bounded(&cache);
}
