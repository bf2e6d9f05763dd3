use introcore::{binary_search, sort};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

#[test]
fn sorts_1m_random_i64_keys() {
    let count = 1_000_000;
    let mut rng = StdRng::seed_from_u64(7);
    let mut keys: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    sort(&mut keys);
    let elapsed = start.elapsed();
    eprintln!("sorted {count} i64 keys in {elapsed:?}");

    assert_eq!(keys.len(), count);
    assert!(keys.windows(2).all(|w| w[0] <= w[1]));

    for _ in 0..50 {
        let idx = rng.random_range(0..count);
        let needle = keys[idx];
        let found = binary_search(&keys, 0, keys.len(), &needle).unwrap().unwrap();
        assert_eq!(keys[found], needle);
    }
}

#[test]
fn sorts_1m_keys_with_parallel_values() {
    let count = 1_000_000;
    let mut rng = StdRng::seed_from_u64(11);
    let mut keys: Vec<i64> = (0..count).map(|_| rng.random_range(0..count as i64)).collect();
    let mut values: Vec<i64> = keys.iter().map(|k| k * 3).collect();

    introcore::sort_pairs(&mut keys, &mut values).unwrap();

    assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    for (k, v) in keys.iter().zip(values.iter()) {
        assert_eq!(*v, k * 3);
    }
}

#[test]
#[ignore]
fn sorts_100m_random_i64_keys() {
    // WARNING: allocates roughly 800MB for the key vector alone; run explicitly with
    // `cargo test -- --ignored` on a machine with enough memory.
    let count = 100_000_000;
    let mut rng = StdRng::seed_from_u64(13);
    let mut keys: Vec<i64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    sort(&mut keys);
    let elapsed = start.elapsed();
    eprintln!("sorted {count} i64 keys in {elapsed:?}");

    assert_eq!(keys.len(), count);
    for i in (0..count - 1).step_by(10_000) {
        assert!(keys[i] <= keys[i + 1], "sort failed at index {i}");
    }
}
