//! Input generators for the test suites and benchmarks, all `i32` valued.
//!
//! Random patterns derive from a seed that stays fixed for the whole process, see
//! [`random_init_seed`], so a failing test can be replayed with `OVERRIDE_SEED`.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::distributions::Uniform;
use rand::prelude::*;

#[allow(deprecated)]
use zipf::ZipfDistribution;

// --- Public ---

/// Uniformly random over the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly random over `range`, narrow ranges give many duplicates.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    seeded_rng().sample_iter(dist).take(len).collect()
}

/// Zipf distributed ranks in `1..=len`, a few values dominate.
#[allow(deprecated)]
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        panic!("invalid zipf exponent {exponent}");
    };

    seeded_rng()
        .sample_iter(dist)
        .take(len)
        .map(|rank| rank as i32)
        .collect()
}

/// `0, 1, 2, ...`
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len).map(|i| i as i32).collect()
}

/// `len - 1, ..., 1, 0`
pub fn descending(len: usize) -> Vec<i32> {
    (0..len).rev().map(|i| i as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![7; len]
}

/// Random values split into `runs` chunks, each sorted ascending or descending at random.
pub fn saw_mixed(len: usize, runs: usize) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let run_len = (len / runs.max(1)).max(1);
    let directions = random_uniform(len / run_len + 1, 0..=1);

    for (run, direction) in v.chunks_mut(run_len).zip(directions) {
        if direction == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every random pattern draw a fresh seed. Benchmarks want this, tests must not.
///
/// # Panics
///
/// Panics if `OVERRIDE_SEED` is set, the two settings contradict each other.
pub fn use_random_seed_each_time() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED");
    }

    FIXED_SEED.store(false, Ordering::Release);
}

/// The seed all patterns derive from, fixed for the lifetime of the process unless
/// [`use_random_seed_each_time`] was called. Set `OVERRIDE_SEED` to reproduce a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    if !FIXED_SEED.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => match u64::from_str(&seed) {
            Ok(seed) => seed,
            Err(err) => panic!("OVERRIDE_SEED={seed} is not a u64: {err}"),
        },
        Err(_) => thread_rng().gen(),
    })
}

// --- Private ---

static FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
