use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hasher},
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// Distinguishes draws that land on the same clock reading.
static DRAWS: AtomicU64 = AtomicU64::new(0);

/// Returns a pseudo-random value in `[0, 1)`. Arguments are ignored.
///
/// Entropy comes from a fresh [`RandomState`] (randomly keyed per process),
/// mixed with the wall clock and a draw counter. Good enough for a calculator,
/// not for cryptography.
///
/// # Example
/// ```
/// use matheval::interpreter::evaluator::function::random::rand;
///
/// let x = rand(&[]);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[must_use]
pub fn rand(_args: &[f64]) -> f64 {
    let mut hasher = RandomState::new().build_hasher();

    let now = SystemTime::now().duration_since(UNIX_EPOCH)
                               .map(|d| d.as_nanos())
                               .unwrap_or_default();
    hasher.write_u128(now);
    hasher.write_u64(DRAWS.fetch_add(1, Ordering::Relaxed));

    unit_interval(hasher.finish())
}

/// Maps 64 random bits onto `[0, 1)` using the top 53 bits, the precision of
/// an `f64` mantissa.
#[allow(clippy::cast_precision_loss)]
fn unit_interval(bits: u64) -> f64 {
    const SCALE: f64 = 1.0 / (1u64 << 53) as f64;
    (bits >> 11) as f64 * SCALE
}
