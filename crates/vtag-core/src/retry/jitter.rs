use std::time::Duration;

use rand::Rng;
use vtag_model::{BackoffStrategy, JitterStrategy};

/// Randomize `base` according to `strategy`.
///
/// `prev` is the previously slept delay (or `first_ms` before the first retry) and only matters
/// for decorrelated jitter, which samples from `first_ms` upward and so stays at zero when
/// `first_ms` is zero (`BackoffStrategy::validate` rejects that). The result never exceeds `max_ms`.
pub(super) fn apply<R: Rng + ?Sized>(
    strategy: JitterStrategy,
    base: Duration,
    prev: Duration,
    backoff: &BackoffStrategy,
    rng: &mut R,
) -> Duration {
    let base_ms = base.as_millis() as u64;
    let ms = match strategy {
        JitterStrategy::None => base_ms,
        JitterStrategy::Full => rng.gen_range(0..=base_ms),
        JitterStrategy::Equal => {
            let half = base_ms / 2;
            half + rng.gen_range(0..=base_ms - half)
        }
        JitterStrategy::Decorrelated => {
            let lo = backoff.first_ms;
            let hi = (prev.as_millis() as u64).saturating_mul(3).max(lo);
            rng.gen_range(lo..=hi)
        }
    };
    Duration::from_millis(ms.min(backoff.max_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn backoff(jitter: JitterStrategy) -> BackoffStrategy {
        BackoffStrategy {
            jitter,
            first_ms: 100,
            max_ms: 2_000,
            factor: 2.0,
        }
    }

    #[test]
    fn none_keeps_base() {
        let b = backoff(JitterStrategy::None);
        let mut rng = StdRng::seed_from_u64(7);
        let d = apply(b.jitter, Duration::from_millis(400), Duration::ZERO, &b, &mut rng);
        assert_eq!(d, Duration::from_millis(400));
    }

    #[test]
    fn full_stays_within_base() {
        let b = backoff(JitterStrategy::Full);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d = apply(b.jitter, Duration::from_millis(400), Duration::ZERO, &b, &mut rng);
            assert!(d <= Duration::from_millis(400));
        }
    }

    #[test]
    fn equal_stays_in_upper_half() {
        let b = backoff(JitterStrategy::Equal);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let d = apply(b.jitter, Duration::from_millis(400), Duration::ZERO, &b, &mut rng);
            assert!(d >= Duration::from_millis(200) && d <= Duration::from_millis(400));
        }
    }

    #[test]
    fn decorrelated_is_bounded_by_first_and_max() {
        let b = backoff(JitterStrategy::Decorrelated);
        let mut rng = StdRng::seed_from_u64(7);
        let mut prev = Duration::from_millis(b.first_ms);
        for _ in 0..200 {
            let d = apply(b.jitter, Duration::ZERO, prev, &b, &mut rng);
            assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(2_000));
            prev = d;
        }
    }

    #[test]
    fn never_exceeds_max() {
        let b = BackoffStrategy {
            max_ms: 50,
            ..backoff(JitterStrategy::None)
        };
        let mut rng = StdRng::seed_from_u64(1);
        let d = apply(b.jitter, Duration::from_millis(400), Duration::ZERO, &b, &mut rng);
        assert_eq!(d, Duration::from_millis(50));
    }
}
