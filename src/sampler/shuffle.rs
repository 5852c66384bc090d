//! Uniform shuffle and prefix sampling

use rand::seq::SliceRandom;
use rand::Rng;

/// Draw up to `count` elements from `pool` in uniformly-random order
///
/// The whole pool is permuted with an unbiased Fisher-Yates shuffle and the
/// result truncated to `min(count, pool.len())`, so no element repeats and
/// every permutation of the pool is equally likely before truncation. The
/// input is never mutated.
pub fn sample<T: Clone>(pool: &[T], count: usize) -> Vec<T> {
    sample_with_rng(pool, count, &mut rand::thread_rng())
}

/// Like [`sample`], but with a caller-supplied RNG for deterministic draws
pub fn sample_with_rng<T: Clone, R: Rng>(pool: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut drawn: Vec<T> = pool.to_vec();
    drawn.shuffle(rng);
    drawn.truncate(count.min(drawn.len()));
    drawn
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_empty_pool() {
        let pool: Vec<i32> = vec![];
        assert!(sample(&pool, 5).is_empty());
    }

    #[test]
    fn test_sample_truncates_to_count() {
        let pool: Vec<i32> = (0..20).collect();
        assert_eq!(sample(&pool, 7).len(), 7);
    }

    #[test]
    fn test_sample_caps_at_pool_size() {
        let pool: Vec<i32> = (0..3).collect();
        let mut drawn = sample(&pool, 50);
        assert_eq!(drawn.len(), 3);
        drawn.sort();
        assert_eq!(drawn, pool);
    }

    #[test]
    fn test_sample_does_not_mutate_pool() {
        let pool: Vec<i32> = (0..10).collect();
        let before = pool.clone();
        let _ = sample(&pool, 5);
        assert_eq!(pool, before);
    }

    #[test]
    fn test_seeded_sample_is_deterministic() {
        let pool: Vec<i32> = (0..16).collect();
        let a = sample_with_rng(&pool, 8, &mut StdRng::seed_from_u64(42));
        let b = sample_with_rng(&pool, 8, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_all_positions() {
        // With 500 draws of a 5-element pool, every element should show up
        // in the first slot at least once.
        let pool: Vec<i32> = (0..5).collect();
        let mut seen = [false; 5];
        for _ in 0..500 {
            let drawn = sample(&pool, 1);
            seen[drawn[0] as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
