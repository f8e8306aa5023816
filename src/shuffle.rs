//! Uniform in-place shuffling.
//!
//! A Fisher-Yates shuffle parameterized by a caller-owned [`fastrand::Rng`]
//! so playout and move-ordering code controls seeding. Given a uniform
//! source, every permutation of the shuffled range is equally likely. The
//! rules engine itself never calls this.

/// Shuffle the whole slice in place.
pub fn shuffle<T>(items: &mut [T], rng: &mut fastrand::Rng) {
    shuffle_first(items, items.len(), rng);
}

/// Shuffle only the first `elements` entries of the slice in place,
/// leaving the rest untouched. `elements` is clamped to the slice length.
pub fn shuffle_first<T>(items: &mut [T], elements: usize, rng: &mut fastrand::Rng) {
    let mut n = elements.min(items.len());
    while n > 1 {
        let k = rng.usize(0..n);
        n -= 1;
        items.swap(k, n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_first_leaves_tail_untouched() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut items: Vec<u32> = (0..10).collect();
        shuffle_first(&mut items, 4, &mut rng);
        assert_eq!(&items[4..], &[4, 5, 6, 7, 8, 9]);
        let mut head = items[..4].to_vec();
        head.sort_unstable();
        assert_eq!(head, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation() {
        // All 6 orderings of 3 elements should show up quickly under a
        // uniform source
        let mut rng = fastrand::Rng::with_seed(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_shuffle_handles_degenerate_sizes() {
        let mut rng = fastrand::Rng::with_seed(3);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        let mut one = vec![9u32];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![9]);
        let mut items = vec![1u32, 2];
        shuffle_first(&mut items, 100, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2]);
    }
}
