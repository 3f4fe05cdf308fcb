//! Random sampling of record collections.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;

/// Sample up to `count` records from `collection`.
///
/// Shuffles a copy of the whole collection and keeps the first
/// `min(count, collection.len())` records. The source slice is never
/// modified, and no record is selected twice. Output order carries no
/// meaning.
///
/// # Example
///
/// ```
/// use nabh_evidence::sample_records;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let wards = ["ICU", "NICU", "HDU"];
/// let mut rng = StdRng::seed_from_u64(7);
/// let picked = sample_records(&wards, 2, &mut rng);
/// assert_eq!(picked.len(), 2);
/// assert!(picked.iter().all(|w| wards.contains(w)));
/// ```
pub fn sample_records<T, R>(collection: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    if count == 0 || collection.is_empty() {
        return Vec::new();
    }

    let mut sample = collection.to_vec();
    sample.shuffle(rng);
    sample.truncate(count);

    trace!(
        available = collection.len(),
        requested = count,
        sampled = sample.len(),
        "sampled records"
    );
    sample
}

/// Sample using the thread-local random number generator.
pub fn sample_records_random<T: Clone>(collection: &[T], count: usize) -> Vec<T> {
    sample_records(collection, count, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_records(&[1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert!(sample_records(&empty, 5, &mut rng).is_empty());
    }

    #[test]
    fn test_count_exceeds_collection() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut sample = sample_records(&[3, 1, 2], 10, &mut rng);
        sample.sort_unstable();
        assert_eq!(sample, vec![1, 2, 3]);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let source: Vec<u32> = (0..50).collect();
        let first = sample_records(&source, 5, &mut StdRng::seed_from_u64(42));
        let second = sample_records(&source, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_thread_rng_wrapper() {
        let source = vec!["a", "b", "c", "d"];
        let sample = sample_records_random(&source, 2);
        assert_eq!(sample.len(), 2);
        assert_ne!(sample[0], sample[1]);
        assert_eq!(source, vec!["a", "b", "c", "d"]);
    }
}
