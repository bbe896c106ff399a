use rand::Rng;

/// Resolve a configured average into a concrete sub-collection length.
///
/// Averages of 0 or 1 come back unchanged. Anything larger is drawn uniformly
/// from `[average / 2, average + average / 2]`, both ends inclusive, with the
/// halves rounded down.
pub fn randomize_count<R: Rng + ?Sized>(rng: &mut R, average: u32) -> u32 {
    if average <= 1 {
        return average;
    }
    let half = average / 2;
    let low = half;
    let high = average.saturating_add(half);
    rng.random_range(low..=high)
}

/// [`randomize_count`] as a `usize`, ready for `Vec::with_capacity`.
pub fn resolve<R: Rng + ?Sized>(rng: &mut R, average: u32) -> usize {
    usize::try_from(randomize_count(rng, average)).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn zero_and_one_pass_through() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(randomize_count(&mut rng, 0), 0);
            assert_eq!(randomize_count(&mut rng, 1), 1);
        }
    }

    #[test]
    fn counts_stay_within_half_band() {
        let mut rng = StdRng::seed_from_u64(2);
        for average in 2..=120 {
            let low = average / 2;
            let high = average + average / 2;
            for _ in 0..200 {
                let count = randomize_count(&mut rng, average);
                assert!(
                    (low..=high).contains(&count),
                    "average {average} produced {count}, outside [{low}, {high}]"
                );
            }
        }
    }

    #[test]
    fn both_bounds_are_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        // Average 3 -> [1, 4]; the odd average checks that halves round down.
        let draws: Vec<u32> = (0..2_000).map(|_| randomize_count(&mut rng, 3)).collect();
        assert!(draws.contains(&1));
        assert!(draws.contains(&4));
        assert!(draws.iter().all(|c| (1..=4).contains(c)));
    }

    #[test]
    fn two_spans_one_to_three() {
        let mut rng = StdRng::seed_from_u64(4);
        let draws: Vec<u32> = (0..1_000).map(|_| randomize_count(&mut rng, 2)).collect();
        for expected in 1..=3 {
            assert!(draws.contains(&expected), "never drew {expected}");
        }
    }

    #[test]
    fn resolve_matches_randomize_count() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        assert_eq!(
            resolve(&mut a, 90),
            usize::try_from(randomize_count(&mut b, 90)).unwrap()
        );
    }
}
