//! Primitive randomized field generators.
//!
//! Every function takes the caller's random source explicitly. None of them
//! fail: an empty pool yields the empty/default value and an inverted range
//! yields its low bound.

use chrono::{DateTime, Duration, Months, Utc};
use rand::Rng;

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uniformly chosen entry of `pool`, or `""` when the pool is empty.
pub fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    if pool.is_empty() {
        return "";
    }
    pool[rng.random_range(0..pool.len())]
}

/// Owned variant of [`pick`].
pub fn pick_string<R: Rng + ?Sized>(rng: &mut R, pool: &[&str]) -> String {
    pick(rng, pool).to_string()
}

/// Uniformly chosen variant, or `T::default()` when `pool` is empty.
pub fn pick_variant<T, R>(rng: &mut R, pool: &[T]) -> T
where
    T: Copy + Default,
    R: Rng + ?Sized,
{
    if pool.is_empty() {
        return T::default();
    }
    pool[rng.random_range(0..pool.len())]
}

/// Uniform integer in `[low, high]`.
pub fn int_between<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> i64 {
    if high <= low {
        return low;
    }
    rng.random_range(low..=high)
}

/// [`int_between`] narrowed to `i32`, for protobuf `int32` fields.
pub fn int32_between<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if high <= low {
        return low;
    }
    rng.random_range(low..=high)
}

/// Uniform float in `[low, high)`.
pub fn float_between<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high <= low {
        return low;
    }
    low + rng.random::<f64>() * (high - low)
}

/// `true` with probability `p`, clamped to `[0, 1]`.
pub fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.random_bool(p.clamp(0.0, 1.0))
}

/// `len` uppercase ASCII letters.
pub fn uppercase_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(UPPERCASE[rng.random_range(0..UPPERCASE.len())]))
        .collect()
}

/// `prefix-NNN` for the zero-based `index`, numbered from 1.
#[must_use]
pub fn sequential_id(prefix: &str, index: usize) -> String {
    format!("{prefix}-{:03}", index + 1)
}

/// One of the ten mock sales reps, `rep-001` to `rep-010`.
pub fn rep_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("rep-{:03}", int_between(rng, 1, 10))
}

/// Reference number such as `ORD-2026-004211`, with a six-digit serial in `1..=999_999`.
pub fn reference_number<R: Rng + ?Sized>(rng: &mut R, prefix: &str, year: i32) -> String {
    format!("{prefix}-{year}-{:06}", int_between(rng, 1, 999_999))
}

/// Shift `anchor` by whole years, months and days (negative moves backwards).
///
/// Month arithmetic clamps to the end of shorter months. Out-of-range results
/// return `anchor` unchanged.
#[must_use]
pub fn shift(anchor: DateTime<Utc>, years: i32, months: i32, days: i64) -> DateTime<Utc> {
    let total_months = i64::from(years) * 12 + i64::from(months);
    let magnitude = u32::try_from(total_months.unsigned_abs()).unwrap_or(u32::MAX);
    let shifted = if total_months >= 0 {
        anchor.checked_add_months(Months::new(magnitude))
    } else {
        anchor.checked_sub_months(Months::new(magnitude))
    };

    shifted
        .and_then(|at| at.checked_add_signed(Duration::days(days)))
        .unwrap_or(anchor)
}

/// Shift `anchor` by whole days.
#[must_use]
pub fn shift_days(anchor: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    shift(anchor, 0, 0, days)
}

/// Uniformly chosen timestamp up to `max_days_back - 1` whole days before `anchor`.
pub fn days_before<R: Rng + ?Sized>(
    rng: &mut R,
    anchor: DateTime<Utc>,
    max_days_back: i64,
) -> DateTime<Utc> {
    shift_days(anchor, -int_between(rng, 0, max_days_back - 1))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 31, 12, 0, 0)
            .single()
            .expect("valid anchor")
    }

    #[test]
    fn pick_returns_pool_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = ["a", "b", "c"];
        for _ in 0..100 {
            assert!(pool.contains(&pick(&mut rng, &pool)));
        }
    }

    #[test]
    fn pick_from_empty_pool_is_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(pick(&mut rng, &[]), "");
    }

    #[test]
    fn pick_variant_from_empty_pool_is_default() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [u8; 0] = [];
        assert_eq!(pick_variant(&mut rng, &empty), 0);
    }

    #[test]
    fn int_between_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_low = false;
        let mut seen_high = false;
        for _ in 0..1_000 {
            let value = int_between(&mut rng, 1, 3);
            assert!((1..=3).contains(&value));
            seen_low |= value == 1;
            seen_high |= value == 3;
        }
        assert!(seen_low && seen_high);
    }

    #[test]
    fn inverted_ranges_return_low_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(int_between(&mut rng, 5, 2), 5);
        assert_eq!(int32_between(&mut rng, 9, 9), 9);
        assert!((float_between(&mut rng, 3.5, 1.0) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn float_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..1_000 {
            let value = float_between(&mut rng, 0.1, 5.1);
            assert!((0.1..5.1).contains(&value));
        }
    }

    #[test]
    fn uppercase_letters_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let code = uppercase_letters(&mut rng, 8);
        assert_eq!(code.len(), 8);
        assert!(code.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn sequential_id_is_one_based_and_padded() {
        assert_eq!(sequential_id("order", 0), "order-001");
        assert_eq!(sequential_id("nearby-outlet", 41), "nearby-outlet-042");
        assert_eq!(sequential_id("visit", 1_233), "visit-1234");
    }

    #[test]
    fn rep_id_stays_within_roster() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let id = rep_id(&mut rng);
            let n: u32 = id.trim_start_matches("rep-").parse().expect("numeric");
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn shift_handles_years_months_and_days() {
        let shifted = shift(anchor(), -1, -1, -2);
        assert_eq!(
            shifted,
            Utc.with_ymd_and_hms(2025, 2, 26, 12, 0, 0).single().unwrap()
        );
    }

    #[test]
    fn shift_forward_by_days() {
        assert_eq!(
            shift_days(anchor(), 1),
            Utc.with_ymd_and_hms(2026, 4, 1, 12, 0, 0).single().unwrap()
        );
    }

    #[test]
    fn days_before_never_exceeds_bound() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..500 {
            let at = days_before(&mut rng, anchor(), 30);
            let back = (anchor() - at).num_days();
            assert!((0..30).contains(&back));
        }
    }
}
