use outlet_mock_core::model::{Location, OutletNearby, OutletType};
use rand::Rng;

use super::location::nearby_location;
use crate::fields::{chance, float_between, pick_string, pick_variant, sequential_id};
use crate::vocab;

const COMPETITOR_PROBABILITY: f64 = 0.3;

/// Outlets 0.1 to 5.1 km from `base`, in the same city.
pub fn build_nearby_outlets<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    base: &Location,
) -> Vec<OutletNearby> {
    (0..count)
        .map(|i| OutletNearby {
            outlet_id: sequential_id("nearby-outlet", i),
            name: pick_string(rng, vocab::OUTLET_NAMES),
            outlet_type: pick_variant(rng, OutletType::ALL),
            distance_km: float_between(rng, 0.1, 5.1),
            location: nearby_location(rng, base),
            is_competitor: chance(rng, COMPETITOR_PROBABILITY),
            relationship: pick_string(rng, vocab::NEARBY_RELATIONSHIPS),
            thumbnail: vocab::THUMBNAIL_URL.to_string(),
        })
        .collect()
}
