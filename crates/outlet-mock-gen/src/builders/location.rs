use outlet_mock_core::model::Location;
use rand::Rng;

use crate::fields::{float_between, int_between, pick, pick_string};
use crate::vocab;

/// Half-width, in degrees, of the square the base outlets scatter across.
const OUTLET_SPREAD_DEGREES: f64 = 0.05;
/// Half-width, in degrees, of the offset applied to nearby outlets.
pub const NEARBY_SPREAD_DEGREES: f64 = 0.025;

pub fn random_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    let city = pick(rng, vocab::CITIES);
    Location {
        address: format!(
            "{} {} Street, {city}",
            int_between(rng, 1, 999),
            pick(rng, vocab::STREETS)
        ),
        city: city.to_string(),
        state: vocab::STATE.to_string(),
        postal_code: format!("{:05}", int_between(rng, 0, 99_998)),
        country: vocab::COUNTRY.to_string(),
        latitude: vocab::BASE_LATITUDE
            + float_between(rng, -OUTLET_SPREAD_DEGREES, OUTLET_SPREAD_DEGREES),
        longitude: vocab::BASE_LONGITUDE
            + float_between(rng, -OUTLET_SPREAD_DEGREES, OUTLET_SPREAD_DEGREES),
    }
}

/// A location in the same city and state as `base`, offset by less than
/// [`NEARBY_SPREAD_DEGREES`] on each axis.
pub fn nearby_location<R: Rng + ?Sized>(rng: &mut R, base: &Location) -> Location {
    Location {
        address: format!(
            "{} {} Avenue",
            int_between(rng, 1, 999),
            pick_string(rng, vocab::AVENUES)
        ),
        city: base.city.clone(),
        state: base.state.clone(),
        postal_code: String::new(),
        country: base.country.clone(),
        latitude: base.latitude + float_between(rng, -NEARBY_SPREAD_DEGREES, NEARBY_SPREAD_DEGREES),
        longitude: base.longitude
            + float_between(rng, -NEARBY_SPREAD_DEGREES, NEARBY_SPREAD_DEGREES),
    }
}
