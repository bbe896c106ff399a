use chrono::{DateTime, Utc};
use outlet_mock_core::model::{ContactPoint, ContactType};
use rand::Rng;

use crate::fields::{int_between, pick_string, sequential_id, shift, uppercase_letters};
use crate::vocab;

/// Contacts for one outlet. The first contact is the primary one.
pub fn build_contact_points<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<ContactPoint> {
    (0..count)
        .map(|i| ContactPoint {
            contact_id: sequential_id("contact", i),
            name: pick_string(rng, vocab::STORE_MANAGERS),
            role: pick_string(rng, vocab::CONTACT_ROLES),
            phone: format!("+1-555-{:04}", int_between(rng, 0, 9_998)),
            email: format!("{}@store.com", uppercase_letters(rng, 8)),
            contact_type: ContactType::Manager,
            is_primary: i == 0,
            created_at: shift(
                now,
                0,
                -i32::try_from(int_between(rng, 0, 11)).unwrap_or(0),
                -int_between(rng, 0, 29),
            ),
        })
        .collect()
}
