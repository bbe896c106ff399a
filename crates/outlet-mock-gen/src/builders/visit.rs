use chrono::{DateTime, Utc};
use outlet_mock_core::model::{ActionStatus, ActionType, Visit, VisitAction, VisitStatus, VisitType};
use rand::Rng;

use crate::fields::{
    days_before, int32_between, int_between, pick, pick_string, pick_variant, rep_id,
    sequential_id, shift_days,
};
use crate::vocab;

/// Visit length in seconds: thirty minutes up to just under an hour and a half.
const MIN_DURATION_SECONDS: i32 = 1_800;
const MAX_DURATION_SECONDS: i32 = 5_399;

pub fn build_visits<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Visit> {
    (0..count)
        .map(|i| {
            let action_count = usize::try_from(int_between(rng, 1, 2)).unwrap_or(1);
            Visit {
                visit_id: sequential_id("visit", i),
                sales_rep_id: rep_id(rng),
                sales_rep_name: pick_string(rng, vocab::SALES_REPS),
                visit_date: days_before(rng, now, 365),
                visit_type: pick_variant(rng, VisitType::ALL),
                visit_status: VisitStatus::Completed,
                purpose: pick_string(rng, vocab::VISIT_PURPOSES),
                summary: format!(
                    "Visit completed successfully. {}",
                    pick(rng, vocab::VISIT_OUTCOMES)
                ),
                products_discussed: vec![
                    pick_string(rng, vocab::PRODUCT_NAMES),
                    pick_string(rng, vocab::PRODUCT_NAMES),
                ],
                actions_taken: build_visit_actions(rng, action_count, now),
                attachments: vec![format!("document_{}.pdf", i + 1)],
                duration_seconds: int32_between(rng, MIN_DURATION_SECONDS, MAX_DURATION_SECONDS),
            }
        })
        .collect()
}

/// Follow-up actions, each due one to thirty days after `now`.
pub fn build_visit_actions<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<VisitAction> {
    (0..count)
        .map(|i| VisitAction {
            action_id: sequential_id("action", i),
            description: pick_string(rng, vocab::ACTION_DESCRIPTIONS),
            action_type: pick_variant(rng, ActionType::ALL),
            status: pick_variant(rng, ActionStatus::ALL),
            due_date: shift_days(now, int_between(rng, 1, 30)),
        })
        .collect()
}
