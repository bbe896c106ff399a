use chrono::{DateTime, Utc};
use outlet_mock_core::model::{ChecklistCategory, ChecklistItem, ChecklistStatus, Priority};
use rand::Rng;

use crate::fields::{
    chance, int_between, pick_string, pick_variant, rep_id, sequential_id, shift_days,
};
use crate::vocab;

const COMPLETION_PROBABILITY: f64 = 0.6;

/// Status of a checklist item: completed wins, then overdue once `due` has
/// passed, otherwise pending.
#[must_use]
pub fn checklist_status(
    completed: bool,
    due: DateTime<Utc>,
    now: DateTime<Utc>,
) -> ChecklistStatus {
    if completed {
        ChecklistStatus::Completed
    } else if due < now {
        ChecklistStatus::Overdue
    } else {
        ChecklistStatus::Pending
    }
}

/// Items due between fifteen days ago and fourteen days from now.
pub fn build_checklist<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<ChecklistItem> {
    (0..count)
        .map(|i| {
            let due_date = shift_days(now, int_between(rng, -15, 14));
            let completed = chance(rng, COMPLETION_PROBABILITY);
            let completed_date =
                completed.then(|| shift_days(due_date, -int_between(rng, 0, 4)));

            ChecklistItem {
                item_id: sequential_id("check", i),
                title: pick_string(rng, vocab::CHECKLIST_TITLES),
                description: format!("Checklist item {} description", i + 1),
                category: pick_variant(rng, ChecklistCategory::ALL),
                status: checklist_status(completed, due_date, now),
                priority: pick_variant(rng, Priority::ALL),
                due_date,
                completed_date,
                assigned_to: rep_id(rng),
                completed_by: completed.then(|| rep_id(rng)),
                notes: pick_string(rng, vocab::CHECKLIST_NOTES),
            }
        })
        .collect()
}
