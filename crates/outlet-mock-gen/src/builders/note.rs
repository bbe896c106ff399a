use chrono::{DateTime, Utc};
use outlet_mock_core::model::{Note, NoteType};
use rand::Rng;

use crate::fields::{chance, days_before, pick, pick_string, pick_variant, rep_id, sequential_id};
use crate::vocab;

const PRIVATE_PROBABILITY: f64 = 0.2;

/// Notes written within the last 90 days. Each is never edited after creation.
pub fn build_notes<R: Rng + ?Sized>(rng: &mut R, count: usize, now: DateTime<Utc>) -> Vec<Note> {
    (0..count)
        .map(|i| {
            let created_at = days_before(rng, now, 90);
            Note {
                note_id: sequential_id("note", i),
                title: pick_string(rng, vocab::NOTE_TITLES),
                content: format!("Note content {}: {}", i + 1, pick(rng, vocab::NOTE_BODIES)),
                note_type: pick_variant(rng, NoteType::ALL),
                created_by: rep_id(rng),
                created_at,
                updated_at: created_at,
                is_private: chance(rng, PRIVATE_PROBABILITY),
                tags: vec![pick_string(rng, vocab::NOTE_TAGS)],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn notes_are_recent_and_unedited() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(70);
        let notes = build_notes(&mut rng, 30, now);
        assert_eq!(notes.len(), 30);
        for note in &notes {
            assert!((0..90).contains(&(now - note.created_at).num_days()));
            assert_eq!(note.created_at, note.updated_at);
            assert_eq!(note.tags.len(), 1);
            assert!(note.created_by.starts_with("rep-"));
        }
        assert!(notes[2].content.starts_with("Note content 3: "));
    }
}
