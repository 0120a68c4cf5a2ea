//! Storage key derivation.
//!
//! Every persisted entity owns exactly one key. Day-scoped entities embed
//! the ISO calendar date in their key so values from different days never
//! collide; re-opening the app on the same day derives the same key.

use chrono::NaiveDate;

pub fn theme() -> String {
    "theme".to_string()
}

pub fn tasks() -> String {
    "tasks".to_string()
}

/// Counter backing stable task ids, persisted so ids survive restarts.
pub fn task_seq() -> String {
    "task-seq".to_string()
}

pub fn journal_entries() -> String {
    "journal-entries".to_string()
}

pub fn mood(date: NaiveDate) -> String {
    format!("mood-{}", day(date))
}

pub fn habits(date: NaiveDate) -> String {
    format!("habits-{}", day(date))
}

pub fn goal(date: NaiveDate) -> String {
    format!("goal-{}", day(date))
}

pub fn note(date: NaiveDate) -> String {
    format!("note-{}", day(date))
}

fn day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn day_scoped_keys_encode_the_date() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        assert_eq!(mood(d), "mood-2025-08-15");
        assert_eq!(habits(d), "habits-2025-08-15");
        assert_eq!(goal(d), "goal-2025-08-15");
        assert_eq!(note(d), "note-2025-08-15");
    }

    #[test]
    fn different_days_never_share_a_key() {
        let d1 = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2025, 8, 16).unwrap();
        assert_ne!(note(d1), note(d2));
        assert_ne!(mood(d1), mood(d2));
    }

    #[test]
    fn entities_never_share_a_key() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let keys = [
            theme(),
            tasks(),
            task_seq(),
            journal_entries(),
            mood(d),
            habits(d),
            goal(d),
            note(d),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
