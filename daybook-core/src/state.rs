//! In-memory mirror of the current day's tracked entities.

use crate::habits::Habits;
use crate::journal::JournalEntry;
use crate::keys;
use crate::mood::Mood;
use crate::store::Store;
use crate::tasks::{Task, TaskList};
use crate::theme::Theme;
use chrono::NaiveDate;
use log::warn;

/// The day's slice of every tracked entity, lazily populated from the
/// store at startup. Holds only one calendar day; day-scoped values from
/// other days are never read in.
#[derive(Debug)]
pub struct DayState {
    pub date: NaiveDate,
    pub tasks: TaskList,
    pub mood: Option<Mood>,
    pub habits: Habits,
    pub goal: Option<String>,
    pub quick_note: Option<String>,
    pub entries: Vec<JournalEntry>,
    pub theme: Theme,
}

impl DayState {
    /// Loads the state for `date`. Absent keys yield empty defaults and
    /// corrupt values are dropped, so loading never fails.
    pub fn load(store: &Store, date: NaiveDate) -> Self {
        let tasks: Vec<Task> = store.load_json(&keys::tasks(), Vec::new());
        let next_id = store
            .load(&keys::task_seq())
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(1);

        let mood = store.load(&keys::mood(date)).and_then(|raw| {
            match raw.parse() {
                Ok(mood) => Some(mood),
                Err(_) => {
                    warn!("discarding unknown stored mood '{raw}'");
                    None
                }
            }
        });

        let habits: Habits = store.load_json(&keys::habits(date), Habits::default());

        let theme = store
            .load(&keys::theme())
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(Theme::detect);

        Self {
            date,
            tasks: TaskList::from_parts(tasks, next_id),
            mood,
            habits: habits.clamped(),
            goal: store.load(&keys::goal(date)),
            quick_note: store.load(&keys::note(date)),
            entries: store.load_json(&keys::journal_entries(), Vec::new()),
            theme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habits::WATER_MAX;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn mk_store() -> (Store, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        (store, tmp)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_store_loads_empty_state() {
        let (store, _tmp) = mk_store();
        let state = DayState::load(&store, day(2025, 8, 15));
        assert!(state.tasks.is_empty());
        assert_eq!(state.mood, None);
        assert_eq!(state.habits, Habits::default());
        assert_eq!(state.goal, None);
        assert_eq!(state.quick_note, None);
        assert!(state.entries.is_empty());
        assert_eq!(state.theme, Theme::detect());
    }

    #[test]
    fn day_scoped_values_do_not_leak_across_days() {
        let (store, _tmp) = mk_store();
        let d1 = day(2025, 8, 15);
        store.save(&keys::note(d1), "a note for the 15th").unwrap();
        store.save(&keys::mood(d1), "happy").unwrap();

        let next_day = DayState::load(&store, day(2025, 8, 16));
        assert_eq!(next_day.quick_note, None);
        assert_eq!(next_day.mood, None);

        let same_day = DayState::load(&store, d1);
        assert_eq!(same_day.quick_note.as_deref(), Some("a note for the 15th"));
        assert_eq!(same_day.mood, Some(Mood::Happy));
    }

    #[test]
    fn corrupt_mood_loads_as_unset() {
        let (store, _tmp) = mk_store();
        let d = day(2025, 8, 15);
        store.save(&keys::mood(d), "not-a-mood").unwrap();
        let state = DayState::load(&store, d);
        assert_eq!(state.mood, None);
    }

    #[test]
    fn corrupt_habits_load_as_defaults() {
        let (store, _tmp) = mk_store();
        let d = day(2025, 8, 15);
        store.save(&keys::habits(d), "{broken").unwrap();
        let state = DayState::load(&store, d);
        assert_eq!(state.habits, Habits::default());
    }

    #[test]
    fn out_of_range_water_is_clamped_on_load() {
        let (store, _tmp) = mk_store();
        let d = day(2025, 8, 15);
        store
            .save(
                &keys::habits(d),
                r#"{"water":99,"exercise":false,"meditation":false}"#,
            )
            .unwrap();
        let state = DayState::load(&store, d);
        assert_eq!(state.habits.water, WATER_MAX);
    }

    #[test]
    fn theme_is_not_day_scoped() {
        let (store, _tmp) = mk_store();
        store.save(&keys::theme(), "light").unwrap();
        let state = DayState::load(&store, day(2025, 8, 16));
        assert_eq!(state.theme, Theme::Light);
    }
}
