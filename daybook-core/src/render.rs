//! Pure Markdown rendering helpers.
//!
//! Every function here is a projection of `DayState` into text. Nothing in
//! this module mutates state or touches the store, so a rendering problem
//! can never affect what was persisted.

use crate::config::Config;
use crate::habits::{Habit, Habits, WATER_MAX};
use crate::pages::Page;
use crate::state::DayState;
use crate::tasks::Task;
use chrono::NaiveDate;
use strum::IntoEnumIterator;

/// Words in `text`, split on runs of whitespace. Empty or whitespace-only
/// text counts zero.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// `# Friday, 15 Aug 2025`
pub fn format_day_header(date: NaiveDate, date_format: &str) -> String {
    format!("# {}", date.format(date_format))
}

/// Renders the named page from the current state.
pub fn format_page(state: &DayState, config: &Config, page: Page) -> String {
    match page {
        Page::Today => format_today(state, config),
        Page::Journal => format_journal(state),
        Page::Calendar => format_placeholder("Calendar", "Calendar view coming soon."),
        Page::Projects => format_placeholder("Projects", "Project tracking coming soon."),
        Page::Insights => format_placeholder("Insights", "Stats and insights coming soon."),
    }
}

/// The main dashboard: tasks, mood, habits, goal, and quick note.
pub fn format_today(state: &DayState, config: &Config) -> String {
    let mut out = format_day_header(state.date, &config.date_format);
    out.push_str("\n\n## Tasks\n");
    if state.tasks.is_empty() {
        out.push_str("*No tasks yet.*\n");
    } else {
        for task in state.tasks.tasks() {
            out.push_str(&format_task_line(task));
            out.push('\n');
        }
    }

    out.push_str("\n## Mood\n");
    match state.mood {
        Some(mood) => out.push_str(&format!("{}\n", mood.as_ref())),
        None => out.push_str("*Not recorded.*\n"),
    }

    out.push_str("\n## Habits\n");
    out.push_str(&format!("{}\n", water_gauge(&state.habits)));
    for habit in Habit::iter() {
        let mark = if state.habits.done(habit) { "x" } else { " " };
        out.push_str(&format!("- [{mark}] {}\n", habit.as_ref()));
    }

    out.push_str("\n## Goal\n");
    match &state.goal {
        Some(goal) => out.push_str(&format!("{goal}\n")),
        None => out.push_str("*No goal set.*\n"),
    }

    out.push_str("\n## Quick note\n");
    match &state.quick_note {
        Some(note) => out.push_str(&format!("{note}\n\n*{} words*\n", word_count(note))),
        None => out.push_str("*Nothing written today.*\n"),
    }

    out
}

/// The journal page: saved entries, oldest first.
pub fn format_journal(state: &DayState) -> String {
    let mut out = String::from("# Journal\n");
    if state.entries.is_empty() {
        out.push_str("\n*No entries yet.*\n");
        return out;
    }
    for entry in &state.entries {
        out.push_str(&format!(
            "\n## {} - {}\n\n{}\n",
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.title,
            entry.content.trim_end_matches('\n')
        ));
    }
    out
}

/// Checkbox line carrying the task's stable id.
pub fn format_task_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    format!("- [{mark}] {}  `#{}`", task.text, task.id)
}

/// `Water: 3/8`
pub fn water_gauge(habits: &Habits) -> String {
    format!("Water: {}/{WATER_MAX}", habits.water)
}

fn format_placeholder(title: &str, body: &str) -> String {
    format!("# {title}\n\n*{body}*\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use crate::journal::JournalEntry;
    use crate::mood::Mood;
    use crate::store::Store;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn mk_state() -> DayState {
        let tmp = tempdir().unwrap();
        let store = Store::open(tmp.path()).unwrap();
        DayState::load(&store, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap())
    }

    #[test]
    fn word_count_splits_on_whitespace_runs() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \t\n"), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  two\t words \n here "), 3);
    }

    #[test]
    fn header_formats_readably() {
        let d = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(); // Friday
        let s = format_day_header(d, "%A, %d %b %Y");
        assert!(s.starts_with("# Fri") || s.starts_with("# Friday"));
        assert!(s.contains("15 Aug 2025"));
    }

    #[test]
    fn task_line_shows_completion_and_id() {
        let task = Task {
            id: 3,
            text: "Buy milk".into(),
            completed: false,
        };
        assert_eq!(format_task_line(&task), "- [ ] Buy milk  `#3`");
        let done = Task {
            completed: true,
            ..task
        };
        assert!(format_task_line(&done).starts_with("- [x]"));
    }

    #[test]
    fn today_page_renders_one_unchecked_item_after_add() {
        let mut state = mk_state();
        state.tasks.add("Buy milk");
        let cfg = mk_config("/tmp/unused".into());
        let md = format_today(&state, &cfg);
        assert!(md.contains("- [ ] Buy milk"));
        assert!(!md.contains("No tasks yet"));
    }

    #[test]
    fn today_page_shows_mood_and_water() {
        let mut state = mk_state();
        state.mood = Some(Mood::Good);
        state.habits.increment_water();
        let cfg = mk_config("/tmp/unused".into());
        let md = format_today(&state, &cfg);
        assert!(md.contains("good"));
        assert!(md.contains("Water: 1/8"));
    }

    #[test]
    fn today_page_counts_quick_note_words() {
        let mut state = mk_state();
        state.quick_note = Some("three little words".into());
        let cfg = mk_config("/tmp/unused".into());
        let md = format_today(&state, &cfg);
        assert!(md.contains("*3 words*"));
    }

    #[test]
    fn journal_page_lists_entries_in_order() {
        let mut state = mk_state();
        let noon = NaiveDate::from_ymd_opt(2025, 8, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        state.entries.push(JournalEntry {
            title: "First".into(),
            content: "one".into(),
            date: noon,
        });
        state.entries.push(JournalEntry {
            title: "Second".into(),
            content: "two".into(),
            date: noon,
        });
        let md = format_journal(&state);
        let first = md.find("First").unwrap();
        let second = md.find("Second").unwrap();
        assert!(first < second);
        assert!(md.contains("2025-08-15 12:00"));
    }

    #[test]
    fn placeholder_pages_render_a_stub() {
        let state = mk_state();
        let cfg = mk_config("/tmp/unused".into());
        for page in [Page::Calendar, Page::Projects, Page::Insights] {
            let md = format_page(&state, &cfg, page);
            assert!(md.contains("coming soon"));
        }
    }
}
