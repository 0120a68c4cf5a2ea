//! The central `Tracker` struct: one handler per user intent.
//!
//! Every handler runs the same shape: validate, mutate the in-memory
//! state, persist the affected slice, report an [`Outcome`]. Persisting
//! happens before any rendering the caller does, so a rendering failure
//! can never lose an applied mutation.

use crate::config::Config;
use crate::habits::Habit;
use crate::journal::JournalEntry;
use crate::keys;
use crate::mood::Mood;
use crate::state::DayState;
use crate::store::Store;
use crate::theme::Theme;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use log::debug;

/// What became of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation was applied and persisted.
    Saved,
    /// Validation declined the intent: empty input, or a counter already
    /// at its bound. No state change, no write.
    Ignored,
    /// The intent referenced a task id that no longer exists.
    NotFound,
}

/// Owns the configuration, the store, and the current day's state.
#[derive(Debug)]
pub struct Tracker {
    pub config: Config,
    pub store: Store,
    pub state: DayState,
}

impl Tracker {
    /// Creates a `Tracker` for today, loading configuration from standard
    /// paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a `Tracker` for today with a specific `Config`.
    pub fn with_config(config: Config) -> Result<Self> {
        Self::with_config_on(config, Local::now().date_naive())
    }

    /// Creates a `Tracker` with `date` as "today". Lets tests pin the day
    /// instead of depending on the wall clock.
    pub fn with_config_on(config: Config, date: NaiveDate) -> Result<Self> {
        let store = Store::open(&config.data_dir)?;
        let state = DayState::load(&store, date);
        Ok(Self {
            config,
            store,
            state,
        })
    }

    // --- Tasks ---

    /// Appends a pending task. Whitespace-only text is silently declined.
    pub fn add_task(&mut self, text: &str) -> Result<Outcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Outcome::Ignored);
        }
        let id = self.state.tasks.add(text);
        self.persist_tasks()?;
        debug!("added task {id}");
        Ok(Outcome::Saved)
    }

    /// Flips completion of the task with `id`.
    pub fn toggle_task(&mut self, id: u64) -> Result<Outcome> {
        if !self.state.tasks.toggle(id) {
            return Ok(Outcome::NotFound);
        }
        self.persist_tasks()?;
        Ok(Outcome::Saved)
    }

    /// Removes the task with `id`.
    pub fn delete_task(&mut self, id: u64) -> Result<Outcome> {
        if !self.state.tasks.delete(id) {
            return Ok(Outcome::NotFound);
        }
        self.persist_tasks()?;
        Ok(Outcome::Saved)
    }

    fn persist_tasks(&self) -> Result<()> {
        self.store
            .save_json(&keys::tasks(), &self.state.tasks.tasks())?;
        self.store
            .save(&keys::task_seq(), &self.state.tasks.next_id().to_string())
    }

    // --- Mood ---

    /// Records the day's mood, replacing any prior value immediately.
    pub fn select_mood(&mut self, mood: Mood) -> Result<Outcome> {
        self.state.mood = Some(mood);
        self.store
            .save(&keys::mood(self.state.date), mood.as_ref())?;
        debug!("mood set to {}", mood.as_ref());
        Ok(Outcome::Saved)
    }

    // --- Habits ---

    pub fn increment_water(&mut self) -> Result<Outcome> {
        if !self.state.habits.increment_water() {
            return Ok(Outcome::Ignored);
        }
        self.persist_habits()?;
        Ok(Outcome::Saved)
    }

    pub fn decrement_water(&mut self) -> Result<Outcome> {
        if !self.state.habits.decrement_water() {
            return Ok(Outcome::Ignored);
        }
        self.persist_habits()?;
        Ok(Outcome::Saved)
    }

    pub fn toggle_habit(&mut self, habit: Habit) -> Result<Outcome> {
        self.state.habits.toggle(habit);
        self.persist_habits()?;
        Ok(Outcome::Saved)
    }

    fn persist_habits(&self) -> Result<()> {
        self.store
            .save_json(&keys::habits(self.state.date), &self.state.habits)
    }

    // --- Goal & quick note ---

    /// Overwrites the day's goal. Whitespace-only text is silently
    /// declined.
    pub fn save_goal(&mut self, text: &str) -> Result<Outcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.state.goal = Some(text.to_string());
        self.store.save(&keys::goal(self.state.date), text)?;
        Ok(Outcome::Saved)
    }

    /// Overwrites the day's quick note, last write wins.
    pub fn save_quick_note(&mut self, text: &str) -> Result<Outcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.state.quick_note = Some(text.to_string());
        self.store.save(&keys::note(self.state.date), text)?;
        Ok(Outcome::Saved)
    }

    // --- Journal ---

    /// Appends a journal entry. Empty content is silently declined; an
    /// empty title falls back to the configured placeholder.
    pub fn save_journal_entry(&mut self, title: &str, content: &str) -> Result<Outcome> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(Outcome::Ignored);
        }
        let title = title.trim();
        let title = if title.is_empty() {
            self.config.untitled_placeholder.clone()
        } else {
            title.to_string()
        };
        self.state.entries.push(JournalEntry {
            title,
            content: content.to_string(),
            date: Local::now().naive_local(),
        });
        self.store
            .save_json(&keys::journal_entries(), &self.state.entries)?;
        debug!("journal entry saved ({} total)", self.state.entries.len());
        Ok(Outcome::Saved)
    }

    // --- Theme ---

    /// Persists the display theme, independent of all daily data.
    pub fn set_theme(&mut self, theme: Theme) -> Result<Outcome> {
        self.state.theme = theme;
        self.store.save(&keys::theme(), theme.as_ref())?;
        Ok(Outcome::Saved)
    }
}
