//! Page navigation: a current-page selector plus cancellable transitions.
//!
//! Switching pages is a direct replace, no history stack. The cosmetic
//! fade is modeled as a generation-counted transition token: starting a
//! new transition invalidates any in-flight one, so a rapid
//! double-navigation cannot apply a stale page swap.

use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    #[default]
    Today,
    Calendar,
    Journal,
    Projects,
    Insights,
}

/// Token handed out when a page switch begins. Only the most recently
/// issued token is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub page: Page,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct Nav {
    current: Page,
    generation: u64,
}

impl Nav {
    pub fn current(&self) -> Page {
        self.current
    }

    /// Makes `page` the active page and returns the transition token for
    /// this switch, invalidating any token issued earlier.
    pub fn select(&mut self, page: Page) -> Transition {
        self.current = page;
        self.generation += 1;
        Transition {
            page,
            generation: self.generation,
        }
    }

    /// Whether `transition` is still the in-flight one. A deferred swap
    /// should be dropped when this returns `false`.
    pub fn is_current(&self, transition: Transition) -> bool {
        transition.generation == self.generation
    }
}
