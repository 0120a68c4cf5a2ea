//! The day's habit counters: a saturating water count and two booleans.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Daily water target; the counter saturates here.
pub const WATER_MAX: u8 = 8;

/// The fixed set of toggleable habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Habit {
    Exercise,
    Meditation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habits {
    #[serde(default)]
    pub water: u8,
    #[serde(default)]
    pub exercise: bool,
    #[serde(default)]
    pub meditation: bool,
}

impl Habits {
    /// Caps a value loaded from storage; hand-edited files can exceed the
    /// ceiling.
    pub fn clamped(mut self) -> Self {
        self.water = self.water.min(WATER_MAX);
        self
    }

    /// Adds a glass of water. Saturating at the ceiling is a no-op, not an
    /// error; returns whether anything changed.
    pub fn increment_water(&mut self) -> bool {
        if self.water >= WATER_MAX {
            return false;
        }
        self.water += 1;
        true
    }

    /// Removes a glass of water, saturating at zero.
    pub fn decrement_water(&mut self) -> bool {
        if self.water == 0 {
            return false;
        }
        self.water -= 1;
        true
    }

    pub fn toggle(&mut self, habit: Habit) {
        match habit {
            Habit::Exercise => self.exercise = !self.exercise,
            Habit::Meditation => self.meditation = !self.meditation,
        }
    }

    pub fn done(&self, habit: Habit) -> bool {
        match habit {
            Habit::Exercise => self.exercise,
            Habit::Meditation => self.meditation,
        }
    }
}
