use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The closed set of moods, one of which can be recorded per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Mood {
    Ecstatic,
    Happy,
    Good,
    Neutral,
    Sad,
    Angry,
    Tired,
}
