//! Display theme preference, persisted independently of all daily data.

use strum_macros::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Guesses the terminal's color scheme when no preference is stored.
    ///
    /// Reads the `COLORFGBG` convention ("fg;bg"); a light background
    /// (color 7 or 15) means a light theme, anything else means dark.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    fn from_colorfgbg(var: Option<&str>) -> Self {
        let Some(var) = var else {
            return Theme::Dark;
        };
        match var.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }
}
