use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute directory where the key-value store lives.
    pub data_dir: PathBuf,
    /// Format used when rendering the day header (e.g. `%A, %d %b %Y`).
    pub date_format: String,
    /// Title given to journal entries saved without one.
    pub untitled_placeholder: String,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    date_format: Option<String>,
    untitled_placeholder: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then
    /// native) and apply defaults for anything unset.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            data_dir: None,
            date_format: None,
            untitled_placeholder: None,
        });

        let data_dir = file_config.data_dir.unwrap_or_else(Self::default_data_dir);

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        let untitled_placeholder = file_config
            .untitled_placeholder
            .unwrap_or_else(|| "Untitled".to_string());

        Ok(Self {
            data_dir,
            date_format,
            untitled_placeholder,
        })
    }

    /// Default store root: `{data_dir}/daybook`
    /// - macOS:   `~/Library/Application Support/daybook`
    /// - Linux:   `$XDG_DATA_HOME/daybook` or `~/.local/share/daybook`
    /// - Windows: `%APPDATA%\daybook`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("daybook");
            p
        } else {
            PathBuf::from("./daybook")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daybook")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daybook").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            data_dir: None,
            date_format: None,
            untitled_placeholder: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(data_dir: PathBuf) -> Config {
        Config {
            data_dir,
            date_format: "%A, %d %b %Y".to_string(),
            untitled_placeholder: "Untitled".to_string(),
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("daybook")
                .join("config.toml");
            let expected_native = b.config_dir().join("daybook").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_data_dir_and_date_format() {
        let toml = r#"
            data_dir = "/tmp/my-daybook"
            date_format = "%Y-%m-%d"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.data_dir.as_deref(), Some(Path::new("/tmp/my-daybook")));
        assert_eq!(fc.date_format.as_deref(), Some("%Y-%m-%d"));
    }

    #[test]
    fn parse_file_accepts_untitled_placeholder() {
        let toml = r#"untitled_placeholder = "Sans titre""#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(fc.untitled_placeholder.as_deref(), Some("Sans titre"));
    }

    #[test]
    fn parse_file_accepts_empty_config() {
        let fc = super::Config::parse_file("").unwrap();
        assert!(fc.data_dir.is_none());
        assert!(fc.date_format.is_none());
    }
}
