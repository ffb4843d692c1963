use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use crate::models::Locale;

/// Sighting offsets beyond a few days are almost certainly typos.
pub const HIJRI_OFFSET_RANGE: RangeInclusive<i32> = -3..=3;

pub fn check_hijri_offset(offset: i32) -> Result<()> {
    if HIJRI_OFFSET_RANGE.contains(&offset) {
        Ok(())
    } else {
        Err(anyhow!(
            "hijri_offset {} is out of range ({}..={})",
            offset,
            HIJRI_OFFSET_RANGE.start(),
            HIJRI_OFFSET_RANGE.end()
        ))
    }
}

fn default_hijri_offset() -> i32 {
    0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Primary language for month names; the other one is shown beneath it.
    #[serde(default)]
    pub locale: Locale,
    /// Days to add/subtract from the Gregorian date before converting "today".
    /// 0 = tabular calendar as-is, -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "taqwim")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        check_hijri_offset(config.calendar.hijri_offset)
            .with_context(|| format!("Validating {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = AppConfig::load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.calendar.locale, Locale::En);
        assert_eq!(config.calendar.hijri_offset, 0);
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            calendar: CalendarConfig {
                locale: Locale::Ar,
                hijri_offset: -1,
            },
        };
        config.save_to(&path).expect("save");
        assert_eq!(AppConfig::load_from(&path).expect("load"), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\nlocale = \"ar\"\n").expect("write");
        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.calendar.locale, Locale::Ar);
        assert_eq!(config.calendar.hijri_offset, 0);
    }

    #[test]
    fn bad_locale_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\nlocale = \"fr\"\n").expect("write");
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn offset_outside_range_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[calendar]\nhijri_offset = 400\n").expect("write");
        assert!(AppConfig::load_from(&path).is_err());

        std::fs::write(&path, "[calendar]\nhijri_offset = -3\n").expect("write");
        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.calendar.hijri_offset, -3);
        assert!(check_hijri_offset(4).is_err());
    }
}
