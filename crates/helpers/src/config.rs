//! Helper configuration.
//!
//! The locale and UTC offset used for calendar math and localized names are
//! explicit values passed to each helper. Nothing here is process-global:
//! [`HelperConfig::from_env`] reads the environment once and returns a
//! value the caller owns.
//!
//! | Variable | Default | Example |
//! |---|---|---|
//! | `FUNCHELPER_LOCALE` | `en_US` | `fr_FR` |
//! | `FUNCHELPER_UTC_OFFSET` | `+00:00` | `+05:30` |

use std::collections::HashMap;
use std::path::Path;

use chrono::{FixedOffset, Locale, Offset, Utc};

use crate::error::ConfigError;

pub const LOCALE_VAR: &str = "FUNCHELPER_LOCALE";
pub const UTC_OFFSET_VAR: &str = "FUNCHELPER_UTC_OFFSET";

/// Locale and time zone for date helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateConfig {
    /// Locale used for day and month names
    pub locale: Locale,
    /// Zone in which calendar fields (day, month, year) are evaluated
    pub offset: FixedOffset,
}

impl DateConfig {
    pub fn new(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            offset: Utc.fix(),
        }
    }
}

/// Top-level configuration for the helper library.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HelperConfig {
    pub date: DateConfig,
}

impl HelperConfig {
    /// Load from process environment variables, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from a `.env`-style file without touching the process
    /// environment. Keys missing from the file take their defaults.
    pub fn from_dotenv_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path.as_ref())? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Load using an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut date = DateConfig::default();

        if let Some(name) = lookup(LOCALE_VAR).filter(|v| !v.trim().is_empty()) {
            let name = name.trim();
            date.locale =
                Locale::try_from(name).map_err(|_| ConfigError::UnknownLocale(name.to_string()))?;
        }

        if let Some(value) = lookup(UTC_OFFSET_VAR).filter(|v| !v.trim().is_empty()) {
            let value = value.trim();
            date.offset = value
                .parse::<FixedOffset>()
                .map_err(|_| ConfigError::InvalidOffset {
                    value: value.to_string(),
                })?;
        }

        tracing::debug!(
            locale = ?date.locale,
            offset = %date.offset,
            "Helper configuration loaded"
        );

        Ok(Self { date })
    }
}
