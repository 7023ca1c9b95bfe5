// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Settings and configuration constants.
//!
//! Defaults live in the constants below and are exposed through the public
//! modules at the bottom. A [`Settings`] value can override any of them from
//! a TOML file; missing keys keep their defaults.

use serde::Deserialize;
use std::path::Path;

// ============================================================================
// SHAPING SETTINGS
// ============================================================================
/// Reverse shaped text into visual order. Turn off only for renderers that
/// run their own bidi reordering.
const VISUAL_ORDER: bool = true;

// ============================================================================
// TABLE HEADER SETTINGS
// ============================================================================
/// Mark inserted between adjacent shaped glyphs (ZERO WIDTH SPACE)
const TABLE_HEADER_SEPARATOR: char = '\u{200B}';

/// Mark placed at both ends of a header (ZERO WIDTH NON-JOINER)
const TABLE_HEADER_BOUNDARY: char = '\u{200C}';

// ============================================================================
// DOCUMENT FORMAT SETTINGS
// ============================================================================
/// Currency label appended to amounts (Saudi riyal abbreviation)
const CURRENCY_LABEL: &str = "ر.س";

/// Decimal places for amounts
const CURRENCY_DECIMALS: usize = 2;

/// Largest accepted `decimals` value
const CURRENCY_MAX_DECIMALS: usize = 6;

/// Thousands grouping separator
const CURRENCY_THOUSANDS_SEPARATOR: char = ',';

/// chrono format string for dates
const DATE_FORMAT: &str = "%d/%m/%Y";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Shaping settings
pub mod shaping {
    /// Reverse output into visual order
    pub const VISUAL_ORDER: bool = super::VISUAL_ORDER;
}

/// Table header padding marks
pub mod table_header {
    /// Between glyphs
    pub const SEPARATOR: char = super::TABLE_HEADER_SEPARATOR;

    /// At both ends
    pub const BOUNDARY: char = super::TABLE_HEADER_BOUNDARY;
}

/// Currency formatting
pub mod currency {
    pub const LABEL: &str = super::CURRENCY_LABEL;
    pub const DECIMALS: usize = super::CURRENCY_DECIMALS;
    pub const MAX_DECIMALS: usize = super::CURRENCY_MAX_DECIMALS;
    pub const THOUSANDS_SEPARATOR: char = super::CURRENCY_THOUSANDS_SEPARATOR;
}

/// Date formatting
pub mod date {
    pub const FORMAT: &str = super::DATE_FORMAT;
}

// ============================================================================
// FILE-BASED OVERRIDES
// ============================================================================

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("currency.decimals must be at most {max}, got {value}")]
    TooManyDecimals { value: usize, max: usize },

    #[error("date.format is not a valid strftime format: {0:?}")]
    InvalidDateFormat(String),
}

/// Complete settings, with every field defaulted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub shaping: ShapingSettings,
    pub table_header: TableHeaderSettings,
    pub currency: CurrencySettings,
    pub date: DateSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShapingSettings {
    pub visual_order: bool,
}

impl Default for ShapingSettings {
    fn default() -> Self {
        Self {
            visual_order: shaping::VISUAL_ORDER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableHeaderSettings {
    pub separator: char,
    pub boundary: char,
}

impl Default for TableHeaderSettings {
    fn default() -> Self {
        Self {
            separator: table_header::SEPARATOR,
            boundary: table_header::BOUNDARY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencySettings {
    pub label: String,
    pub decimals: usize,
    pub thousands_separator: char,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            label: currency::LABEL.to_string(),
            decimals: currency::DECIMALS,
            thousands_separator: currency::THOUSANDS_SEPARATOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DateSettings {
    pub format: String,
}

impl Default for DateSettings {
    fn default() -> Self {
        Self {
            format: date::FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        tracing::info!("Loading settings: {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        let settings: Self = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.currency.decimals > currency::MAX_DECIMALS {
            return Err(SettingsError::TooManyDecimals {
                value: self.currency.decimals,
                max: currency::MAX_DECIMALS,
            });
        }
        if !crate::format::is_valid_date_format(&self.date.format) {
            return Err(SettingsError::InvalidDateFormat(self.date.format.clone()));
        }
        Ok(())
    }

    /// Shaper configured from these settings.
    pub fn shaper(&self) -> crate::shaping::ArabicShaper {
        crate::shaping::ArabicShaper::with_visual_order(self.shaping.visual_order)
    }

    /// Table header spacer configured from these settings.
    pub fn table_header_spacer(&self) -> crate::shaping::TableHeaderSpacer {
        crate::shaping::TableHeaderSpacer::new(
            self.shaper(),
            self.table_header.separator,
            self.table_header.boundary,
        )
    }
}
