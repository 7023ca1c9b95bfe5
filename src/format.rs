// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Amount, date and label formatting for Arabic document text.
//!
//! Numbers go into Arabic sentences already reversed (see
//! [`isolate_numeric`]) so that the final visual-order reversal of the
//! sentence puts their digits back in reading order.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

use crate::settings::Settings;
use crate::shaping::unicode_data::is_numeric_like;
use crate::shaping::{ArabicShaper, contains_arabic, isolate_numeric, process_arabic_text_with};

/// Errors raised while formatting document values.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("date format {format:?} cannot render {date}")]
    Date { format: String, date: NaiveDate },
}

/// Check that a strftime string only contains specifiers chrono understands
/// and can render a calendar date (time-of-day specifiers cannot).
pub fn is_valid_date_format(format: &str) -> bool {
    if format.is_empty() || StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    let mut sample = String::new();
    write!(sample, "{}", NaiveDate::default().format(format)).is_ok()
}

/// Format `amount` with a fixed number of decimals and grouped thousands.
///
/// ```
/// use qadaya_text::format::group_thousands;
///
/// assert_eq!(group_thousands(1234.5, 2, ','), "1,234.50");
/// assert_eq!(group_thousands(-987654.0, 0, ','), "-987,654");
/// ```
pub fn group_thousands(amount: f64, decimals: usize, separator: char) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.*}", decimals, amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // -0.00 prints without a sign
    if amount < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Prepare a numeric string for embedding into text that `shaper` will
/// reverse. Logical-order shapers leave it untouched.
fn embed_numeric(shaper: &ArabicShaper, value: &str) -> String {
    if shaper.visual_order() {
        isolate_numeric(value)
    } else {
        value.to_string()
    }
}

/// Render an amount followed by the configured currency label, ready for
/// the renderer.
pub fn currency_text(settings: &Settings, amount: f64) -> String {
    let currency = &settings.currency;
    let number = group_thousands(amount, currency.decimals, currency.thousands_separator);

    if !contains_arabic(&currency.label) {
        return format!("{} {}", number, currency.label);
    }

    let shaper = settings.shaper();
    let phrase = format!("{} {}", embed_numeric(&shaper, &number), currency.label);
    process_arabic_text_with(&shaper, &phrase)
}

/// Render a date with the configured format.
///
/// The result is pre-reversed for embedding into Arabic text when the
/// shaper emits visual order.
pub fn date_text(settings: &Settings, date: NaiveDate) -> Result<String, FormatError> {
    let mut formatted = String::new();
    write!(formatted, "{}", date.format(&settings.date.format)).map_err(|_| FormatError::Date {
        format: settings.date.format.clone(),
        date,
    })?;

    Ok(embed_numeric(&settings.shaper(), &formatted))
}

/// Render a `label: value` line, such as an invoice quantity.
///
/// Numeric values are isolated so they survive the reversal of the Arabic
/// label; other values are shaped along with the label.
pub fn label_value(settings: &Settings, label: &str, value: &str) -> String {
    let shaper = settings.shaper();
    let line = if contains_arabic(label) && is_numeric_like(value) {
        format!("{}: {}", label, embed_numeric(&shaper, value))
    } else {
        format!("{}: {}", label, value)
    };

    tracing::debug!("Formatting label line ({} chars)", line.chars().count());
    process_arabic_text_with(&shaper, &line)
}
