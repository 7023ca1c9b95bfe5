// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Zero-width padding for shaped table header text.
//!
//! The table renderer used for invoice and case listings measures and
//! wraps cell text with its own segmentation, which splits runs of
//! presentation-form glyphs mid-word. Separating every glyph with a
//! zero-width space and bracketing the run with zero-width non-joiners stops
//! it from doing so. This works around that renderer; it is not general
//! text processing.

use super::ArabicShaper;
use super::unicode_data::contains_arabic;
use crate::settings;

/// Shaper wrapper that interleaves zero-width marks into its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableHeaderSpacer {
    shaper: ArabicShaper,
    separator: char,
    boundary: char,
}

impl Default for TableHeaderSpacer {
    fn default() -> Self {
        Self::new(
            ArabicShaper::new(),
            settings::table_header::SEPARATOR,
            settings::table_header::BOUNDARY,
        )
    }
}

impl TableHeaderSpacer {
    /// Create a spacer with explicit marks.
    pub fn new(shaper: ArabicShaper, separator: char, boundary: char) -> Self {
        Self {
            shaper,
            separator,
            boundary,
        }
    }

    /// Shape `text` and pad it. Text without Arabic is returned unchanged.
    pub fn apply(&self, text: &str) -> String {
        if !contains_arabic(text) {
            return text.to_string();
        }

        let shaped = self.shaper.shape(text);
        let mut out = String::with_capacity(shaped.len() * 2 + 8);
        out.push(self.boundary);
        for (i, c) in shaped.chars().enumerate() {
            if i > 0 {
                out.push(self.separator);
            }
            out.push(c);
        }
        out.push(self.boundary);
        out
    }
}

/// Shape a table header with the default zero-width marks.
pub fn shape_for_table_header(text: &str) -> String {
    TableHeaderSpacer::default().apply(text)
}
