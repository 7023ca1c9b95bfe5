// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic text shaping for left-to-right-only document renderers.
//!
//! PDF text drawing calls place glyphs left to right and do no contextual
//! shaping of their own. Before an Arabic string reaches such a renderer it
//! has to be converted into presentation-form codepoints (one glyph per
//! letter shape) and put into visual order. This module owns both steps.
//!
//! # Architecture
//!
//! - **Script detection**: [`contains_arabic`] gates whether shaping runs.
//!
//! - **ArabicShaper**: selects isolated/initial/medial/final forms from
//!   static presentation-form tables, merges LAM+ALEF into one glyph, and
//!   reverses the result into visual order.
//!
//! - **Numeric isolation**: [`isolate_numeric`] pre-reverses numbers that
//!   get embedded in Arabic text so they read correctly after reversal.
//!
//! - **TableHeaderSpacer**: pads shaped text with zero-width marks for
//!   table renderers that split glyph runs.
//!
//! # Example
//!
//! ```
//! use qadaya_text::shaping::process_arabic_text;
//!
//! // beh + seen + meem, emitted in visual order
//! assert_eq!(process_arabic_text("بسم"), "\u{FEE2}\u{FEB4}\u{FE91}");
//! assert_eq!(process_arabic_text("Invoice"), "Invoice");
//! ```

use serde::Serialize;

pub mod arabic;
pub mod numeric;
pub mod table_header;
pub mod unicode_data;

pub use arabic::ArabicShaper;
pub use numeric::isolate_numeric;
pub use table_header::{TableHeaderSpacer, shape_for_table_header};
pub use unicode_data::contains_arabic;

/// Positional forms for Arabic letters.
///
/// A letter changes shape depending on whether it joins the letter before
/// it, the letter after it, both, or neither.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionalForm {
    /// Standalone form - character not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Resolve the form from the two joining decisions.
    pub fn from_joins(joins_prev: bool, joins_next: bool) -> Self {
        match (joins_prev, joins_next) {
            (false, false) => Self::Isolated,
            (false, true) => Self::Initial,
            (true, false) => Self::Final,
            (true, true) => Self::Medial,
        }
    }

    /// Index of this form in a presentation-form table entry.
    ///
    /// Entries are ordered isolated, final, initial, medial, the same order
    /// the forms appear in the Presentation Forms-B block.
    pub fn table_index(&self) -> usize {
        match self {
            Self::Isolated => 0,
            Self::Final => 1,
            Self::Initial => 2,
            Self::Medial => 3,
        }
    }

    /// Get a human-readable name for this form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
        }
    }
}

/// One output glyph of the shaper, in logical order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShapedGlyph {
    /// Input characters this glyph stands for (two for a LAM-ALEF ligature)
    pub source: String,
    /// Emitted codepoint
    pub glyph: char,
    /// Resolved form, or `None` for pass-through characters
    pub form: Option<PositionalForm>,
    /// Whether this glyph merges LAM with a following ALEF
    pub ligature: bool,
}

impl ShapedGlyph {
    /// Create a glyph for a shaped letter.
    pub fn new(source: char, glyph: char, form: PositionalForm) -> Self {
        Self {
            source: source.to_string(),
            glyph,
            form: Some(form),
            ligature: false,
        }
    }

    /// Create a glyph for a character copied through unchanged.
    pub fn pass_through(c: char) -> Self {
        Self {
            source: c.to_string(),
            glyph: c,
            form: None,
            ligature: false,
        }
    }

    /// Create a merged LAM-ALEF glyph.
    pub fn ligature(source: &[char], glyph: char, form: PositionalForm) -> Self {
        Self {
            source: source.iter().collect(),
            glyph,
            form: Some(form),
            ligature: true,
        }
    }
}

/// Shape an Arabic-containing string into visual-order presentation forms.
///
/// Callers are expected to check [`contains_arabic`] first; use
/// [`process_arabic_text`] for the guarded version.
pub fn shape_arabic(text: &str) -> String {
    ArabicShaper::new().shape(text)
}

/// Prepare any string for the renderer.
///
/// Empty input returns an empty string and text without Arabic characters is
/// returned unchanged; everything else is shaped.
pub fn process_arabic_text(text: &str) -> String {
    process_arabic_text_with(&ArabicShaper::new(), text)
}

/// [`process_arabic_text`] with an explicitly configured shaper.
pub fn process_arabic_text_with(shaper: &ArabicShaper, text: &str) -> String {
    if text.is_empty() || !contains_arabic(text) {
        return text.to_string();
    }
    shaper.shape(text)
}

/// Prepare a table header cell. Empty input returns an empty string.
pub fn process_table_header(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    shape_for_table_header(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_form_table_index() {
        assert_eq!(PositionalForm::Isolated.table_index(), 0);
        assert_eq!(PositionalForm::Final.table_index(), 1);
        assert_eq!(PositionalForm::Initial.table_index(), 2);
        assert_eq!(PositionalForm::Medial.table_index(), 3);
    }

    #[test]
    fn test_positional_form_from_joins() {
        assert_eq!(PositionalForm::from_joins(false, false), PositionalForm::Isolated);
        assert_eq!(PositionalForm::from_joins(false, true), PositionalForm::Initial);
        assert_eq!(PositionalForm::from_joins(true, false), PositionalForm::Final);
        assert_eq!(PositionalForm::from_joins(true, true), PositionalForm::Medial);
    }

    #[test]
    fn test_positional_form_name() {
        assert_eq!(PositionalForm::Isolated.name(), "isolated");
        assert_eq!(PositionalForm::Initial.name(), "initial");
        assert_eq!(PositionalForm::Medial.name(), "medial");
        assert_eq!(PositionalForm::Final.name(), "final");
    }

    #[test]
    fn test_process_empty() {
        assert_eq!(process_arabic_text(""), "");
        assert_eq!(process_table_header(""), "");
    }

    #[test]
    fn test_process_non_arabic_passes_through() {
        for s in ["Invoice #42", "Case 2024/117", "ÉTÉ", "12,500.00", "\u{FE8D}"] {
            assert_eq!(process_arabic_text(s), s);
        }
    }

    #[test]
    fn test_process_arabic_is_shaped() {
        // alef alone resolves to its isolated form
        assert_eq!(process_arabic_text("ا"), "\u{FE8D}");
        assert_eq!(shape_arabic("ا"), "\u{FE8D}");
    }

    #[test]
    fn test_process_with_logical_order_shaper() {
        let shaper = ArabicShaper::with_visual_order(false);
        assert_eq!(
            process_arabic_text_with(&shaper, "بسم"),
            "\u{FE91}\u{FEB4}\u{FEE2}"
        );
        assert_eq!(process_arabic_text_with(&shaper, "abc"), "abc");
    }

    #[test]
    fn test_shaped_glyph_constructors() {
        let glyph = ShapedGlyph::new('\u{0628}', '\u{FE91}', PositionalForm::Initial);
        assert_eq!(glyph.source, "\u{0628}");
        assert_eq!(glyph.form, Some(PositionalForm::Initial));
        assert!(!glyph.ligature);

        let lig = ShapedGlyph::ligature(&['\u{0644}', '\u{0627}'], '\u{FEFB}', PositionalForm::Isolated);
        assert_eq!(lig.source, "لا");
        assert!(lig.ligature);

        let pass = ShapedGlyph::pass_through('x');
        assert_eq!(pass.glyph, 'x');
        assert_eq!(pass.form, None);
    }
}
