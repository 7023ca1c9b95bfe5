// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic contextual shaper producing presentation-form codepoints.
//!
//! # Algorithm
//!
//! For each character with a presentation-form table entry:
//!
//! 1. Decide whether it joins the previous character: it must accept a
//!    join from the right and the previous character must join forward
//! 2. Decide whether it joins the next character the same way
//! 3. Combine both into a positional form and emit the table entry for it
//!
//! Characters without a table entry are copied through. LAM followed by an
//! ALEF variant is merged into one ligature glyph before form selection.
//!
//! # Visual order
//!
//! The output is reversed after shaping. The renderers this feeds lay text
//! out left to right only, so RTL reordering has to happen here. The whole
//! run is reversed, Latin text and digits included; use
//! [`isolate_numeric`](super::isolate_numeric) on numbers embedded in
//! Arabic text.

use super::unicode_data::{
    LAM, is_alef_variant, joining_type, lam_alef_ligature, presentation_forms,
};
use super::{PositionalForm, ShapedGlyph};

/// Arabic shaping engine.
///
/// # Example
///
/// ```
/// use qadaya_text::shaping::ArabicShaper;
///
/// let shaper = ArabicShaper::new();
/// // lam + alef collapse into a single ligature glyph
/// assert_eq!(shaper.shape("لا"), "\u{FEFB}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArabicShaper {
    visual_order: bool,
}

impl Default for ArabicShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl ArabicShaper {
    /// Create a shaper that emits visual (reversed) order.
    pub fn new() -> Self {
        Self { visual_order: true }
    }

    /// Create a shaper, choosing between visual order (reversed) and
    /// logical order output.
    pub fn with_visual_order(visual_order: bool) -> Self {
        Self { visual_order }
    }

    /// Whether output is reversed into visual order.
    pub fn visual_order(&self) -> bool {
        self.visual_order
    }

    /// Shape a string into presentation forms.
    ///
    /// Characters without presentation forms pass through unchanged but are
    /// still part of the reversal.
    pub fn shape(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let glyphs = self.analyze(&chars);

        tracing::debug!(
            "Shaped {} chars into {} glyphs",
            chars.len(),
            glyphs.len()
        );

        if self.visual_order {
            glyphs.iter().rev().map(|g| g.glyph).collect()
        } else {
            glyphs.iter().map(|g| g.glyph).collect()
        }
    }

    /// Shape a character sequence into glyph records, in logical order.
    ///
    /// This is the buffer `shape` builds its output from. A LAM-ALEF pair
    /// produces one record covering both input characters.
    pub fn analyze(&self, text: &[char]) -> Vec<ShapedGlyph> {
        let mut out: Vec<ShapedGlyph> = Vec::with_capacity(text.len());
        let mut i = 0;

        while i < text.len() {
            let c = text[i];

            let Some(forms) = presentation_forms(c) else {
                out.push(ShapedGlyph::pass_through(c));
                i += 1;
                continue;
            };

            // LAM + ALEF: emit the ligature and consume the ALEF as well
            if c == LAM {
                if let Some(alef) = text.get(i + 1).copied().filter(|&n| is_alef_variant(n)) {
                    let form = if self.connects_to_prev(text, i) {
                        PositionalForm::Medial
                    } else {
                        PositionalForm::Initial
                    };
                    let merged = forms
                        .get(form.table_index())
                        .and_then(|&lam_form| lam_alef_ligature(lam_form, alef));
                    if let Some(merged) = merged {
                        tracing::trace!("LAM-ALEF ligature U+{:04X} at {}", merged as u32, i);
                        out.push(ShapedGlyph::ligature(
                            &text[i..i + 2],
                            merged,
                            ligature_form(form),
                        ));
                        i += 2;
                        continue;
                    }
                }
            }

            // An already emitted LAM form (pre-shaped input) followed by ALEF
            if let Some(last) = out.last_mut() {
                if let Some(merged) = lam_alef_ligature(last.glyph, c) {
                    tracing::trace!("Merged emitted U+{:04X} with ALEF at {}", last.glyph as u32, i);
                    let form = if matches!(last.glyph, '\u{FEDE}' | '\u{FEE0}') {
                        PositionalForm::Final
                    } else {
                        PositionalForm::Isolated
                    };
                    last.source.push(c);
                    last.glyph = merged;
                    last.form = Some(form);
                    last.ligature = true;
                    i += 1;
                    continue;
                }
            }

            let form = self.determine_form(text, i);
            let glyph = forms
                .get(form.table_index())
                .or_else(|| forms.first())
                .copied()
                .unwrap_or(c);
            out.push(ShapedGlyph::new(c, glyph, form));
            i += 1;
        }

        out
    }

    /// Determine the positional form of the character at `index`.
    ///
    /// Characters without presentation forms, and indices past the end of
    /// `text`, are always isolated.
    pub fn determine_form(&self, text: &[char], index: usize) -> PositionalForm {
        let Some(&c) = text.get(index) else {
            return PositionalForm::Isolated;
        };
        if presentation_forms(c).is_none() {
            return PositionalForm::Isolated;
        }

        PositionalForm::from_joins(
            self.connects_to_prev(text, index),
            self.connects_to_next(text, index),
        )
    }

    fn connects_to_prev(&self, text: &[char], index: usize) -> bool {
        index > 0 && can_connect_to_prev(text[index]) && can_connect_to_next(text[index - 1])
    }

    fn connects_to_next(&self, text: &[char], index: usize) -> bool {
        index + 1 < text.len()
            && can_connect_to_next(text[index])
            && can_connect_to_prev(text[index + 1])
    }
}

/// Whether `c` has an initial or medial form.
fn can_connect_to_next(c: char) -> bool {
    joining_type(c).joins_forward()
}

/// Whether `c` has a final form, or lies in the main letter range
/// U+0622–U+064A.
fn can_connect_to_prev(c: char) -> bool {
    joining_type(c).joins_backward() || ('\u{0622}'..='\u{064A}').contains(&c)
}

/// Form of a ligature given the form its LAM would have taken.
fn ligature_form(lam_form: PositionalForm) -> PositionalForm {
    match lam_form {
        PositionalForm::Medial | PositionalForm::Final => PositionalForm::Final,
        PositionalForm::Initial | PositionalForm::Isolated => PositionalForm::Isolated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logical(text: &str) -> Vec<char> {
        let chars: Vec<char> = text.chars().collect();
        ArabicShaper::new()
            .analyze(&chars)
            .iter()
            .map(|g| g.glyph)
            .collect()
    }

    fn forms(text: &str) -> Vec<Option<PositionalForm>> {
        let chars: Vec<char> = text.chars().collect();
        ArabicShaper::new()
            .analyze(&chars)
            .iter()
            .map(|g| g.form)
            .collect()
    }

    #[test]
    fn test_single_char_isolated() {
        let shaper = ArabicShaper::new();
        assert_eq!(shaper.shape("ا"), "\u{FE8D}"); // alef
        assert_eq!(shaper.shape("ب"), "\u{FE8F}"); // beh
        assert_eq!(shaper.shape("ل"), "\u{FEDD}"); // lam
    }

    #[test]
    fn test_two_dual_joining() {
        // beh + meem
        assert_eq!(logical("بم"), vec!['\u{FE91}', '\u{FEE2}']);
        assert_eq!(
            forms("بم"),
            vec![Some(PositionalForm::Initial), Some(PositionalForm::Final)]
        );
    }

    #[test]
    fn test_three_beh_medial_and_reversed() {
        let shaper = ArabicShaper::new();
        let shaped: Vec<char> = shaper.shape("ببب").chars().collect();

        // first input glyph (initial) comes last in visual order
        assert_eq!(shaped, vec!['\u{FE90}', '\u{FE92}', '\u{FE91}']);
    }

    #[test]
    fn test_right_joining_alef() {
        // beh + alef
        assert_eq!(logical("با"), vec!['\u{FE91}', '\u{FE8E}']);
    }

    #[test]
    fn test_alef_breaks_joining() {
        // alef + beh + meem: alef doesn't join forward, so beh is initial
        assert_eq!(
            forms("ابم"),
            vec![
                Some(PositionalForm::Isolated),
                Some(PositionalForm::Initial),
                Some(PositionalForm::Final),
            ]
        );
    }

    #[test]
    fn test_word_with_multiple_non_joiners() {
        // beh + alef + beh + alef: two separate pairs
        assert_eq!(
            logical("بابا"),
            vec!['\u{FE91}', '\u{FE8E}', '\u{FE91}', '\u{FE8E}']
        );
    }

    #[test]
    fn test_determine_form_directly() {
        let shaper = ArabicShaper::new();

        let text1: Vec<char> = "ب".chars().collect();
        assert_eq!(shaper.determine_form(&text1, 0), PositionalForm::Isolated);

        let text2: Vec<char> = "بم".chars().collect();
        assert_eq!(shaper.determine_form(&text2, 0), PositionalForm::Initial);
        assert_eq!(shaper.determine_form(&text2, 1), PositionalForm::Final);

        let text3: Vec<char> = "بسم".chars().collect();
        assert_eq!(shaper.determine_form(&text3, 1), PositionalForm::Medial);
    }

    #[test]
    fn test_determine_form_out_of_range_is_isolated() {
        let shaper = ArabicShaper::new();
        assert_eq!(shaper.determine_form(&['\u{0628}'], 1), PositionalForm::Isolated);
        assert_eq!(shaper.determine_form(&[], 0), PositionalForm::Isolated);
    }

    #[test]
    fn test_latin_characters_break_joining() {
        let shaper = ArabicShaper::new();
        let text: Vec<char> = "بAم".chars().collect();

        assert_eq!(shaper.determine_form(&text, 1), PositionalForm::Isolated);
        assert_eq!(shaper.determine_form(&text, 0), PositionalForm::Isolated);
        assert_eq!(shaper.determine_form(&text, 2), PositionalForm::Isolated);
    }

    #[test]
    fn test_hamza_does_not_accept_join() {
        // beh + hamza: hamza has one form and lies outside U+0622–U+064A
        assert_eq!(logical("بء"), vec!['\u{FE8F}', '\u{FE80}']);
    }

    #[test]
    fn test_unmapped_letter_in_range_accepts_join() {
        // beh + tatweel: tatweel has no forms but is inside U+0622–U+064A
        assert_eq!(logical("بـ"), vec!['\u{FE91}', '\u{0640}']);
    }

    #[test]
    fn test_long_word() {
        // beh seen meem lam lam heh
        assert_eq!(
            forms("بسملله"),
            vec![
                Some(PositionalForm::Initial),
                Some(PositionalForm::Medial),
                Some(PositionalForm::Medial),
                Some(PositionalForm::Medial),
                Some(PositionalForm::Medial),
                Some(PositionalForm::Final),
            ]
        );
    }

    #[test]
    fn test_lam_alef_collapses_to_one_glyph() {
        let shaped = ArabicShaper::new().shape("لا");
        assert_eq!(shaped.chars().count(), 1);
        assert_eq!(shaped, "\u{FEFB}");
    }

    #[test]
    fn test_lam_alef_variants() {
        let shaper = ArabicShaper::new();
        assert_eq!(shaper.shape("لآ"), "\u{FEF5}");
        assert_eq!(shaper.shape("لأ"), "\u{FEF7}");
        assert_eq!(shaper.shape("لإ"), "\u{FEF9}");
    }

    #[test]
    fn test_joined_lam_alef_uses_final_ligature() {
        // seen + lam + alef + meem ("salam")
        assert_eq!(logical("سلام"), vec!['\u{FEB3}', '\u{FEFC}', '\u{FEE1}']);
        assert_eq!(
            ArabicShaper::new().shape("سلام"),
            "\u{FEE1}\u{FEFC}\u{FEB3}"
        );
    }

    #[test]
    fn test_ligature_skips_exactly_one_char() {
        // lam + alef + beh: beh follows the consumed alef and stays isolated
        assert_eq!(logical("لاب"), vec!['\u{FEFB}', '\u{FE8F}']);
        // lam + lam + alef: first lam joins the ligature
        assert_eq!(logical("للا"), vec!['\u{FEDF}', '\u{FEFC}']);
        // two ligatures in a row
        assert_eq!(logical("لالا"), vec!['\u{FEFB}', '\u{FEFB}']);
    }

    #[test]
    fn test_ligature_record_covers_both_chars() {
        let chars: Vec<char> = "سلا".chars().collect();
        let glyphs = ArabicShaper::new().analyze(&chars);
        assert_eq!(glyphs.len(), 2);
        assert_eq!(glyphs[1].source, "لا");
        assert!(glyphs[1].ligature);
        assert_eq!(glyphs[1].form, Some(PositionalForm::Final));
    }

    #[test]
    fn test_preshaped_lam_merges_with_alef() {
        // initial LAM presentation form passes through, then merges
        assert_eq!(logical("\u{FEDF}ا"), vec!['\u{FEFB}']);
        // medial LAM form gives the final ligature
        assert_eq!(logical("\u{FEE0}أ"), vec!['\u{FEF8}']);
    }

    #[test]
    fn test_lam_without_alef_is_ordinary() {
        // beh + lam: lam takes its final form
        assert_eq!(logical("بل"), vec!['\u{FE91}', '\u{FEDE}']);
        // lam at the end of input
        assert_eq!(logical("ل"), vec!['\u{FEDD}']);
    }

    #[test]
    fn test_mixed_text_reversed_in_full() {
        let shaper = ArabicShaper::new();
        // alef, space, "AB"
        assert_eq!(shaper.shape("ا AB"), "BA \u{FE8D}");
    }

    #[test]
    fn test_logical_order_output() {
        let shaper = ArabicShaper::with_visual_order(false);
        assert!(!shaper.visual_order());
        assert_eq!(shaper.shape("ببب"), "\u{FE91}\u{FE92}\u{FE90}");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(ArabicShaper::new().shape(""), "");
        assert!(ArabicShaper::new().analyze(&[]).is_empty());
    }
}
