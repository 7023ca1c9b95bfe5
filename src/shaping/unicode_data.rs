// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character data for Arabic presentation-form shaping.
//!
//! Forms are taken from the Arabic Presentation Forms-B block
//! (U+FE70–U+FEFF). See: https://www.unicode.org/charts/PDF/UFE70.pdf

use unicode_general_category::{GeneralCategory, get_general_category};

/// ARABIC LETTER LAM
pub const LAM: char = '\u{0644}';

/// The ALEF variants that merge with a preceding LAM.
pub const ALEF_VARIANTS: [char; 4] = ['\u{0622}', '\u{0623}', '\u{0625}', '\u{0627}'];

/// Joining type derived from the number of presentation forms a letter has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoiningType {
    /// Dual-joining: isolated, final, initial and medial forms.
    /// Examples: beh, seen, lam, yeh
    Dual,

    /// Right-joining: isolated and final forms only.
    /// Examples: alef, dal, reh, waw, teh marbuta
    Right,

    /// Non-joining: one form, or no table entry at all.
    /// Examples: hamza, Latin letters, digits
    #[default]
    NonJoining,
}

impl JoiningType {
    /// Can this character connect to the following character?
    #[inline]
    pub fn joins_forward(&self) -> bool {
        matches!(self, Self::Dual)
    }

    /// Can this character connect to the preceding character?
    #[inline]
    pub fn joins_backward(&self) -> bool {
        matches!(self, Self::Dual | Self::Right)
    }
}

/// Presentation forms for a shapable letter, ordered
/// `[isolated, final, initial, medial]`.
///
/// Returns `None` for characters that pass through shaping unchanged.
pub fn presentation_forms(c: char) -> Option<&'static [char]> {
    let forms: &'static [char] = match c {
        '\u{0621}' => &['\u{FE80}'],                                     // HAMZA
        '\u{0622}' => &['\u{FE81}', '\u{FE82}'],                         // ALEF WITH MADDA ABOVE
        '\u{0623}' => &['\u{FE83}', '\u{FE84}'],                         // ALEF WITH HAMZA ABOVE
        '\u{0624}' => &['\u{FE85}', '\u{FE86}'],                         // WAW WITH HAMZA ABOVE
        '\u{0625}' => &['\u{FE87}', '\u{FE88}'],                         // ALEF WITH HAMZA BELOW
        '\u{0626}' => &['\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'], // YEH WITH HAMZA ABOVE
        '\u{0627}' => &['\u{FE8D}', '\u{FE8E}'],                         // ALEF
        '\u{0628}' => &['\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'], // BEH
        '\u{0629}' => &['\u{FE93}', '\u{FE94}'],                         // TEH MARBUTA
        '\u{062A}' => &['\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'], // TEH
        '\u{062B}' => &['\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'], // THEH
        '\u{062C}' => &['\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'], // JEEM
        '\u{062D}' => &['\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'], // HAH
        '\u{062E}' => &['\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'], // KHAH
        '\u{062F}' => &['\u{FEA9}', '\u{FEAA}'],                         // DAL
        '\u{0630}' => &['\u{FEAB}', '\u{FEAC}'],                         // THAL
        '\u{0631}' => &['\u{FEAD}', '\u{FEAE}'],                         // REH
        '\u{0632}' => &['\u{FEAF}', '\u{FEB0}'],                         // ZAIN
        '\u{0633}' => &['\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'], // SEEN
        '\u{0634}' => &['\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'], // SHEEN
        '\u{0635}' => &['\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'], // SAD
        '\u{0636}' => &['\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'], // DAD
        '\u{0637}' => &['\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'], // TAH
        '\u{0638}' => &['\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'], // ZAH
        '\u{0639}' => &['\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'], // AIN
        '\u{063A}' => &['\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'], // GHAIN
        '\u{0641}' => &['\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'], // FEH
        '\u{0642}' => &['\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'], // QAF
        '\u{0643}' => &['\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'], // KAF
        '\u{0644}' => &['\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'], // LAM
        '\u{0645}' => &['\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'], // MEEM
        '\u{0646}' => &['\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'], // NOON
        '\u{0647}' => &['\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'], // HEH
        '\u{0648}' => &['\u{FEED}', '\u{FEEE}'],                         // WAW
        '\u{0649}' => &['\u{FEEF}', '\u{FEF0}'],                         // ALEF MAKSURA
        '\u{064A}' => &['\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'], // YEH
        _ => return None,
    };
    Some(forms)
}

/// Merged LAM-ALEF glyph for an already emitted LAM form followed by an ALEF
/// variant.
///
/// A LAM that did not join its predecessor (isolated or initial form) yields
/// the isolated ligature; a joined LAM (final or medial form) yields the
/// final ligature.
pub fn lam_alef_ligature(lam_form: char, alef: char) -> Option<char> {
    let joined = match lam_form {
        '\u{FEDD}' | '\u{FEDF}' => false,
        '\u{FEDE}' | '\u{FEE0}' => true,
        _ => return None,
    };

    let (isolated, final_form) = match alef {
        '\u{0622}' => ('\u{FEF5}', '\u{FEF6}'), // LAM WITH ALEF WITH MADDA ABOVE
        '\u{0623}' => ('\u{FEF7}', '\u{FEF8}'), // LAM WITH ALEF WITH HAMZA ABOVE
        '\u{0625}' => ('\u{FEF9}', '\u{FEFA}'), // LAM WITH ALEF WITH HAMZA BELOW
        '\u{0627}' => ('\u{FEFB}', '\u{FEFC}'), // LAM WITH ALEF
        _ => return None,
    };

    Some(if joined { final_form } else { isolated })
}

/// Get the joining type of a character from its table entry.
pub fn joining_type(c: char) -> JoiningType {
    match presentation_forms(c).map(<[char]>::len) {
        Some(n) if n >= 3 => JoiningType::Dual,
        Some(2) => JoiningType::Right,
        _ => JoiningType::NonJoining,
    }
}

/// Check if a character is an ALEF variant that ligates with LAM.
#[inline]
pub fn is_alef_variant(c: char) -> bool {
    ALEF_VARIANTS.contains(&c)
}

/// Check if a character is in the Arabic block (U+0600–U+06FF).
#[inline]
pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Check if any character of `text` is in the Arabic block.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic)
}

/// Check if a string is made only of digits, separators, signs and currency
/// symbols, i.e. a value whose reading order must survive RTL reversal.
///
/// Empty and whitespace-only strings are not numeric.
pub fn is_numeric_like(text: &str) -> bool {
    let mut saw_digit = false;
    for c in text.chars() {
        match get_general_category(c) {
            GeneralCategory::DecimalNumber => saw_digit = true,
            GeneralCategory::OtherPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::SpaceSeparator => {}
            _ => return false,
        }
    }
    saw_digit
}
