// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Pre-reversal of numbers embedded in Arabic text.

use std::fmt::Display;

/// Characters removed before reversal.
const STRIPPED: [char; 4] = ['[', ']', '(', ')'];

/// Reverse a number so it reads left to right after the surrounding Arabic
/// text has been reversed into visual order.
///
/// Brackets and parentheses are dropped; a reversed pair would come out
/// facing the wrong way.
///
/// ```
/// use qadaya_text::shaping::isolate_numeric;
///
/// assert_eq!(isolate_numeric("1,234"), "432,1");
/// assert_eq!(isolate_numeric(1234), "4321");
/// assert_eq!(isolate_numeric("(100)"), "001");
/// ```
pub fn isolate_numeric<T: Display>(value: T) -> String {
    value
        .to_string()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .rev()
        .collect()
}
