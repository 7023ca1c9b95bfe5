// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Placement of prepared text on a document surface.
//!
//! The PDF writer itself lives outside this crate. It is reached through
//! [`TextSurface`], which only needs to put an already shaped string at a
//! coordinate.

use serde::Serialize;

use crate::shaping::{ArabicShaper, TableHeaderSpacer, process_arabic_text_with};

/// A drawing surface that places strings left to right at a position.
///
/// Implementations must not reorder or reshape the text they receive.
pub trait TextSurface {
    /// Draw `text` with its left edge at `x` and baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64);
}

/// One `draw_text` call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextPlacement {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Surface that records placements instead of drawing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    placements: Vec<TextPlacement>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placements(&self) -> &[TextPlacement] {
        &self.placements
    }

    pub fn into_placements(self) -> Vec<TextPlacement> {
        self.placements
    }
}

impl TextSurface for RecordingSurface {
    fn draw_text(&mut self, text: &str, x: f64, y: f64) {
        self.placements.push(TextPlacement {
            text: text.to_string(),
            x,
            y,
        });
    }
}

/// Shape `text` if it contains Arabic and place it.
pub fn draw_text(surface: &mut dyn TextSurface, shaper: &ArabicShaper, text: &str, x: f64, y: f64) {
    let prepared = process_arabic_text_with(shaper, text);
    surface.draw_text(&prepared, x, y);
}

/// Place a row of table headers, first header in the rightmost column.
///
/// Returns the number of cells drawn.
///
/// `right_edge` is the right edge of the table; each column is
/// `column_width` wide and its header is drawn at the column's left edge.
/// Empty headers leave their column blank.
pub fn draw_table_header(
    surface: &mut dyn TextSurface,
    spacer: &TableHeaderSpacer,
    headers: &[&str],
    right_edge: f64,
    y: f64,
    column_width: f64,
) -> usize {
    let mut drawn = 0;
    for (i, header) in headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }
        let x = right_edge - column_width * (i as f64 + 1.0);
        surface.draw_text(&spacer.apply(header), x, y);
        drawn += 1;
    }
    tracing::debug!("Placed {} of {} table header cells", drawn, headers.len());
    drawn
}
