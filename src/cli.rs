// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

use crate::render::{RecordingSurface, draw_table_header};
use crate::settings::Settings;
use crate::shaping::{isolate_numeric, process_arabic_text_with};

/// Usage line printed on bad arguments
pub const USAGE: &str =
    "Usage: qadaya-text [--config FILE] <shape|header|numeric|explain|table> ARGS...";

/// Table layout used by the `table` command (A4 width in points, 1cm margins)
const TABLE_RIGHT_EDGE: f64 = 567.0;
const TABLE_HEADER_Y: f64 = 60.0;
const TABLE_COLUMN_WIDTH: f64 = 110.0;

/// A parsed subcommand.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Shape text if it contains Arabic
    Shape(String),
    /// Shape and pad a table header
    Header(String),
    /// Pre-reverse a number for embedding in Arabic text
    Numeric(String),
    /// Print per-glyph shaping decisions as JSON
    Explain(String),
    /// Lay out a row of table headers and print placements as JSON
    Table(Vec<String>),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub config: Option<PathBuf>,
    pub command: Command,
}

impl Invocation {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut config = None;
        let mut rest = args;

        if let Some(first) = rest.first() {
            if first == "--config" {
                let path = rest.get(1).context("--config needs a file path")?;
                config = Some(PathBuf::from(path));
                rest = &rest[2..];
            }
        }

        let Some((name, operands)) = rest.split_first() else {
            bail!("missing command\n{}", USAGE);
        };

        // Text operands are joined so unquoted multi-word input works
        let text = operands.join(" ");
        let command = match name.as_str() {
            "shape" => Command::Shape(text),
            "header" => Command::Header(text),
            "numeric" => Command::Numeric(text),
            "explain" => Command::Explain(text),
            "table" => Command::Table(operands.to_vec()),
            other => bail!("unknown command {:?}\n{}", other, USAGE),
        };

        Ok(Self { config, command })
    }

    /// Settings from `--config`, or defaults.
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings: {}", path.display())),
            None => Ok(Settings::default()),
        }
    }
}

/// Run a command and return what should be printed.
pub fn execute(settings: &Settings, command: &Command) -> Result<String> {
    let shaper = settings.shaper();

    let output = match command {
        Command::Shape(text) => process_arabic_text_with(&shaper, text),
        Command::Header(text) if text.is_empty() => String::new(),
        Command::Header(text) => settings.table_header_spacer().apply(text),
        Command::Numeric(value) => isolate_numeric(value),
        Command::Explain(text) => {
            let chars: Vec<char> = text.chars().collect();
            let glyphs = shaper.analyze(&chars);
            serde_json::to_string_pretty(&glyphs).context("Failed to serialize glyphs")?
        }
        Command::Table(headers) => {
            let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
            let mut surface = RecordingSurface::new();
            draw_table_header(
                &mut surface,
                &settings.table_header_spacer(),
                &headers,
                TABLE_RIGHT_EDGE,
                TABLE_HEADER_Y,
                TABLE_COLUMN_WIDTH,
            );
            serde_json::to_string_pretty(surface.placements())
                .context("Failed to serialize placements")?
        }
    };

    Ok(output)
}
