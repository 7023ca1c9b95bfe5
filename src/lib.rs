// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Qadaya Text: Arabic shaping and RTL preparation of strings for PDF case
//! documents and invoices.

pub mod cli;
pub mod format;
pub mod render;
pub mod settings;
pub mod shaping;

pub use settings::Settings;
pub use shaping::{
    ArabicShaper, contains_arabic, isolate_numeric, process_arabic_text, process_table_header,
    shape_arabic, shape_for_table_header,
};

use tracing_subscriber::EnvFilter;

/// Entry point for the `qadaya-text` binary
pub fn run() -> anyhow::Result<()> {
    // Controlled via RUST_LOG; logs go to stderr so stdout carries only output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("qadaya_text=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = cli::Invocation::parse(&args)?;
    tracing::debug!("Running {:?}", invocation.command);

    let settings = invocation.settings()?;
    let output = cli::execute(&settings, &invocation.command)?;
    println!("{}", output);
    Ok(())
}
