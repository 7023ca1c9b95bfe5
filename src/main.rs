// Copyright 2025 the Qadaya Authors
// SPDX-License-Identifier: Apache-2.0

//! Qadaya Text command-line tool

fn main() -> anyhow::Result<()> {
    qadaya_text::run()
}
