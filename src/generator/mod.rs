// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Test-line generation - main entry point.
//!
//! Ties the CPU-agnostic expansion core to the Z80 instruction table
//! sources and the output sinks.

pub mod cli;
mod engine;
mod output;
mod table;

pub use cli::VERSION;
pub use engine::{generate, row_lines, GenReport, TestLines};
pub use output::{argspec_report, argspec_report_json};
pub use table::{scan_rows, InstructionRow, ScannedTable, StaticTable, TableSource};

use crate::core::error::GenError;
use cli::{Cli, CliConfig};
use output::LineSink;

/// Run the generator with parsed command-line arguments.
pub fn run_with_cli(cli: &Cli) -> Result<GenReport, GenError> {
    let config = cli::validate_cli(cli)?;
    run_with_config(&config)
}

/// Run the generator with a validated configuration.
pub fn run_with_config(config: &CliConfig) -> Result<GenReport, GenError> {
    let source: Box<dyn TableSource> = match &config.input {
        Some(path) => Box::new(ScannedTable::new(path.clone(), config.table_label.clone())),
        None => Box::new(StaticTable),
    };
    let rows = source.load()?;
    let mut sink = LineSink::from_config(config)?;
    let report = engine::generate(&rows, |line| sink.emit(line))?;
    sink.finish(&source.describe(), &report)?;
    Ok(report)
}
