// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface parsing and argument validation.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::core::error::{GenError, GenErrorKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_TABLE_LABEL: &str = "instrTBl";

const LONG_ABOUT: &str =
    "Generates exhaustive operand-form test lines for Z80 assembler conformance testing.

With no INPUT, lines come from the embedded primary instruction table.
With an INPUT file, the table is scanned from the labeled .db block in that
file (label instrTBl unless --table-label overrides it).
Each output line is one test case: MNEMONIC, MNEMONIC OPERAND, or
MNEMONIC OPERAND1, OPERAND2.";

#[derive(Parser, Debug)]
#[command(
    name = "opCover",
    version = VERSION,
    about = "Exhaustive instruction test-line generator for Z80 assemblers",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        long_help = "Select output format. text emits one test line per output line; json emits a single document with the lines and run counts."
    )]
    pub format: OutputFormat,
    #[arg(
        short = 'q',
        long = "quiet",
        action = ArgAction::SetTrue,
        long_help = "Suppress the run summary for successful generation runs. Errors are still reported unless --no-error is set."
    )]
    pub quiet: bool,
    #[arg(
        short = 'E',
        long = "error",
        value_name = "FILE",
        long_help = "Write diagnostics to FILE instead of stderr."
    )]
    pub error_file: Option<PathBuf>,
    #[arg(
        long = "error-append",
        action = ArgAction::SetTrue,
        requires = "error_file",
        long_help = "Append diagnostics to --error FILE instead of truncating it."
    )]
    pub error_append: bool,
    #[arg(
        long = "no-error",
        action = ArgAction::SetTrue,
        conflicts_with_all = ["error_file", "error_append"],
        long_help = "Disable all diagnostic output routing."
    )]
    pub no_error: bool,
    #[arg(
        long = "print-argspecs",
        action = ArgAction::SetTrue,
        long_help = "Print the argument-code and group tables and exit."
    )]
    pub print_argspecs: bool,
    #[arg(
        long = "table-label",
        value_name = "NAME",
        default_value = DEFAULT_TABLE_LABEL,
        long_help = "Label of the instruction table block to scan from INPUT. Only meaningful with an INPUT file."
    )]
    pub table_label: String,
    #[arg(
        short = 'o',
        long = "outfile",
        value_name = "FILE",
        long_help = "Write generated lines to FILE instead of stdout."
    )]
    pub outfile: Option<PathBuf>,
    #[arg(
        value_name = "INPUT",
        long_help = "Optional assembly source file containing the instruction table. When omitted, the embedded primary table is used."
    )]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub enum DiagnosticsSinkConfig {
    Stderr,
    File { path: PathBuf, append: bool },
    Disabled,
}

/// Validated run configuration derived from the raw CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub input: Option<PathBuf>,
    pub table_label: String,
    pub outfile: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub diagnostics_sink: DiagnosticsSinkConfig,
}

pub fn validate_cli(cli: &Cli) -> Result<CliConfig, GenError> {
    if !is_label_identifier(&cli.table_label) {
        return Err(GenError::new(
            GenErrorKind::Cli,
            "Invalid table label, expected an assembler identifier",
            Some(&cli.table_label),
        ));
    }
    if let Some(input) = &cli.input {
        if !input.is_file() {
            return Err(GenError::new(
                GenErrorKind::Cli,
                "Input file not found",
                Some(&input.display().to_string()),
            ));
        }
    }
    let diagnostics_sink = if cli.no_error {
        DiagnosticsSinkConfig::Disabled
    } else if let Some(path) = &cli.error_file {
        DiagnosticsSinkConfig::File {
            path: path.clone(),
            append: cli.error_append,
        }
    } else {
        DiagnosticsSinkConfig::Stderr
    };
    Ok(CliConfig {
        input: cli.input.clone(),
        table_label: cli.table_label.clone(),
        outfile: cli.outfile.clone(),
        output_format: cli.format,
        quiet: cli.quiet,
        diagnostics_sink,
    })
}

fn is_label_identifier(label: &str) -> bool {
    let mut chars = label.chars();
    matches!(chars.next(), Some(ch) if ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
