// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for opCover.

use std::fs::OpenOptions;
use std::io::{self, Write};

use clap::Parser;

use opcover::generator::cli::{validate_cli, Cli, DiagnosticsSinkConfig, OutputFormat};
use opcover::generator::GenReport;

struct DiagnosticsSink {
    writer: Option<Box<dyn Write>>,
}

impl DiagnosticsSink {
    fn from_config(config: &DiagnosticsSinkConfig) -> io::Result<Self> {
        match config {
            DiagnosticsSinkConfig::Disabled => Ok(Self { writer: None }),
            DiagnosticsSinkConfig::Stderr => Ok(Self {
                writer: Some(Box::new(io::stderr())),
            }),
            DiagnosticsSinkConfig::File { path, append } => {
                let mut opts = OpenOptions::new();
                opts.create(true).write(true);
                if *append {
                    opts.append(true);
                } else {
                    opts.truncate(true);
                }
                let file = opts.open(path)?;
                Ok(Self {
                    writer: Some(Box::new(file)),
                })
            }
        }
    }

    fn emit_line(&mut self, line: &str) {
        if let Some(writer) = &mut self.writer {
            let _ = writeln!(writer, "{line}");
        }
    }
}

fn format_summary(report: &GenReport) -> String {
    format!(
        "{} rows, {} lines emitted, {} suppressed",
        report.rows, report.emitted, report.suppressed
    )
}

fn main() {
    let cli = Cli::parse();
    if cli.print_argspecs {
        if cli.format == OutputFormat::Json {
            println!("{}", opcover::generator::argspec_report_json());
        } else {
            println!("{}", opcover::generator::argspec_report());
        }
        return;
    }
    let config = match validate_cli(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut sink = match DiagnosticsSink::from_config(&config.diagnostics_sink) {
        Ok(sink) => sink,
        Err(err) => {
            eprintln!("Failed to open diagnostics sink: {err}");
            std::process::exit(1);
        }
    };

    match opcover::generator::run_with_config(&config) {
        Ok(report) => {
            if !config.quiet {
                sink.emit_line(&format_summary(&report));
            }
        }
        Err(err) => {
            sink.emit_line(&err.to_string());
            std::process::exit(1);
        }
    }
}
