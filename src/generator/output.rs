// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Output emission for generated lines and table reports.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use serde_json::json;

use crate::core::error::{GenError, GenErrorKind};
use crate::z80::argspec::{ARG_GROUP_TABLE, ARG_SPEC_TABLE};

use super::cli::{CliConfig, OutputFormat, VERSION};
use super::engine::GenReport;

/// Destination for generated test lines: stdout or an output file.
///
/// Text mode streams lines as they are generated; json mode buffers them
/// and writes a single document on `finish`.
pub struct LineSink {
    writer: Box<dyn Write>,
    format: OutputFormat,
    collected: Vec<String>,
}

impl LineSink {
    pub fn from_config(config: &CliConfig) -> Result<Self, GenError> {
        let writer: Box<dyn Write> = match &config.outfile {
            Some(path) => {
                let file = File::create(path).map_err(|err| {
                    GenError::new(
                        GenErrorKind::Io,
                        &format!("Error creating output file: {err}"),
                        Some(&path.display().to_string()),
                    )
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };
        Ok(Self {
            writer,
            format: config.output_format,
            collected: Vec::new(),
        })
    }

    pub fn emit(&mut self, line: &str) -> Result<(), GenError> {
        match self.format {
            OutputFormat::Text => writeln!(self.writer, "{line}").map_err(GenError::from),
            OutputFormat::Json => {
                self.collected.push(line.to_string());
                Ok(())
            }
        }
    }

    pub fn finish(&mut self, source: &str, report: &GenReport) -> Result<(), GenError> {
        if self.format == OutputFormat::Json {
            let payload = json!({
                "schema": "opcover-lines-v1",
                "version": VERSION,
                "source": source,
                "rows": report.rows,
                "emitted": report.emitted,
                "suppressed": report.suppressed,
                "lines": self.collected,
            });
            writeln!(self.writer, "{payload}")?;
        }
        self.writer.flush().map_err(GenError::from)
    }
}

pub fn argspec_report() -> String {
    let mut lines = vec![
        "opcover-argspecs-v1".to_string(),
        format!("version={VERSION}"),
        format!("cpu={}", crate::z80::CPU_NAME),
    ];
    for entry in ARG_SPEC_TABLE {
        lines.push(format!("code={};text={}", entry.code as char, entry.text));
    }
    for group in ARG_GROUP_TABLE {
        let members: String = group.members.iter().map(|&member| member as char).collect();
        lines.push(format!("group=0x{:02x};members={members}", group.code));
    }
    lines.join("\n")
}

pub fn argspec_report_json() -> String {
    let codes: Vec<serde_json::Value> = ARG_SPEC_TABLE
        .iter()
        .map(|entry| {
            json!({
                "code": (entry.code as char).to_string(),
                "text": entry.text,
            })
        })
        .collect();
    let groups: Vec<serde_json::Value> = ARG_GROUP_TABLE
        .iter()
        .map(|group| {
            json!({
                "code": format!("0x{:02x}", group.code),
                "members": group
                    .members
                    .iter()
                    .map(|&member| (member as char).to_string())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    json!({
        "schema": "opcover-argspecs-v1",
        "version": VERSION,
        "cpu": crate::z80::CPU_NAME,
        "codes": codes,
        "groups": groups,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argspec_report_has_stable_header_and_entries() {
        let report = argspec_report();
        let mut lines = report.lines();
        assert_eq!(lines.next(), Some("opcover-argspecs-v1"));
        assert_eq!(lines.next(), Some(format!("version={VERSION}").as_str()));
        assert_eq!(lines.next(), Some("cpu=z80"));
        assert!(report.contains("code=A;text=A"));
        assert!(report.contains("code=l;text=(HL)"));
        assert!(report.contains("group=0x0b;members=BCDEHLA"));
    }

    #[test]
    fn argspec_report_json_has_stable_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&argspec_report_json()).expect("valid json");
        assert_eq!(value["schema"], "opcover-argspecs-v1");
        assert_eq!(value["version"], VERSION);
        assert!(value["codes"].is_array());
        assert!(value["groups"].is_array());
        assert_eq!(value["codes"][0]["code"], "A");
    }
}
