// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction table sources.
//!
//! Rows come either from the embedded primary table or from a labeled `.db`
//! block scanned out of an external assembly source file. Both sources
//! resolve argument codes at load time, so the generator only ever sees
//! tagged argument kinds.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::core::argspec::ArgKind;
use crate::core::error::{GenError, GenErrorKind};
use crate::core::literal::eval_literal;
use crate::z80::argspec::resolve_spec;
use crate::z80::instructions::INSTRUCTION_TABLE;

/// Directive prefix that marks a data row inside a scanned table block.
const DATA_DIRECTIVE: &str = ".db";
/// Length of the name-tag prefix on scanned mnemonic fields (`I_`).
const NAME_TAG_LEN: usize = 2;
const ROW_FIELD_COUNT: usize = 5;

/// One instruction row with its argument codes resolved.
///
/// The flags and opcode fields are carried from the source table but not
/// consumed when rendering test lines.
#[derive(Debug, Clone)]
pub struct InstructionRow {
    pub mnemonic: String,
    pub arg1: ArgKind,
    pub arg2: ArgKind,
    pub flags: u8,
    pub opcode: u8,
}

/// A provider of instruction rows.
pub trait TableSource {
    /// Short description of the source for reports.
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<InstructionRow>, GenError>;
}

/// The embedded primary Z80 instruction table.
pub struct StaticTable;

impl TableSource for StaticTable {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn load(&self) -> Result<Vec<InstructionRow>, GenError> {
        let mut rows = Vec::with_capacity(INSTRUCTION_TABLE.len());
        for entry in INSTRUCTION_TABLE {
            rows.push(InstructionRow {
                mnemonic: entry.mnemonic.to_string(),
                arg1: resolve_spec(entry.arg1)?,
                arg2: resolve_spec(entry.arg2)?,
                flags: entry.flags,
                opcode: entry.opcode,
            });
        }
        Ok(rows)
    }
}

/// A table scanned from a labeled `.db` block in an assembly source file.
pub struct ScannedTable {
    path: PathBuf,
    label: String,
}

impl ScannedTable {
    pub fn new(path: PathBuf, label: impl Into<String>) -> Self {
        Self {
            path,
            label: label.into(),
        }
    }
}

impl TableSource for ScannedTable {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<InstructionRow>, GenError> {
        let file = File::open(&self.path).map_err(|err| {
            GenError::new(
                GenErrorKind::Io,
                &format!("Error opening table source: {err}"),
                Some(&self.path.display().to_string()),
            )
        })?;
        scan_rows(BufReader::new(file), &self.label)
    }
}

/// Strip the trailing comment and surrounding whitespace from a source line.
fn cleanup_line(line: &str) -> &str {
    let line = match line.find(';') {
        Some(idx) => &line[..idx],
        None => line,
    };
    line.trim()
}

/// Collect the `.db` rows following `"<label>:"` from a table source.
///
/// Blank lines inside the block are skipped; the first non-blank line that
/// is not a data directive terminates collection.
pub fn scan_rows<R: BufRead>(reader: R, label: &str) -> Result<Vec<InstructionRow>, GenError> {
    let looking_for = format!("{label}:");
    let mut lines = reader.lines();
    loop {
        let Some(line) = lines.next() else {
            return Err(GenError::new(
                GenErrorKind::Table,
                "Table label not found",
                Some(label),
            ));
        };
        if cleanup_line(&line?) == looking_for {
            break;
        }
    }

    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        let line = cleanup_line(&line);
        if line.is_empty() {
            continue;
        }
        let Some(rest) = line.strip_prefix(DATA_DIRECTIVE) else {
            break;
        };
        // A longer directive sharing the prefix (".dbx") is not a data row.
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            break;
        }
        rows.push(parse_row(rest.trim())?);
    }
    Ok(rows)
}

fn parse_row(fields_text: &str) -> Result<InstructionRow, GenError> {
    let fields: Vec<&str> = fields_text.split(',').map(str::trim).collect();
    if fields.len() < ROW_FIELD_COUNT {
        return Err(GenError::new(
            GenErrorKind::Table,
            "Malformed table row, expected 5 fields",
            Some(fields_text),
        ));
    }
    let mnemonic = fields[0].get(NAME_TAG_LEN..).ok_or_else(|| {
        GenError::new(
            GenErrorKind::Table,
            "Mnemonic field shorter than its name tag",
            Some(fields[0]),
        )
    })?;
    let arg1 = resolve_spec(code_literal(fields[1])?)?;
    let arg2 = resolve_spec(code_literal(fields[2])?)?;
    let flags = code_literal(fields[3])?;
    let opcode = code_literal(fields[4])?;
    if arg1.is_none() && !arg2.is_none() {
        return Err(GenError::new(
            GenErrorKind::Table,
            "Row has a second operand without a first",
            Some(fields_text),
        ));
    }
    Ok(InstructionRow {
        mnemonic: mnemonic.to_string(),
        arg1,
        arg2,
        flags,
        opcode,
    })
}

fn code_literal(field: &str) -> Result<u8, GenError> {
    let value = eval_literal(field)?;
    u8::try_from(value).map_err(|_| {
        GenError::new(
            GenErrorKind::Literal,
            "Field value out of byte range",
            Some(field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
; encoding tables for the assembler
org:
\t.db 0x00
instrTBl:
\t.db I_AND, 'l', 0, 0, 0xa6\t; AND (HL)
\t.db I_AND, 0x0b, 0, 0, 0b10100000

\t.db I_NOP, 0, 0, 0, 0x00
instrTBlCB:
\t.db I_BIT, 'n', 'l', 0, 0x46
";

    fn scan(text: &str, label: &str) -> Result<Vec<InstructionRow>, GenError> {
        scan_rows(Cursor::new(text), label)
    }

    #[test]
    fn collects_rows_until_the_first_non_data_line() {
        let rows = scan(SAMPLE, "instrTBl").unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].mnemonic, "AND");
        assert_eq!(rows[0].arg1, ArgKind::Direct("(HL)"));
        assert_eq!(rows[0].opcode, 0xa6);
        assert_eq!(
            rows[1].arg1,
            ArgKind::Group(vec!["B", "C", "D", "E", "H", "L", "A"])
        );
        assert_eq!(rows[2].mnemonic, "NOP");
        assert!(rows[2].arg1.is_none());
    }

    #[test]
    fn blank_lines_do_not_terminate_the_block() {
        let rows = scan(SAMPLE, "instrTBl").unwrap();
        assert_eq!(rows[2].mnemonic, "NOP");
    }

    #[test]
    fn other_labels_scan_their_own_block() {
        let rows = scan(SAMPLE, "instrTBlCB").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mnemonic, "BIT");
    }

    #[test]
    fn missing_label_is_a_table_error() {
        let err = scan(SAMPLE, "instrTBlED").unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Table);
        assert!(err.message().contains("instrTBlED"));
    }

    #[test]
    fn comments_are_stripped_from_the_first_semicolon() {
        let text = "instrTBl:\n\t.db I_LD, 'l', 'n', 0, 0x36 ; store ; immediate\n";
        let rows = scan(text, "instrTBl").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].mnemonic, "LD");
    }

    #[test]
    fn short_rows_are_malformed() {
        let text = "instrTBl:\n\t.db I_NOP, 0, 0\n";
        let err = scan(text, "instrTBl").unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Table);
    }

    #[test]
    fn non_literal_fields_are_rejected() {
        let text = "instrTBl:\n\t.db I_AND, 1+1, 0, 0, 0xa6\n";
        let err = scan(text, "instrTBl").unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Literal);
    }

    #[test]
    fn second_operand_without_a_first_is_rejected() {
        let text = "instrTBl:\n\t.db I_XX, 0, 'A', 0, 0\n";
        let err = scan(text, "instrTBl").unwrap_err();
        assert_eq!(err.kind(), GenErrorKind::Table);
    }

    #[test]
    fn static_table_resolves_every_row() {
        let rows = StaticTable.load().unwrap();
        assert_eq!(rows.len(), INSTRUCTION_TABLE.len());
        assert_eq!(rows[0].mnemonic, "ADC");
    }
}
