// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Test-line expansion engine.
//!
//! For each row: expand arg1, apply per-mnemonic overrides, then cross with
//! the arg2 expansion (arg1 outer, arg2 inner). A row with no first operand
//! emits the bare mnemonic. Identical input tables always produce
//! byte-identical line sequences.

use crate::core::argspec::expand_spec;
use crate::core::error::GenError;
use crate::z80::blacklist::is_blacklisted;
use crate::z80::overrides::apply_overrides;

use super::table::InstructionRow;

/// Counts for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenReport {
    pub rows: usize,
    pub emitted: usize,
    pub suppressed: usize,
}

/// Render the full ordered test-line expansion for one row, before
/// blacklist filtering.
pub fn row_lines(row: &InstructionRow) -> Vec<String> {
    let arg1_renderings = apply_overrides(&row.mnemonic, &row.arg1, expand_spec(&row.arg1));
    if arg1_renderings.is_empty() {
        return vec![row.mnemonic.clone()];
    }
    let arg2_renderings = expand_spec(&row.arg2);
    let mut lines = Vec::with_capacity(arg1_renderings.len() * arg2_renderings.len().max(1));
    for arg1 in &arg1_renderings {
        if arg2_renderings.is_empty() {
            lines.push(format!("{} {arg1}", row.mnemonic));
        } else {
            for arg2 in &arg2_renderings {
                lines.push(format!("{} {arg1}, {arg2}", row.mnemonic));
            }
        }
    }
    lines
}

/// Lazy iterator over the unfiltered test lines for a sequence of rows.
pub struct TestLines<'a> {
    rows: std::slice::Iter<'a, InstructionRow>,
    pending: std::vec::IntoIter<String>,
}

impl<'a> TestLines<'a> {
    pub fn new(rows: &'a [InstructionRow]) -> Self {
        Self {
            rows: rows.iter(),
            pending: Vec::new().into_iter(),
        }
    }
}

impl Iterator for TestLines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(line) = self.pending.next() {
                return Some(line);
            }
            let row = self.rows.next()?;
            self.pending = row_lines(row).into_iter();
        }
    }
}

/// Run the expansion over all rows, dropping blacklisted lines and passing
/// the rest to `emit` in order.
pub fn generate(
    rows: &[InstructionRow],
    mut emit: impl FnMut(&str) -> Result<(), GenError>,
) -> Result<GenReport, GenError> {
    let mut report = GenReport {
        rows: rows.len(),
        emitted: 0,
        suppressed: 0,
    };
    for line in TestLines::new(rows) {
        if is_blacklisted(&line) {
            report.suppressed += 1;
            continue;
        }
        emit(&line)?;
        report.emitted += 1;
    }
    Ok(report)
}
