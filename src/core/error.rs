// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types for the test-line generator.

use std::fmt;
use std::io;

/// Categories of generator errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenErrorKind {
    ArgSpec,
    Table,
    Literal,
    Io,
    Cli,
}

/// A generator error with a kind and message.
///
/// Every error is fatal to the run: the generator aborts, reports the
/// message, and emits no further lines.
#[derive(Debug, Clone)]
pub struct GenError {
    kind: GenErrorKind,
    message: String,
}

impl GenError {
    pub fn new(kind: GenErrorKind, msg: &str, param: Option<&str>) -> Self {
        Self {
            kind,
            message: format_error(msg, param),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> GenErrorKind {
        self.kind
    }
}

fn format_error(msg: &str, param: Option<&str>) -> String {
    match param {
        Some(param) => format!("{msg}: {param}"),
        None => msg.to_string(),
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GenError {}

impl From<io::Error> for GenError {
    fn from(err: io::Error) -> Self {
        Self::new(GenErrorKind::Io, &err.to_string(), None)
    }
}
