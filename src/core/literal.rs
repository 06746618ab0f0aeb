// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Restricted literal evaluation for scanned table fields.
//!
//! Table row fields come from an untrusted source file, so this is
//! deliberately not an expression evaluator. Only the literal forms that
//! appear in instruction tables are accepted: integers (decimal, `0x` hex,
//! `0b` binary), single-quoted one-character literals, and bare identifiers
//! (which evaluate to zero).

use crate::core::error::{GenError, GenErrorKind};

/// Evaluate one table field literal to its numeric value.
pub fn eval_literal(text: &str) -> Result<i64, GenError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(GenError::new(
            GenErrorKind::Literal,
            "Empty literal field",
            None,
        ));
    }
    if text.starts_with('\'') {
        return eval_char_literal(text);
    }
    let first = text.chars().next().unwrap_or('\0');
    if first.is_ascii_digit() {
        return parse_number(text).ok_or_else(|| {
            GenError::new(GenErrorKind::Literal, "Invalid integer literal", Some(text))
        });
    }
    if is_identifier(text) {
        // Bare identifiers (symbolic constants in the source table) carry
        // no argument code and evaluate to zero.
        return Ok(0);
    }
    Err(GenError::new(
        GenErrorKind::Literal,
        "Unsupported literal form",
        Some(text),
    ))
}

fn eval_char_literal(text: &str) -> Result<i64, GenError> {
    let inner = text
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| {
            GenError::new(
                GenErrorKind::Literal,
                "Unterminated character literal",
                Some(text),
            )
        })?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch as i64),
        _ => Err(GenError::new(
            GenErrorKind::Literal,
            "Character literal must contain exactly one character",
            Some(text),
        )),
    }
}

fn parse_number(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        i64::from_str_radix(bin, 2).ok()
    } else {
        text.parse().ok()
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(ch) if ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
