// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Argument-specification kinds and operand rendering.
//!
//! A raw argument code is resolved once, at table load, into an [`ArgKind`].
//! Rendering dispatches on the resolved kind only; the code byte is never
//! re-inspected per line.

/// Displacement offsets exercised for indexed operands.
///
/// Negative displacements are not modeled.
pub const INDEXED_DISPLACEMENTS: &[u16] = &[1, 10, 100, 127];

/// Resolved form of one argument code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    /// No operand in this position.
    None,
    /// A single register, flag, or condition rendering.
    Direct(&'static str),
    /// An ordered set of single renderings, one test case per member.
    Group(Vec<&'static str>),
    /// A numeric immediate, enumerated at power-of-two boundary values.
    Immediate { bits: u8, deref: bool },
    /// Index-register indirect addressing, with displacement coverage.
    Indexed { register: &'static str },
}

impl ArgKind {
    pub fn is_none(&self) -> bool {
        matches!(self, ArgKind::None)
    }

    pub fn is_indexed(&self) -> bool {
        matches!(self, ArgKind::Indexed { .. })
    }
}

/// Render the ordered operand strings for a resolved argument kind.
///
/// An empty vector means "no operand text".
pub fn expand_spec(kind: &ArgKind) -> Vec<String> {
    match kind {
        ArgKind::None => Vec::new(),
        ArgKind::Direct(text) => vec![(*text).to_string()],
        ArgKind::Group(members) => members.iter().map(|member| (*member).to_string()).collect(),
        ArgKind::Immediate { bits, deref } => (0..*bits)
            .map(|bit| {
                let value = 1u32 << bit;
                if *deref {
                    format!("({value})")
                } else {
                    value.to_string()
                }
            })
            .collect(),
        ArgKind::Indexed { register } => {
            let mut renderings = vec![format!("({register})")];
            for offset in INDEXED_DISPLACEMENTS {
                renderings.push(format!("({register}+{offset})"));
            }
            renderings
        }
    }
}
