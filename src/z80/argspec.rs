// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Z80 argument-code tables and resolution.
//!
//! Argument codes are compact per-operand symbols from the instruction
//! table: a printable byte is a single code, an immediate-width code, or an
//! indexed code; a small non-printable byte is a group code that expands to
//! an ordered set of single codes.

use crate::core::argspec::ArgKind;
use crate::core::error::{GenError, GenErrorKind};

/// One single-code entry mapping an argument code to its rendered text.
pub struct ArgSpecEntry {
    pub code: u8,
    pub text: &'static str,
}

/// Single register, flag, and condition codes.
pub static ARG_SPEC_TABLE: &[ArgSpecEntry] = &[
    ArgSpecEntry { code: b'A', text: "A" },
    ArgSpecEntry { code: b'B', text: "B" },
    ArgSpecEntry { code: b'C', text: "C" },
    ArgSpecEntry { code: b'k', text: "(C)" },
    ArgSpecEntry { code: b'D', text: "D" },
    ArgSpecEntry { code: b'E', text: "E" },
    ArgSpecEntry { code: b'H', text: "H" },
    ArgSpecEntry { code: b'L', text: "L" },
    ArgSpecEntry { code: b'I', text: "I" },
    ArgSpecEntry { code: b'R', text: "R" },
    ArgSpecEntry { code: b'h', text: "HL" },
    ArgSpecEntry { code: b'l', text: "(HL)" },
    ArgSpecEntry { code: b'd', text: "DE" },
    ArgSpecEntry { code: b'e', text: "(DE)" },
    ArgSpecEntry { code: b'b', text: "BC" },
    ArgSpecEntry { code: b'c', text: "(BC)" },
    ArgSpecEntry { code: b'a', text: "AF" },
    ArgSpecEntry { code: b'f', text: "AF'" },
    ArgSpecEntry { code: b'X', text: "IX" },
    ArgSpecEntry { code: b'x', text: "(IX)" },
    ArgSpecEntry { code: b'Y', text: "IY" },
    ArgSpecEntry { code: b'y', text: "(IY)" },
    ArgSpecEntry { code: b's', text: "SP" },
    ArgSpecEntry { code: b'p', text: "(SP)" },
    ArgSpecEntry { code: b'Z', text: "Z" },
    ArgSpecEntry { code: b'z', text: "NZ" },
    ArgSpecEntry { code: b'=', text: "NC" },
    ArgSpecEntry { code: b'+', text: "P" },
    ArgSpecEntry { code: b'-', text: "M" },
    ArgSpecEntry { code: b'1', text: "PO" },
    ArgSpecEntry { code: b'2', text: "PE" },
];

/// One group entry mapping a group code to its ordered member codes.
pub struct ArgGroupEntry {
    pub code: u8,
    pub members: &'static [u8],
}

/// Group codes. Member order is the expansion order.
pub static ARG_GROUP_TABLE: &[ArgGroupEntry] = &[
    ArgGroupEntry { code: 0x01, members: b"bdha" },
    ArgGroupEntry { code: 0x02, members: b"ZzC=" },
    ArgGroupEntry { code: 0x03, members: b"bdhs" },
    ArgGroupEntry { code: 0x04, members: b"bdXs" },
    ArgGroupEntry { code: 0x05, members: b"bdYs" },
    ArgGroupEntry { code: 0x0a, members: b"ZzC=+-12" },
    ArgGroupEntry { code: 0x0b, members: b"BCDEHLA" },
];

fn lookup_single(code: u8) -> Option<&'static str> {
    ARG_SPEC_TABLE
        .iter()
        .find(|entry| entry.code == code)
        .map(|entry| entry.text)
}

/// Resolve a raw argument code into its tagged kind.
///
/// Immediate and indexed codes take precedence over the single-code table,
/// then single codes, then group codes. A code registered nowhere is a
/// lookup failure.
pub fn resolve_spec(code: u8) -> Result<ArgKind, GenError> {
    match code {
        0 => Ok(ArgKind::None),
        b'n' => Ok(ArgKind::Immediate {
            bits: 8,
            deref: false,
        }),
        b'm' => Ok(ArgKind::Immediate {
            bits: 8,
            deref: true,
        }),
        b'N' => Ok(ArgKind::Immediate {
            bits: 16,
            deref: false,
        }),
        b'M' => Ok(ArgKind::Immediate {
            bits: 16,
            deref: true,
        }),
        b'x' => Ok(ArgKind::Indexed { register: "IX" }),
        b'y' => Ok(ArgKind::Indexed { register: "IY" }),
        _ => {
            if let Some(text) = lookup_single(code) {
                return Ok(ArgKind::Direct(text));
            }
            let group = ARG_GROUP_TABLE
                .iter()
                .find(|entry| entry.code == code)
                .ok_or_else(|| {
                    GenError::new(
                        GenErrorKind::ArgSpec,
                        "Unknown argument code",
                        Some(&format_code(code)),
                    )
                })?;
            let mut members = Vec::with_capacity(group.members.len());
            for &member in group.members {
                let text = lookup_single(member).ok_or_else(|| {
                    GenError::new(
                        GenErrorKind::ArgSpec,
                        "Unknown group member code",
                        Some(&format_code(member)),
                    )
                })?;
                members.push(text);
            }
            Ok(ArgKind::Group(members))
        }
    }
}

fn format_code(code: u8) -> String {
    if code.is_ascii_graphic() {
        format!("'{}' (0x{code:02x})", code as char)
    } else {
        format!("0x{code:02x}")
    }
}
