// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Known-unrepresentable test lines.
//!
//! These exact renderings collide with no-operand mnemonic variants in the
//! encoding model and are dropped from the generated stream.

pub static BLACKLIST: &[&str] = &["AND (IX)", "AND (IY)"];

pub fn is_blacklisted(line: &str) -> bool {
    BLACKLIST.contains(&line)
}
