// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Per-mnemonic expansion overrides.
//!
//! A few instructions cannot take the full expansion of their first
//! argument code. Each special case is one named table entry so new
//! overrides stay additive and independently testable. The first matching
//! entry wins; the current entries match disjoint mnemonic sets.

use crate::core::argspec::ArgKind;

/// One override: a predicate on (mnemonic, arg1 kind) and a transform
/// applied to the arg1 renderings before the cartesian product.
pub struct MnemonicOverride {
    pub name: &'static str,
    pub applies: fn(mnemonic: &str, arg1: &ArgKind) -> bool,
    pub apply: fn(renderings: Vec<String>) -> Vec<String>,
}

pub static OVERRIDE_TABLE: &[MnemonicOverride] = &[
    MnemonicOverride {
        name: "jp-indirect",
        applies: jp_indirect_applies,
        apply: keep_bare_form,
    },
    MnemonicOverride {
        name: "bit-index",
        applies: bit_index_applies,
        apply: keep_representative_bits,
    },
    MnemonicOverride {
        name: "interrupt-mode",
        applies: interrupt_mode_applies,
        apply: interrupt_modes,
    },
];

/// Apply the first matching override to an arg1 expansion.
pub fn apply_overrides(mnemonic: &str, arg1: &ArgKind, renderings: Vec<String>) -> Vec<String> {
    for entry in OVERRIDE_TABLE {
        if (entry.applies)(mnemonic, arg1) {
            return (entry.apply)(renderings);
        }
    }
    renderings
}

// JP through an index register has no displacement form.
fn jp_indirect_applies(mnemonic: &str, arg1: &ArgKind) -> bool {
    mnemonic == "JP" && arg1.is_indexed()
}

fn keep_bare_form(mut renderings: Vec<String>) -> Vec<String> {
    renderings.truncate(1);
    renderings
}

const BIT_INDEX_MNEMONICS: &[&str] = &["BIT", "SET", "RES"];

// Bit instructions keep three representative bit indices to bound test
// volume.
fn bit_index_applies(mnemonic: &str, _arg1: &ArgKind) -> bool {
    BIT_INDEX_MNEMONICS.contains(&mnemonic)
}

fn keep_representative_bits(mut renderings: Vec<String>) -> Vec<String> {
    renderings.truncate(3);
    renderings
}

// IM only accepts the three interrupt mode numbers, whatever its table row
// says.
fn interrupt_mode_applies(mnemonic: &str, _arg1: &ArgKind) -> bool {
    mnemonic == "IM"
}

fn interrupt_modes(_renderings: Vec<String>) -> Vec<String> {
    vec!["0".to_string(), "1".to_string(), "2".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn jp_indexed_keeps_only_the_bare_indirect_form() {
        let expanded = renderings(&["(IX)", "(IX+1)", "(IX+10)", "(IX+100)", "(IX+127)"]);
        let kind = ArgKind::Indexed { register: "IX" };
        assert_eq!(apply_overrides("JP", &kind, expanded), renderings(&["(IX)"]));
    }

    #[test]
    fn jp_non_indexed_is_untouched() {
        let expanded = renderings(&["(HL)"]);
        let kind = ArgKind::Direct("(HL)");
        assert_eq!(
            apply_overrides("JP", &kind, expanded.clone()),
            expanded
        );
    }

    #[test]
    fn bit_instructions_keep_three_bit_indices() {
        let kind = ArgKind::Immediate {
            bits: 8,
            deref: false,
        };
        for mnemonic in ["BIT", "SET", "RES"] {
            let expanded = renderings(&["1", "2", "4", "8", "16", "32", "64", "128"]);
            assert_eq!(
                apply_overrides(mnemonic, &kind, expanded),
                renderings(&["1", "2", "4"])
            );
        }
    }

    #[test]
    fn im_replaces_any_expansion_with_the_mode_numbers() {
        let kind = ArgKind::None;
        assert_eq!(
            apply_overrides("IM", &kind, Vec::new()),
            renderings(&["0", "1", "2"])
        );
        let kind = ArgKind::Immediate {
            bits: 8,
            deref: false,
        };
        assert_eq!(
            apply_overrides("IM", &kind, renderings(&["1", "2", "4"])),
            renderings(&["0", "1", "2"])
        );
    }

    #[test]
    fn unmatched_mnemonics_pass_through() {
        let expanded = renderings(&["B", "C"]);
        let kind = ArgKind::Group(vec!["B", "C"]);
        assert_eq!(apply_overrides("AND", &kind, expanded.clone()), expanded);
    }

    #[test]
    fn override_table_entries_are_named() {
        let names: Vec<&str> = OVERRIDE_TABLE.iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["jp-indirect", "bit-index", "interrupt-mode"]);
    }
}
