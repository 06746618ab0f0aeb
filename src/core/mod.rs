// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! CPU-agnostic core: argument kinds, literal evaluation, and errors.

pub mod argspec;
pub mod error;
pub mod literal;
