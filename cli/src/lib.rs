// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for the festa festival agenda.

mod cli;

pub use crate::cli::{Cli, Commands, run};
