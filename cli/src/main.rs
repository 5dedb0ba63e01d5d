// SPDX-FileCopyrightText: 2026 festa contributors
//
// SPDX-License-Identifier: Apache-2.0

//! festa - a month-indexed festival agenda

use festa_cli::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
