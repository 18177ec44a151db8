// This file is part of the Wave language project.
// Copyright (c) 2024–2026 Wave Foundation
// Copyright (c) 2024–2026 LunaStev and contributors
//
// This Source Code Form is subject to the terms of the
// Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at https://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

use std::process;

use error::IrError;
use minill::cli;
use minill::errors::CliError;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(CliError::Failed(e)) => {
            match e.downcast_ref::<IrError>() {
                Some(ir) => {
                    eprintln!("{:#}", e);
                    ir.display();
                }
                None => eprintln!("Error: {:#}", e),
            }
            process::exit(1);
        }
        Err(e @ CliError::Io(_)) => {
            eprintln!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            cli::print_usage();
            process::exit(1);
        }
    }
}
