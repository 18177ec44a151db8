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

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result};

use cfg_if::cfg_if;

use minill::runner;
use minill::script;
use minill::IrBuilder;

fn show_ir(builder: &IrBuilder) {
    let ir = builder.build();
    print!("{}", ir);
    cfg_if! {
        if #[cfg(feature = "verify")] {
            match llvm::verify::verify_ir(&ir) {
                Ok(()) => println!("; verified"),
                Err(e) => e.display(),
            }
        }
    }
}

fn main() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut builder = IrBuilder::new();
    println!("One operation per line. :ir shows the module, :stack the operand stack, :reset starts over, :quit exits.");

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    ":quit" | ":q" => break,
                    ":ir" => show_ir(&builder),
                    ":stack" => {
                        for (depth, op) in builder.stack().iter().rev().enumerate() {
                            println!("{:>3}: {} ({})", depth, op, op.kind());
                        }
                    }
                    ":reset" => builder = IrBuilder::new(),
                    _ => match script::parse(line) {
                        Ok(statements) => {
                            if let Err(e) = runner::replay(&statements, &mut builder) {
                                e.display();
                            }
                        }
                        Err(e) => e.display(),
                    },
                }
            }

            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }

            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }

            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
