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

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cfg_if::cfg_if;
use error::{IrError, IrResult};
use llvm::IrBuilder;
use utils::colorex::*;

use crate::compiler_config::CompilerConfig;
use crate::script::{self, Op, Statement};

/// Apply one parsed operation to the builder.
pub fn apply(op: &Op, builder: &mut IrBuilder) -> IrResult<()> {
    match op {
        Op::Declare { ty, name } => builder.declare_named(ty, name),
        Op::Read(name) => builder.read(name),
        Op::WriteText(text) => {
            builder.write_string(text);
            Ok(())
        }
        Op::WriteVar(name) => builder.write_variable(name),
        Op::Print => {
            builder.write_last_calculated();
            Ok(())
        }
        Op::PushInt(text) => {
            builder.load_int_to_stack(text);
            Ok(())
        }
        Op::PushReal(text) => {
            builder.load_real_to_stack(text);
            Ok(())
        }
        Op::Load(name) => builder.load_variable_to_stack(name),
        Op::Arith(op) => builder.binary(*op),
        Op::Store(name) => builder.store_to(name),
    }
}

/// Replay statements in order, stopping at the first error.
pub fn replay(statements: &[Statement], builder: &mut IrBuilder) -> IrResult<()> {
    for stmt in statements {
        apply(&stmt.op, builder).map_err(|e| e.with_note(format!("at script line {}", stmt.line)))?;
    }
    Ok(())
}

pub fn emit_source(source: &str, config: &CompilerConfig) -> IrResult<String> {
    let statements = script::parse(source)?;

    if config.debug.script {
        for stmt in &statements {
            eprintln!("{} {:>4}: {:?}", "[script]".color(GREY), stmt.line, stmt.op);
        }
    }

    let mut builder = IrBuilder::with_config(config.emit_config());
    replay(&statements, &mut builder)?;
    let ir = builder.build();

    if config.verify {
        cfg_if! {
            if #[cfg(feature = "verify")] {
                llvm::verify::verify_ir(&ir)?;
            } else {
                eprintln!(
                    "{}: built without the `verify` feature, skipping verification",
                    "warning".color(YELLOW).bold()
                );
            }
        }
    }

    Ok(ir)
}

pub fn emit_file(path: &Path, config: &CompilerConfig) -> anyhow::Result<String> {
    let source = fs::read_to_string(path)
        .map_err(|e| IrError::file_read(&path.display().to_string(), e))?;
    let ir = emit_source(&source, config)
        .with_context(|| format!("while emitting `{}`", path.display()))?;
    Ok(ir)
}

/// Emit every configured source and write each module next to it (or to
/// the `-o` path). Returns the written paths.
pub fn build_files(config: &CompilerConfig) -> anyhow::Result<Vec<PathBuf>> {
    config.validate().map_err(anyhow::Error::msg)?;

    let mut written = Vec::with_capacity(config.source_files.len());
    for source in &config.source_files {
        let ir = emit_file(source, config)?;
        let out = config.output_for(source);
        fs::write(&out, ir).map_err(|e| IrError::file_write(&out.display().to_string(), e))?;
        written.push(out);
    }

    Ok(written)
}
