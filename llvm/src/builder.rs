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

use std::collections::HashMap;

use error::{IrError, IrResult};
use utils::colorex::*;

use crate::codegen::{Emitter, ExternSet, Instruction, Operand, StringPool, VariableInfo};
use crate::config::EmitConfig;

/// Single-function IR builder.
///
/// All state (register counter, instruction log, string pool, operand
/// stack, variable table) belongs to one instance. Mutating calls take
/// `&mut self`; a builder shared between threads has to be wrapped in a
/// lock by the caller, and interleaving calls from several front ends on
/// one builder scrambles register order.
#[derive(Debug)]
pub struct IrBuilder {
    pub(crate) config: EmitConfig,
    pub(crate) emitter: Emitter,
    pub(crate) strings: StringPool,
    pub(crate) externs: ExternSet,
    pub(crate) stack: Vec<Operand>,
    pub(crate) variables: HashMap<String, VariableInfo>,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self::with_config(EmitConfig::default())
    }

    pub fn with_config(config: EmitConfig) -> Self {
        Self {
            emitter: Emitter::new().with_trace(config.trace.ir),
            config,
            strings: StringPool::new(),
            externs: ExternSet::new(),
            stack: Vec::new(),
            variables: HashMap::new(),
        }
    }

    pub fn config(&self) -> &EmitConfig {
        &self.config
    }

    pub fn stack(&self) -> &[Operand] {
        &self.stack
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.emitter.lines()
    }

    pub fn variable(&self, name: &str) -> Option<&VariableInfo> {
        self.variables.get(name)
    }

    pub fn next_register(&self) -> u32 {
        self.emitter.next_register()
    }

    pub(crate) fn lookup(&self, name: &str) -> IrResult<VariableInfo> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| IrError::unknown_variable(name))
    }

    pub(crate) fn push(&mut self, operand: Operand) {
        self.stack.push(operand);
    }

    pub(crate) fn pop(&mut self) -> Option<Operand> {
        self.stack.pop()
    }

    pub(crate) fn trace_stack(&self, after: &str) {
        if !self.config.trace.stack {
            return;
        }
        let items: Vec<String> = self
            .stack
            .iter()
            .map(|op| format!("{}:{}", op, op.kind()))
            .collect();
        eprintln!("{} {:<12} [{}]", "[stack]".color(GREY), after, items.join(", "));
    }

    /// Serialise the module. Pure; calling it twice yields the same text.
    pub fn build(&self) -> String {
        let indent = " ".repeat(self.config.indent);
        let mut out = String::new();

        if let Some(triple) = &self.config.target_triple {
            out.push_str(&format!("target triple = \"{}\"\n\n", triple));
        }

        for def in self.strings.definitions() {
            out.push_str(&def);
            out.push('\n');
        }
        if !self.strings.is_empty() {
            out.push('\n');
        }

        out.push_str(&format!("define i32 @{}() {{\n", self.config.entry));
        for inst in self.emitter.lines() {
            out.push_str(&format!("{}{}\n", indent, inst));
        }
        out.push_str(&format!("{}ret i32 0\n", indent));
        out.push_str("}\n");

        if !self.externs.is_empty() {
            out.push('\n');
            for f in self.externs.iter() {
                out.push_str(&f.declaration(self.config.pointer_style));
                out.push('\n');
            }
        }

        out
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointerStyle;
    use crate::NumericKind;

    #[test]
    fn empty_module() {
        let b = IrBuilder::new();
        assert_eq!(b.build(), "define i32 @main() {\n  ret i32 0\n}\n");
    }

    #[test]
    fn build_is_repeatable() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I32, "x");
        b.write_string("hi");
        let first = b.build();
        assert_eq!(first, b.build());
        assert_eq!(b.instructions().len(), 2);
    }

    #[test]
    fn config_controls_spelling() {
        let config = EmitConfig::new()
            .with_entry("start")
            .with_indent(4)
            .with_target_triple("x86_64-unknown-linux-gnu")
            .with_pointer_style(PointerStyle::Opaque);
        let mut b = IrBuilder::with_config(config);
        b.write_string("ok");

        assert_eq!(
            b.build(),
            "target triple = \"x86_64-unknown-linux-gnu\"\n\
             \n\
             @str1 = private unnamed_addr constant [3 x i8] c\"ok\\00\"\n\
             \n\
             define i32 @start() {\n    \
             %1 = call i32 (ptr, ...) @printf(ptr @str1)\n    \
             ret i32 0\n\
             }\n\
             \n\
             declare i32 @printf(ptr, ...)\n"
        );
    }
}
