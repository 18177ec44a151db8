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

use error::IrResult;

use crate::builder::IrBuilder;
use crate::codegen::format::{pointer_to, string_arg, vararg_fn_type};
use crate::codegen::{ExternFn, NumericClass, NumericKind};

impl IrBuilder {
    /// The `i32` result of printf/scanf is never used, but it still takes a
    /// register slot, so the call is numbered like any other value.
    fn call_extern(&mut self, f: ExternFn, format: &str, arg: Option<String>) {
        let style = self.config.pointer_style;
        let pattern = self.strings.intern(format);
        let mut args = string_arg(&pattern, style);
        if let Some(arg) = arg {
            args.push_str(", ");
            args.push_str(&arg);
        }
        self.emitter.emit_value(format!(
            "call {} @{}({})",
            vararg_fn_type(style),
            f.symbol(),
            args
        ));
    }

    /// scanf straight into the variable's storage.
    pub fn read(&mut self, name: &str) -> IrResult<()> {
        let var = self.lookup(name)?;
        self.externs.require(ExternFn::Scanf);
        let target = format!(
            "{} %{}",
            pointer_to(var.kind, self.config.pointer_style),
            var.address
        );
        self.call_extern(ExternFn::Scanf, var.kind.format_pattern(), Some(target));
        self.trace_stack("read");
        Ok(())
    }

    pub fn write_string(&mut self, text: &str) {
        self.externs.require(ExternFn::Printf);
        self.call_extern(ExternFn::Printf, text, None);
        self.trace_stack("write");
    }

    pub fn write_variable(&mut self, name: &str) -> IrResult<()> {
        self.load_variable_to_stack(name)?;
        self.write_last_calculated();
        Ok(())
    }

    /// Print the top of the stack. Floats go through varargs as `double`,
    /// so anything narrower is widened first; integers print at their own
    /// width.
    pub fn write_last_calculated(&mut self) {
        self.externs.require(ExternFn::Printf);
        let Some(value) = self.pop() else {
            return;
        };

        let value = if value.kind().is_float() {
            self.cast_operand_to_kind(value, NumericKind::widest(NumericClass::Float))
        } else {
            value
        };

        let kind = value.kind();
        self.call_extern(
            ExternFn::Printf,
            kind.format_pattern(),
            Some(format!("{} {}", kind, value)),
        );
        self.trace_stack("print");
    }
}
