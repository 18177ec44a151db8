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
use crate::codegen::format::pointer_to;
use crate::codegen::{NumericKind, Operand, VariableInfo};

impl IrBuilder {
    /// Allocate stack storage for `name`. Redeclaring a name rebinds it to
    /// the new slot; the old slot is left as is.
    pub fn declare(&mut self, kind: NumericKind, name: &str) {
        let address = self
            .emitter
            .emit_value(format!("alloca {}, align {}", kind, kind.align()));
        self.variables
            .insert(name.to_string(), VariableInfo { address, kind });
        self.trace_stack("declare");
    }

    pub fn declare_named(&mut self, type_name: &str, name: &str) -> IrResult<()> {
        let kind = NumericKind::from_name(type_name)?;
        self.declare(kind, name);
        Ok(())
    }

    pub fn load_variable_to_stack(&mut self, name: &str) -> IrResult<()> {
        let var = self.lookup(name)?;
        let id = self.emitter.emit_value(format!(
            "load {ty}, {ptr} %{addr}, align {align}",
            ty = var.kind,
            ptr = pointer_to(var.kind, self.config.pointer_style),
            addr = var.address,
            align = var.kind.align()
        ));
        self.push(Operand::register(id, var.kind));
        self.trace_stack("load");
        Ok(())
    }

    /// Pop the top of the stack into `name`, converting to the declared
    /// kind first. An empty stack stores nothing.
    pub fn store_to(&mut self, name: &str) -> IrResult<()> {
        let var = self.lookup(name)?;
        let Some(value) = self.pop() else {
            return Ok(());
        };

        let value = self.cast_operand_to_kind(value, var.kind);
        self.emitter.emit_void(format!(
            "store {ty} {value}, {ptr} %{addr}, align {align}",
            ty = var.kind,
            ptr = pointer_to(var.kind, self.config.pointer_style),
            addr = var.address,
            align = var.kind.align()
        ));
        self.trace_stack("store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{IrBuilder, NumericKind, Operand};
    use error::IrErrorKind;

    fn lines(b: &IrBuilder) -> Vec<String> {
        b.instructions().iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn declare_allocates_aligned_slot() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I64, "n");
        b.declare(NumericKind::F32, "f");
        assert_eq!(lines(&b), ["%1 = alloca i64, align 8", "%2 = alloca float, align 4"]);
        assert_eq!(b.variable("f").map(|v| v.address), Some(2));
    }

    #[test]
    fn redeclaration_rebinds_silently() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I32, "x");
        b.declare(NumericKind::F64, "x");
        let var = b.variable("x").copied().unwrap();
        assert_eq!(var.address, 2);
        assert_eq!(var.kind, NumericKind::F64);
        assert_eq!(b.instructions().len(), 2);
    }

    #[test]
    fn unknown_type_name_emits_nothing() {
        let mut b = IrBuilder::new();
        let err = b.declare_named("char", "c").unwrap_err();
        assert_eq!(err.kind, IrErrorKind::UnknownType("char".to_string()));
        assert!(b.instructions().is_empty());
    }

    #[test]
    fn load_pushes_register_of_declared_kind() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::F64, "d");
        b.load_variable_to_stack("d").unwrap();
        assert_eq!(b.stack(), [Operand::register(2, NumericKind::F64)]);
        assert_eq!(lines(&b)[1], "%2 = load double, double* %1, align 8");
    }

    #[test]
    fn unknown_variable_is_an_error() {
        let mut b = IrBuilder::new();
        let err = b.load_variable_to_stack("ghost").unwrap_err();
        assert_eq!(err.kind, IrErrorKind::UnknownVariable("ghost".to_string()));
        assert!(b.store_to("ghost").is_err());
    }

    #[test]
    fn store_of_matching_kind_needs_no_cast() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I32, "x");
        b.load_int_to_stack("5");
        b.store_to("x").unwrap();
        assert_eq!(lines(&b), ["%1 = alloca i32, align 4", "store i32 5, i32* %1, align 4"]);
        assert_eq!(b.stack_len(), 0);
    }

    #[test]
    fn store_converts_to_declared_kind() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::F64, "d");
        b.load_int_to_stack("7");
        b.store_to("d").unwrap();
        assert_eq!(
            lines(&b),
            [
                "%1 = alloca double, align 8",
                "%2 = sitofp i32 7 to double",
                "store double %2, double* %1, align 8",
            ]
        );
    }

    #[test]
    fn store_narrows_when_asked() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I64, "wide");
        b.declare(NumericKind::I32, "narrow");
        b.load_variable_to_stack("wide").unwrap();
        b.store_to("narrow").unwrap();
        assert_eq!(lines(&b)[3], "%4 = trunc i64 %3 to i32");
    }

    #[test]
    fn store_with_empty_stack_is_a_no_op() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I32, "x");
        b.store_to("x").unwrap();
        assert_eq!(b.instructions().len(), 1);
    }
}
