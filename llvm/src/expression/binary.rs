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

use std::fmt;

use error::{IrError, IrResult};

use crate::builder::IrBuilder;
use crate::codegen::{NumericClass, Operand};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }

    /// Signed integer forms carry `nsw`; division truncates.
    pub fn mnemonic(self, class: NumericClass) -> &'static str {
        match (class, self) {
            (NumericClass::Int, BinaryOp::Add) => "add nsw",
            (NumericClass::Int, BinaryOp::Subtract) => "sub nsw",
            (NumericClass::Int, BinaryOp::Multiply) => "mul nsw",
            (NumericClass::Int, BinaryOp::Divide) => "sdiv",
            (NumericClass::Float, BinaryOp::Add) => "fadd",
            (NumericClass::Float, BinaryOp::Subtract) => "fsub",
            (NumericClass::Float, BinaryOp::Multiply) => "fmul",
            (NumericClass::Float, BinaryOp::Divide) => "fdiv",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl IrBuilder {
    pub fn add(&mut self) -> IrResult<()> {
        self.binary(BinaryOp::Add)
    }

    pub fn subtract(&mut self) -> IrResult<()> {
        self.binary(BinaryOp::Subtract)
    }

    pub fn multiply(&mut self) -> IrResult<()> {
        self.binary(BinaryOp::Multiply)
    }

    pub fn divide(&mut self) -> IrResult<()> {
        self.binary(BinaryOp::Divide)
    }

    /// Pop two operands, bring them to a common kind and push the result.
    ///
    /// With fewer than two operands on the stack nothing happens at all:
    /// no instruction, and the stack is left as it was.
    pub fn binary(&mut self, op: BinaryOp) -> IrResult<()> {
        let Some(second) = self.pop() else {
            return Ok(());
        };
        let Some(first) = self.pop() else {
            self.push(second);
            return Ok(());
        };

        let (first, second) = self.reconcile(op, first, second)?;
        let kind = first.kind();
        let id = self.emitter.emit_value(format!(
            "{} {} {}, {}",
            op.mnemonic(kind.class()),
            kind,
            first,
            second
        ));
        self.push(Operand::register(id, kind));
        self.trace_stack(op.symbol());
        Ok(())
    }

    fn reconcile(
        &mut self,
        op: BinaryOp,
        first: Operand,
        second: Operand,
    ) -> IrResult<(Operand, Operand)> {
        let (lk, rk) = (first.kind(), second.kind());

        let (first, second) = match (lk.class(), rk.class()) {
            (l, r) if l == r => {
                if lk.size() < rk.size() {
                    (self.cast_operand_to_kind(first, rk), second)
                } else if rk.size() < lk.size() {
                    let second = self.cast_operand_to_kind(second, lk);
                    (first, second)
                } else {
                    (first, second)
                }
            }
            (NumericClass::Int, _) => (self.cast_operand_to_kind(first, rk), second),
            (_, _) => {
                let second = self.cast_operand_to_kind(second, lk);
                (first, second)
            }
        };

        if first.kind() != second.kind() {
            return Err(IrError::no_matching_operator(
                op.symbol(),
                lk.llvm_name(),
                rk.llvm_name(),
            ));
        }

        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NumericKind;

    fn lines(b: &IrBuilder) -> Vec<String> {
        b.instructions().iter().map(|i| i.to_string()).collect()
    }

    #[test]
    fn int_constants_add_directly() {
        let mut b = IrBuilder::new();
        b.load_int_to_stack("3");
        b.load_int_to_stack("4");
        b.add().unwrap();
        assert_eq!(lines(&b), ["%1 = add nsw i32 3, 4"]);
        assert_eq!(b.stack(), [Operand::register(1, NumericKind::I32)]);
    }

    #[test]
    fn operand_order_is_first_then_second() {
        let mut b = IrBuilder::new();
        b.load_int_to_stack("10");
        b.load_int_to_stack("2");
        b.subtract().unwrap();
        b.load_int_to_stack("5");
        b.divide().unwrap();
        assert_eq!(lines(&b), ["%1 = sub nsw i32 10, 2", "%2 = sdiv i32 %1, 5"]);
    }

    #[test]
    fn narrower_int_is_widened() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I64, "n");
        b.load_variable_to_stack("n").unwrap();
        b.load_int_to_stack("2");
        b.multiply().unwrap();
        assert_eq!(
            lines(&b)[2..].to_vec(),
            ["%3 = sext i32 2 to i64", "%4 = mul nsw i64 %2, %3"]
        );
    }

    #[test]
    fn narrower_first_float_is_widened() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::F64, "d");
        b.load_real_to_stack("0.5");
        b.load_variable_to_stack("d").unwrap();
        b.add().unwrap();
        assert_eq!(
            lines(&b)[2..].to_vec(),
            ["%3 = fpext float 0.5 to double", "%4 = fadd double %3, %2"]
        );
    }

    #[test]
    fn mixed_arithmetic_promotes_the_integer_either_way() {
        let mut b = IrBuilder::new();
        b.load_int_to_stack("1");
        b.load_real_to_stack("2.0");
        b.add().unwrap();
        assert_eq!(lines(&b), ["%1 = sitofp i32 1 to float", "%2 = fadd float %1, 2.0"]);

        let mut b = IrBuilder::new();
        b.load_real_to_stack("2.0");
        b.load_int_to_stack("1");
        b.multiply().unwrap();
        assert_eq!(lines(&b), ["%1 = sitofp i32 1 to float", "%2 = fmul float 2.0, %1"]);
    }

    #[test]
    fn mixed_long_and_float_yields_float() {
        let mut b = IrBuilder::new();
        b.declare(NumericKind::I64, "n");
        b.load_variable_to_stack("n").unwrap();
        b.load_real_to_stack("1.0");
        b.divide().unwrap();
        assert_eq!(lines(&b)[2], "%3 = sitofp i64 %2 to float");
        assert_eq!(b.stack()[0].kind(), NumericKind::F32);
    }

    #[test]
    fn underflow_leaves_everything_untouched() {
        let mut b = IrBuilder::new();
        b.add().unwrap();
        assert_eq!(b.stack_len(), 0);

        b.load_int_to_stack("8");
        for op in [BinaryOp::Add, BinaryOp::Subtract, BinaryOp::Multiply, BinaryOp::Divide] {
            b.binary(op).unwrap();
        }
        assert_eq!(b.stack(), [Operand::constant(NumericKind::I32, "8")]);
        assert!(b.instructions().is_empty());
    }

    #[test]
    fn mnemonic_table() {
        assert_eq!(BinaryOp::Divide.mnemonic(NumericClass::Float), "fdiv");
        assert_eq!(BinaryOp::Subtract.mnemonic(NumericClass::Int), "sub nsw");
        assert_eq!(BinaryOp::Multiply.to_string(), "*");
    }
}
