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

use std::cmp::Ordering;

use crate::builder::IrBuilder;
use crate::codegen::{NumericClass, NumericKind, Operand};

/// Conversion opcode for a `from -> to` change of kind.
///
/// Panics when both kinds share a class and a size, which the kind table
/// rules out.
pub fn conversion_opcode(from: NumericKind, to: NumericKind) -> &'static str {
    match (from.class(), to.class()) {
        (NumericClass::Int, NumericClass::Int) => match from.size().cmp(&to.size()) {
            Ordering::Less => "sext",
            Ordering::Greater => "trunc",
            Ordering::Equal => unreachable!("no conversion between {} and {}", from, to),
        },
        (NumericClass::Float, NumericClass::Float) => match from.size().cmp(&to.size()) {
            Ordering::Less => "fpext",
            Ordering::Greater => "fptrunc",
            Ordering::Equal => unreachable!("no conversion between {} and {}", from, to),
        },
        (NumericClass::Int, NumericClass::Float) => "sitofp",
        (NumericClass::Float, NumericClass::Int) => "fptosi",
    }
}

impl IrBuilder {
    /// Convert `operand` to `target`. Same kind in, same operand out, with
    /// nothing emitted.
    pub fn cast_operand_to_kind(&mut self, operand: Operand, target: NumericKind) -> Operand {
        let source = operand.kind();
        if source == target {
            return operand;
        }

        let id = self.emitter.emit_value(format!(
            "{} {} {} to {}",
            conversion_opcode(source, target),
            source,
            operand,
            target
        ));
        Operand::register(id, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_cast_is_free() {
        for kind in NumericKind::ALL {
            let mut b = IrBuilder::new();
            let op = Operand::register(9, kind);
            assert_eq!(b.cast_operand_to_kind(op.clone(), kind), op);
            assert!(b.instructions().is_empty());
        }
    }

    #[test]
    fn widening_emits_exactly_one_instruction() {
        let cases = [
            (NumericKind::I32, NumericKind::I64, "%1 = sext i32 %9 to i64"),
            (NumericKind::F32, NumericKind::F64, "%1 = fpext float %9 to double"),
        ];
        for (from, to, expected) in cases {
            let mut b = IrBuilder::new();
            let out = b.cast_operand_to_kind(Operand::register(9, from), to);
            assert_eq!(out, Operand::register(1, to));
            assert_eq!(b.instructions().len(), 1);
            assert_eq!(b.instructions()[0].to_string(), expected);
        }
    }

    #[test]
    fn opcode_per_class_pair() {
        use NumericKind::*;
        assert_eq!(conversion_opcode(I64, I32), "trunc");
        assert_eq!(conversion_opcode(F64, F32), "fptrunc");
        assert_eq!(conversion_opcode(I64, F32), "sitofp");
        assert_eq!(conversion_opcode(F32, I64), "fptosi");
    }

    #[test]
    fn constants_convert_in_place() {
        let mut b = IrBuilder::new();
        let out = b.cast_operand_to_kind(Operand::constant(NumericKind::F32, "2.5"), NumericKind::I32);
        assert_eq!(out.kind(), NumericKind::I32);
        assert_eq!(b.instructions()[0].to_string(), "%1 = fptosi float 2.5 to i32");
    }

    #[test]
    #[should_panic(expected = "no conversion between")]
    fn same_size_same_class_is_a_bug() {
        conversion_opcode(NumericKind::I32, NumericKind::I32);
    }
}
