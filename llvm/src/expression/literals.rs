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

use crate::builder::IrBuilder;
use crate::codegen::{NumericKind, Operand};

impl IrBuilder {
    /// Push an `i32` immediate. The text is not checked.
    pub fn load_int_to_stack(&mut self, text: &str) {
        self.push(Operand::constant(NumericKind::I32, text));
        self.trace_stack("push int");
    }

    /// Push a `float` immediate. The text is not checked.
    pub fn load_real_to_stack(&mut self, text: &str) {
        self.push(Operand::constant(NumericKind::F32, text));
        self.trace_stack("push real");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_emit_nothing() {
        let mut b = IrBuilder::new();
        b.load_int_to_stack("42");
        b.load_real_to_stack("not-a-number");
        assert!(b.instructions().is_empty());
        assert_eq!(
            b.stack(),
            [
                Operand::constant(NumericKind::I32, "42"),
                Operand::constant(NumericKind::F32, "not-a-number"),
            ]
        );
    }
}
