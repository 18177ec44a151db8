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

use utils::colorex::*;

/// One line of the function body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Result bound to `%id`.
    Value { id: u32, text: String },
    /// Side effect only; takes no register id.
    Void(String),
}

impl Instruction {
    pub fn register(&self) -> Option<u32> {
        match self {
            Instruction::Value { id, .. } => Some(*id),
            Instruction::Void(_) => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Value { id, text } => write!(f, "%{} = {}", id, text),
            Instruction::Void(text) => f.write_str(text),
        }
    }
}

/// Ordered instruction log with sequential virtual registers.
///
/// The entry block of a function without parameters is implicitly `%0`,
/// so the first value produced here is `%1` and every following one takes
/// the next integer. LLVM rejects the module if the numbering has gaps, so
/// ids are only ever handed out by [`Emitter::emit_value`].
#[derive(Debug)]
pub struct Emitter {
    lines: Vec<Instruction>,
    next_register: u32,
    trace: bool,
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_register: 1,
            trace: false,
        }
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn emit_value(&mut self, text: String) -> u32 {
        let id = self.next_register;
        self.next_register += 1;
        self.push(Instruction::Value { id, text });
        id
    }

    pub fn emit_void(&mut self, text: String) {
        self.push(Instruction::Void(text));
    }

    fn push(&mut self, inst: Instruction) {
        if self.trace {
            eprintln!("{} {}", "[ir]".color(GREY), inst);
        }
        self.lines.push(inst);
    }

    pub fn lines(&self) -> &[Instruction] {
        &self.lines
    }

    pub fn next_register(&self) -> u32 {
        self.next_register
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}
