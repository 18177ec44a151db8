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

use super::types::NumericKind;

/// A value on the operand stack: either the result of an earlier
/// instruction or an immediate literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Register { id: u32, kind: NumericKind },
    Constant { kind: NumericKind, text: String },
}

impl Operand {
    pub fn register(id: u32, kind: NumericKind) -> Self {
        Operand::Register { id, kind }
    }

    pub fn constant(kind: NumericKind, text: impl Into<String>) -> Self {
        Operand::Constant {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            Operand::Register { kind, .. } | Operand::Constant { kind, .. } => *kind,
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant { .. })
    }
}

/// Renders the operand as it appears inside an instruction.
impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register { id, .. } => write!(f, "%{}", id),
            Operand::Constant { text, .. } => f.write_str(text),
        }
    }
}
