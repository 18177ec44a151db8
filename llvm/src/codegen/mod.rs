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

pub mod consts;
pub mod format;
pub mod ir;
pub mod operand;
pub mod types;

pub use consts::{ExternFn, ExternSet, StringConstant, StringPool};
pub use ir::{Emitter, Instruction};
pub use operand::Operand;
pub use types::{NumericClass, NumericKind, VariableInfo};
