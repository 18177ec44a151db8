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

//! Textual LLVM IR emission for straight-line numeric programs.
//!
//! [`IrBuilder`] is driven by a front end through a fixed set of calls
//! (declare, load, arithmetic, store, read, write) and serialises the
//! result with [`IrBuilder::build`].

pub mod builder;
pub mod codegen;
pub mod config;
pub mod expression;
pub mod statement;
#[cfg(feature = "verify")]
pub mod verify;

pub use builder::IrBuilder;
pub use codegen::{NumericClass, NumericKind, Operand, VariableInfo};
pub use config::{EmitConfig, PointerStyle, TraceFlags};
pub use expression::BinaryOp;

pub fn backend() -> Option<String> {
    if cfg!(feature = "verify") {
        Some("LLVM 14 (textual, verified)".to_string())
    } else {
        Some("LLVM (textual)".to_string())
    }
}
