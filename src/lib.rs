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

pub mod cli;
pub mod compiler_config;
pub mod errors;
pub mod flags;
pub mod runner;
pub mod script;
pub mod version;

pub use compiler_config::CompilerConfig;
pub use llvm::{EmitConfig, IrBuilder, NumericKind, PointerStyle};

use utils::colorex::*;

pub fn version_minill() {
    println!("{}", version::version().color(GREEN));
}
