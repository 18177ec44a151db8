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

//! Round-trip the emitted text through LLVM's own parser and verifier.

use error::{IrError, IrResult};
use inkwell::context::Context;
use inkwell::memory_buffer::MemoryBuffer;

pub fn verify_ir(ir: &str) -> IrResult<()> {
    let context = Context::create();
    let buffer = MemoryBuffer::create_from_memory_range_copy(ir.as_bytes(), "minill");
    let module = context
        .create_module_from_ir(buffer)
        .map_err(|e| IrError::verification_failed(e.to_string()))?;
    module
        .verify()
        .map_err(|e| IrError::verification_failed(e.to_string()))
}
