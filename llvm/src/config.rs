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

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PointerStyle {
    /// `i32*`, accepted by LLVM 14 and earlier.
    #[default]
    Typed,
    /// `ptr`, required from LLVM 17 on.
    Opaque,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TraceFlags {
    /// Echo every emitted instruction to stderr.
    pub ir: bool,
    /// Dump the operand stack after each builder call.
    pub stack: bool,
}

/// Output options for [`crate::IrBuilder`]. None of them change which
/// instructions are emitted, only how the module text is spelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitConfig {
    pub entry: String,
    pub pointer_style: PointerStyle,
    pub target_triple: Option<String>,
    pub indent: usize,
    pub trace: TraceFlags,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            entry: "main".to_string(),
            pointer_style: PointerStyle::Typed,
            target_triple: None,
            indent: 2,
            trace: TraceFlags::default(),
        }
    }
}

impl EmitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        self.entry = entry.into();
        self
    }

    pub fn with_pointer_style(mut self, style: PointerStyle) -> Self {
        self.pointer_style = style;
        self
    }

    pub fn with_target_triple(mut self, triple: impl Into<String>) -> Self {
        self.target_triple = Some(triple.into());
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_trace(mut self, trace: TraceFlags) -> Self {
        self.trace = trace;
        self
    }
}
