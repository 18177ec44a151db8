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

use std::path::{Path, PathBuf};

use llvm::{EmitConfig, PointerStyle};

use crate::flags::DebugFlags;

/// Settings for one emitter run.
#[derive(Debug, Clone, Default)]
pub struct CompilerConfig {
    /// Op-script files to translate
    pub source_files: Vec<PathBuf>,

    /// Output `.ll` path; defaults to the source stem
    pub output_path: Option<PathBuf>,

    pub debug: DebugFlags,

    /// Spelling options handed to the builder
    pub emit: EmitConfig,

    /// Run the LLVM verifier on the result (needs the `verify` feature)
    pub verify: bool,
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source_file(mut self, path: PathBuf) -> Self {
        self.source_files.push(path);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_debug(mut self, debug: DebugFlags) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_emit(mut self, emit: EmitConfig) -> Self {
        self.emit = emit;
        self
    }

    pub fn with_pointer_style(mut self, style: PointerStyle) -> Self {
        self.emit.pointer_style = style;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Builder options with tracing taken from the debug flags.
    pub fn emit_config(&self) -> EmitConfig {
        self.emit.clone().with_trace(self.debug.trace())
    }

    pub fn output_for(&self, source: &Path) -> PathBuf {
        match &self.output_path {
            Some(p) => p.clone(),
            None => source.with_extension("ll"),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source_files.is_empty() {
            return Err("No source files specified".to_string());
        }

        if self.output_path.is_some() && self.source_files.len() > 1 {
            return Err("-o cannot be used with more than one source file".to_string());
        }

        if self.emit.entry.is_empty() {
            return Err("entry function name must not be empty".to_string());
        }

        Ok(())
    }
}
