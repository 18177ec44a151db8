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

use llvm::TraceFlags;

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebugFlags {
    pub script: bool,
    pub ir: bool,
    pub stack: bool,
}

impl DebugFlags {
    /// --debug-wave=ir
    /// --debug-wave=ir,stack
    /// --debug-wave=all
    pub fn apply(&mut self, mode: &str) {
        if mode.trim().is_empty() {
            return;
        }

        for item in mode.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            match item {
                "script" => self.script = true,
                "ir" => self.ir = true,
                "stack" => self.stack = true,
                "all" => {
                    self.script = true;
                    self.ir = true;
                    self.stack = true;
                }
                _ => {}
            }
        }
    }

    pub fn trace(&self) -> TraceFlags {
        TraceFlags {
            ir: self.ir,
            stack: self.stack,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_accumulate() {
        let mut flags = DebugFlags::default();
        flags.apply("ir, bogus");
        flags.apply("stack");
        assert_eq!(flags, DebugFlags { script: false, ir: true, stack: true });
    }

    #[test]
    fn all_enables_everything() {
        let mut flags = DebugFlags::default();
        flags.apply("all");
        assert!(flags.script && flags.ir && flags.stack);
        assert_eq!(flags.trace(), TraceFlags { ir: true, stack: true });
    }
}
