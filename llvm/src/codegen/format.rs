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

//! Pointer spellings for the two LLVM pointer models.
//!
//! LLVM 14 still expects typed pointers (`i32*`); LLVM 15 and later use the
//! opaque `ptr`. Everything that mentions a pointer goes through here so the
//! rest of the emitter does not care which one is selected.

use crate::config::PointerStyle;

use super::consts::StringConstant;
use super::types::NumericKind;

pub fn pointer_to(kind: NumericKind, style: PointerStyle) -> String {
    match style {
        PointerStyle::Typed => format!("{}*", kind),
        PointerStyle::Opaque => "ptr".to_string(),
    }
}

pub fn byte_pointer(style: PointerStyle) -> &'static str {
    match style {
        PointerStyle::Typed => "i8*",
        PointerStyle::Opaque => "ptr",
    }
}

/// Typed argument pointing at the first byte of a pooled string.
pub fn string_arg(constant: &StringConstant, style: PointerStyle) -> String {
    match style {
        PointerStyle::Typed => format!(
            "i8* getelementptr inbounds ([{n} x i8], [{n} x i8]* {g}, i64 0, i64 0)",
            n = constant.size,
            g = constant.global_name()
        ),
        PointerStyle::Opaque => format!("ptr {}", constant.global_name()),
    }
}

/// Function type used at printf/scanf call sites.
pub fn vararg_fn_type(style: PointerStyle) -> String {
    format!("i32 ({}, ...)", byte_pointer(style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_string_argument_uses_gep() {
        let c = StringConstant { id: 2, size: 4 };
        assert_eq!(
            string_arg(&c, PointerStyle::Typed),
            "i8* getelementptr inbounds ([4 x i8], [4 x i8]* @str2, i64 0, i64 0)"
        );
        assert_eq!(string_arg(&c, PointerStyle::Opaque), "ptr @str2");
    }

    #[test]
    fn pointer_spelling() {
        assert_eq!(pointer_to(NumericKind::F64, PointerStyle::Typed), "double*");
        assert_eq!(pointer_to(NumericKind::F64, PointerStyle::Opaque), "ptr");
        assert_eq!(vararg_fn_type(PointerStyle::Typed), "i32 (i8*, ...)");
    }
}
