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
use std::str::FromStr;

use error::{IrError, IrResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericClass {
    Int,
    Float,
}

/// The closed set of scalar kinds a program can declare.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    I32,
    I64,
    F32,
    F64,
}

struct KindInfo {
    kind: NumericKind,
    llvm_name: &'static str,
    size: u32,
    class: NumericClass,
    format: &'static str,
    names: &'static [&'static str],
}

// Indexed by `NumericKind as usize`.
const KIND_TABLE: [KindInfo; 4] = [
    KindInfo {
        kind: NumericKind::I32,
        llvm_name: "i32",
        size: 4,
        class: NumericClass::Int,
        format: "%d",
        names: &["int", "i32"],
    },
    KindInfo {
        kind: NumericKind::I64,
        llvm_name: "i64",
        size: 8,
        class: NumericClass::Int,
        format: "%ld",
        names: &["long", "i64"],
    },
    KindInfo {
        kind: NumericKind::F32,
        llvm_name: "float",
        size: 4,
        class: NumericClass::Float,
        format: "%f",
        names: &["float", "f32"],
    },
    KindInfo {
        kind: NumericKind::F64,
        llvm_name: "double",
        size: 8,
        class: NumericClass::Float,
        format: "%lf",
        names: &["double", "f64"],
    },
];

impl NumericKind {
    pub const ALL: [NumericKind; 4] = [
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::F32,
        NumericKind::F64,
    ];

    fn info(self) -> &'static KindInfo {
        &KIND_TABLE[self as usize]
    }

    /// Resolve a declared type name (`int`, `double`, `i64`, ...).
    pub fn from_name(name: &str) -> IrResult<NumericKind> {
        KIND_TABLE
            .iter()
            .find(|info| info.names.contains(&name))
            .map(|info| info.kind)
            .ok_or_else(|| IrError::unknown_type(name))
    }

    pub fn llvm_name(self) -> &'static str {
        self.info().llvm_name
    }

    /// Size in bytes. Also used as the alignment of allocas, loads and stores.
    pub fn size(self) -> u32 {
        self.info().size
    }

    pub fn align(self) -> u32 {
        self.info().size
    }

    pub fn class(self) -> NumericClass {
        self.info().class
    }

    pub fn is_int(self) -> bool {
        self.class() == NumericClass::Int
    }

    pub fn is_float(self) -> bool {
        self.class() == NumericClass::Float
    }

    /// printf/scanf conversion for values of this kind.
    pub fn format_pattern(self) -> &'static str {
        self.info().format
    }

    pub fn widest(class: NumericClass) -> NumericKind {
        KIND_TABLE
            .iter()
            .filter(|info| info.class == class)
            .max_by_key(|info| info.size)
            .map(|info| info.kind)
            .unwrap_or(match class {
                NumericClass::Int => NumericKind::I64,
                NumericClass::Float => NumericKind::F64,
            })
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.llvm_name())
    }
}

impl FromStr for NumericKind {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericKind::from_name(s)
    }
}

/// Storage binding of a declared variable: the register holding its
/// address and the kind it was declared with.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VariableInfo {
    pub address: u32,
    pub kind: NumericKind,
}
