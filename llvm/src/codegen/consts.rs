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

use std::collections::HashMap;

use crate::config::PointerStyle;

use super::format;

/// A pooled string as referenced by instructions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StringConstant {
    pub id: usize,
    /// Array length including the trailing NUL.
    pub size: usize,
}

impl StringConstant {
    pub fn global_name(&self) -> String {
        format!("@str{}", self.id)
    }
}

/// Content-addressed string constants, numbered from 1 in first-use order.
#[derive(Debug, Default)]
pub struct StringPool {
    entries: Vec<String>,
    index: HashMap<String, usize>,
}

impl StringPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> StringConstant {
        let id = match self.index.get(text) {
            Some(id) => *id,
            None => {
                self.entries.push(text.to_string());
                let id = self.entries.len();
                self.index.insert(text.to_string(), id);
                id
            }
        };

        StringConstant {
            id,
            size: text.len() + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Global definitions in id order.
    pub fn definitions(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().enumerate().map(|(i, text)| {
            format!(
                "@str{} = private unnamed_addr constant [{} x i8] c\"{}\\00\"",
                i + 1,
                text.len() + 1,
                escape_bytes(text)
            )
        })
    }
}

/// Printable ASCII passes through; `"`, `\` and everything else becomes `\XX`.
pub fn escape_bytes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        if (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\{:02X}", b));
        }
    }
    out
}

/// C runtime functions the program may call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExternFn {
    Printf,
    Scanf,
}

impl ExternFn {
    pub fn symbol(self) -> &'static str {
        match self {
            ExternFn::Printf => "printf",
            ExternFn::Scanf => "scanf",
        }
    }

    pub fn declaration(self, style: PointerStyle) -> String {
        format!(
            "declare i32 @{}({}, ...)",
            self.symbol(),
            format::byte_pointer(style)
        )
    }
}

/// Required externals, each declared once, in first-use order.
#[derive(Debug, Default)]
pub struct ExternSet {
    required: Vec<ExternFn>,
}

impl ExternSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, f: ExternFn) {
        if !self.required.contains(&f) {
            self.required.push(f);
        }
    }

    pub fn contains(&self, f: ExternFn) -> bool {
        self.required.contains(&f)
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ExternFn> + '_ {
        self.required.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_shares_an_entry() {
        let mut pool = StringPool::new();
        let a = pool.intern("hello");
        let b = pool.intern("world");
        let c = pool.intern("hello");

        assert_eq!(a, c);
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn definitions_are_sized_with_terminator() {
        let mut pool = StringPool::new();
        pool.intern("%d");
        pool.intern("Hi!");
        let defs: Vec<String> = pool.definitions().collect();
        assert_eq!(
            defs,
            [
                "@str1 = private unnamed_addr constant [3 x i8] c\"%d\\00\"",
                "@str2 = private unnamed_addr constant [4 x i8] c\"Hi!\\00\"",
            ]
        );
    }

    #[test]
    fn escapes_quotes_and_control_bytes() {
        assert_eq!(escape_bytes("a\"b\\c\n"), "a\\22b\\5Cc\\0A");
        assert_eq!(escape_bytes("é"), "\\C3\\A9");
    }

    #[test]
    fn size_counts_bytes_not_chars() {
        let mut pool = StringPool::new();
        assert_eq!(pool.intern("é").size, 3);
    }

    #[test]
    fn externs_are_declared_once_in_first_use_order() {
        let mut set = ExternSet::new();
        set.require(ExternFn::Scanf);
        set.require(ExternFn::Printf);
        set.require(ExternFn::Scanf);
        let order: Vec<ExternFn> = set.iter().collect();
        assert_eq!(order, [ExternFn::Scanf, ExternFn::Printf]);
        assert_eq!(
            ExternFn::Printf.declaration(PointerStyle::Typed),
            "declare i32 @printf(i8*, ...)"
        );
        assert_eq!(
            ExternFn::Scanf.declaration(PointerStyle::Opaque),
            "declare i32 @scanf(ptr, ...)"
        );
    }
}
