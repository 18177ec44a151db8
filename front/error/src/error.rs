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

use utils::colorex::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrErrorKind {
    // Emitter errors
    UnknownType(String),
    UnknownVariable(String),
    NoMatchingOperator {
        op: String,
        left: String,
        right: String,
    },

    // Script errors
    ScriptSyntax { line: usize, column: usize },

    // Output checks
    VerificationFailed,

    // I/O errors
    FileReadError(String),
    FileWriteError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Error,
    Warning,
    Note,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrError {
    pub kind: IrErrorKind,
    pub message: String,
    pub help: Option<String>,
    pub note: Option<String>,
    pub severity: ErrorSeverity,
}

impl IrError {
    pub fn new(kind: IrErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            help: None,
            note: None,
            severity: ErrorSeverity::Error,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn unknown_type(name: &str) -> Self {
        Self::new(
            IrErrorKind::UnknownType(name.to_string()),
            format!("unknown type `{}`", name),
        )
        .with_help("expected one of: int, long, float, double (or i32, i64, f32, f64)")
    }

    pub fn unknown_variable(name: &str) -> Self {
        Self::new(
            IrErrorKind::UnknownVariable(name.to_string()),
            format!("cannot find variable `{}`", name),
        )
        .with_help("make sure the variable is declared before use")
    }

    pub fn no_matching_operator(op: &str, left: &str, right: &str) -> Self {
        Self::new(
            IrErrorKind::NoMatchingOperator {
                op: op.to_string(),
                left: left.to_string(),
                right: right.to_string(),
            },
            format!("no operator `{}` for operands `{}` and `{}`", op, left, right),
        )
    }

    pub fn script_syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(IrErrorKind::ScriptSyntax { line, column }, message)
    }

    pub fn verification_failed(message: impl Into<String>) -> Self {
        Self::new(IrErrorKind::VerificationFailed, message)
            .with_note("the emitted module was rejected by LLVM")
    }

    pub fn file_read(path: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            IrErrorKind::FileReadError(path.to_string()),
            format!("failed to read `{}`: {}", path, cause),
        )
    }

    pub fn file_write(path: &str, cause: impl fmt::Display) -> Self {
        Self::new(
            IrErrorKind::FileWriteError(path.to_string()),
            format!("failed to write `{}`: {}", path, cause),
        )
    }

    /// Print the error to stderr in rustc style.
    pub fn display(&self) {
        let severity_str = match self.severity {
            ErrorSeverity::Error => "error".color(RED).bold(),
            ErrorSeverity::Warning => "warning".color(YELLOW).bold(),
            ErrorSeverity::Note => "note".color(CYAN).bold(),
        };

        eprintln!("{}: {}", severity_str, self.message.bold());

        if let IrErrorKind::ScriptSyntax { line, column } = self.kind {
            eprintln!("  {} line {}, column {}", "-->".color(BLUE).bold(), line, column);
        }

        if let Some(note) = &self.note {
            eprintln!("   {} {}: {}", "=".color(BLUE).bold(), "note".color(CYAN).bold(), note);
        }

        if let Some(help) = &self.help {
            eprintln!("   {} {}: {}", "=".color(BLUE).bold(), "help".color(GREEN).bold(), help);
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self.severity, ErrorSeverity::Error)
    }
}

impl fmt::Display for IrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            IrErrorKind::ScriptSyntax { line, column } => {
                write!(f, "{}:{}: {}", line, column, self.message)
            }
            _ => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for IrError {}
