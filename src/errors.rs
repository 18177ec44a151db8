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

#[derive(Debug)]
pub enum CliError {
    Usage(String),

    // emit
    Failed(anyhow::Error),

    // io
    Io(std::io::Error),
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        CliError::Usage(msg.into())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "Error: {}", msg),
            CliError::Failed(e) => write!(f, "Error: {:#}", e),
            CliError::Io(e) => write!(f, "IO Error: {}", e),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<anyhow::Error> for CliError {
    fn from(e: anyhow::Error) -> Self {
        CliError::Failed(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn fail_write() -> Result<(), CliError> {
        let write: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        write?;
        Ok(())
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        let err = fail_write().unwrap_err();
        assert!(matches!(err, CliError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "IO Error: pipe closed");
    }

    #[test]
    fn emit_failures_keep_their_context_chain() {
        let err: CliError = anyhow::anyhow!("inner").context("outer").into();
        assert_eq!(err.to_string(), "Error: outer: inner");
    }
}
