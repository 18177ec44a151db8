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

//! Line-oriented op scripts.
//!
//! Each non-empty line names one builder operation and its arguments.
//! The grammar only splits lines into words, literals and strings; which
//! words are operations and how many arguments they take is checked here.

use error::{IrError, IrResult};
use llvm::BinaryOp;
use pest::iterators::Pair;
use pest::Parser;

#[derive(pest_derive::Parser)]
#[grammar = "script.pest"]
struct ScriptParser;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Declare { ty: String, name: String },
    Read(String),
    WriteText(String),
    WriteVar(String),
    Print,
    PushInt(String),
    PushReal(String),
    Load(String),
    Arith(BinaryOp),
    Store(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub op: Op,
    pub line: usize,
}

#[derive(Debug)]
enum Arg {
    Ident(String),
    Number(String),
    Text(String),
}

pub fn parse(source: &str) -> IrResult<Vec<Statement>> {
    let mut pairs = ScriptParser::parse(Rule::script, source).map_err(|e| {
        let (line, column) = match e.line_col {
            pest::error::LineColLocation::Pos(pos) => pos,
            pest::error::LineColLocation::Span(start, _) => start,
        };
        IrError::script_syntax(e.variant.message().into_owned(), line, column)
    })?;

    let mut statements = Vec::new();
    let Some(script) = pairs.next() else {
        return Ok(statements);
    };

    for pair in script.into_inner() {
        if pair.as_rule() == Rule::statement {
            statements.push(build_statement(pair)?);
        }
    }

    Ok(statements)
}

fn build_statement(pair: Pair<Rule>) -> IrResult<Statement> {
    let (line, column) = pair.as_span().start_pos().line_col();
    let mut inner = pair.into_inner();

    let keyword = match inner.next() {
        Some(k) => k.as_str().to_string(),
        None => return Err(IrError::script_syntax("expected an operation", line, column)),
    };

    let mut args = Vec::new();
    for p in inner {
        let arg = match p.as_rule() {
            Rule::ident => Arg::Ident(p.as_str().to_string()),
            Rule::number => Arg::Number(p.as_str().to_string()),
            Rule::string => {
                let raw = p.into_inner().next().map(|t| t.as_str()).unwrap_or("");
                let (l, c) = (line, column);
                Arg::Text(unescape(raw).map_err(|msg| IrError::script_syntax(msg, l, c))?)
            }
            other => {
                return Err(IrError::script_syntax(
                    format!("unexpected {:?}", other),
                    line,
                    column,
                ))
            }
        };
        args.push(arg);
    }

    let bad = |expected: &str| {
        IrError::script_syntax(format!("usage: {} {}", keyword, expected), line, column)
    };

    let op = match (keyword.as_str(), args.as_slice()) {
        ("declare", [Arg::Ident(ty), Arg::Ident(name)]) => Op::Declare {
            ty: ty.clone(),
            name: name.clone(),
        },
        ("declare", _) => return Err(bad("<type> <name>")),

        ("read", [Arg::Ident(name)]) => Op::Read(name.clone()),
        ("read", _) => return Err(bad("<name>")),

        ("write", [Arg::Text(text)]) => Op::WriteText(text.clone()),
        ("write", [Arg::Ident(name)]) => Op::WriteVar(name.clone()),
        ("write", _) => return Err(bad("\"<text>\" | <name>")),

        ("print", []) => Op::Print,
        ("print", _) => return Err(bad("")),

        ("push", [Arg::Number(n)]) if is_real(n) => Op::PushReal(
            real_literal(n).map_err(|msg| IrError::script_syntax(msg, line, column))?,
        ),
        ("push", [Arg::Number(n)]) => Op::PushInt(n.clone()),
        ("push", _) => return Err(bad("<number>")),

        ("load", [Arg::Ident(name)]) => Op::Load(name.clone()),
        ("load", _) => return Err(bad("<name>")),

        ("store", [Arg::Ident(name)]) => Op::Store(name.clone()),
        ("store", _) => return Err(bad("<name>")),

        ("add" | "sub" | "mul" | "div", []) => Op::Arith(match keyword.as_str() {
            "add" => BinaryOp::Add,
            "sub" => BinaryOp::Subtract,
            "mul" => BinaryOp::Multiply,
            _ => BinaryOp::Divide,
        }),
        ("add" | "sub" | "mul" | "div", _) => return Err(bad("")),

        (other, _) => {
            return Err(IrError::script_syntax(
                format!("unknown operation `{}`", other),
                line,
                column,
            ))
        }
    };

    Ok(Statement { op, line })
}

fn is_real(literal: &str) -> bool {
    literal.contains(['.', 'e', 'E'])
}

/// Spell a real literal the way LLVM accepts it as a `float` constant.
///
/// LLVM wants a `.` before any exponent, and rejects decimal text that a
/// `float` cannot hold exactly; those values are written in the 64-bit hex
/// form of the rounded single.
fn real_literal(raw: &str) -> Result<String, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("invalid real literal `{}`", raw))?;
    let single = f64::from(value as f32);
    if single != value {
        return Ok(format!("0x{:016X}", single.to_bits()));
    }

    if raw.contains('.') {
        return Ok(raw.to_string());
    }
    match raw.find(['e', 'E']) {
        Some(at) => Ok(format!("{}.0{}", &raw[..at], &raw[at..])),
        None => Ok(format!("{}.0", raw)),
    }
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => return Err(format!("unknown escape `\\{}`", other)),
            None => return Err("dangling `\\`".to_string()),
        }
    }

    Ok(out)
}
