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

use std::io::{self, Write};
use std::{env, path::PathBuf};

use llvm::{backend, PointerStyle};
use utils::colorex::*;

use crate::compiler_config::CompilerConfig;
use crate::errors::CliError;
use crate::flags::DebugFlags;
use crate::{runner, version};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Emit { file: PathBuf },
    Build { file: PathBuf, output: Option<PathBuf> },

    Help,
    Version,
}

#[derive(Default, Debug)]
struct Global {
    debug: DebugFlags,
    opaque_pointers: bool,
    entry: Option<String>,
    triple: Option<String>,
    verify: bool,
}

pub fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return Err(CliError::usage("not enough arguments"));
    }

    let (global, rest) = parse_global(args)?;
    let cmd = parse_command(rest)?;

    dispatch(global, cmd)
}

fn config_for(global: &Global, file: PathBuf) -> CompilerConfig {
    let mut config = CompilerConfig::new()
        .add_source_file(file)
        .with_debug(global.debug)
        .with_verify(global.verify);

    if global.opaque_pointers {
        config = config.with_pointer_style(PointerStyle::Opaque);
    }
    if let Some(entry) = &global.entry {
        config.emit.entry = entry.clone();
    }
    if let Some(triple) = &global.triple {
        config.emit.target_triple = Some(triple.clone());
    }

    config
}

fn dispatch(global: Global, cmd: Command) -> Result<(), CliError> {
    match cmd {
        Command::Version => {
            print_version();
            Ok(())
        }

        Command::Help => {
            print_help();
            Ok(())
        }

        Command::Emit { file } => {
            let config = config_for(&global, file.clone());
            config.validate().map_err(CliError::usage)?;
            let ir = runner::emit_file(&file, &config)?;
            let mut out = io::stdout().lock();
            out.write_all(ir.as_bytes())?;
            out.flush()?;
            Ok(())
        }

        Command::Build { file, output } => {
            let mut config = config_for(&global, file);
            if let Some(out) = output {
                config = config.with_output_path(out);
            }
            for path in runner::build_files(&config)? {
                println!("{} {}", "wrote".color(GREEN).bold(), path.display());
            }
            Ok(())
        }
    }
}

fn take_value<'a>(args: &'a [String], i: usize, what: &str) -> Result<&'a String, CliError> {
    args.get(i + 1)
        .ok_or_else(|| CliError::usage(format!("missing value: {}", what)))
}

fn parse_global(args: Vec<String>) -> Result<(Global, Vec<String>), CliError> {
    let mut g = Global::default();

    let mut rest: Vec<String> = Vec::new();
    let mut i = 0usize;

    while i < args.len() {
        let a = &args[i];

        if a == "--" {
            rest.extend_from_slice(&args[i + 1..]);
            break;
        }

        // --debug-wave=...
        if let Some(mode) = a.strip_prefix("--debug-wave=") {
            g.debug.apply(mode);
            i += 1;
            continue;
        }

        // --debug-wave <mode>
        if a == "--debug-wave" {
            let mode = take_value(&args, i, "--debug-wave <script|ir|stack|all>")?;
            g.debug.apply(mode);
            i += 2;
            continue;
        }

        if a == "--opaque-pointers" {
            g.opaque_pointers = true;
            i += 1;
            continue;
        }

        if a == "--verify" {
            g.verify = true;
            i += 1;
            continue;
        }

        // --entry=name | --entry name
        if let Some(name) = a.strip_prefix("--entry=") {
            g.entry = Some(name.to_string());
            i += 1;
            continue;
        }
        if a == "--entry" {
            g.entry = Some(take_value(&args, i, "--entry <name>")?.clone());
            i += 2;
            continue;
        }

        // --triple=t | --triple t
        if let Some(t) = a.strip_prefix("--triple=") {
            g.triple = Some(t.to_string());
            i += 1;
            continue;
        }
        if a == "--triple" {
            g.triple = Some(take_value(&args, i, "--triple <target-triple>")?.clone());
            i += 2;
            continue;
        }

        rest.push(a.clone());
        i += 1;
    }

    Ok((g, rest))
}

fn parse_command(rest: Vec<String>) -> Result<Command, CliError> {
    if rest.is_empty() {
        return Err(CliError::usage("not enough arguments"));
    }

    let cmd = rest[0].as_str();
    let args = &rest[1..];

    match cmd {
        "--help" | "-h" | "help" => Ok(Command::Help),
        "--version" | "-V" | "version" => Ok(Command::Version),

        "emit" => parse_emit(args),
        "build" => parse_build(args),

        other => Err(CliError::usage(format!("unknown command: {}", other))),
    }
}

fn parse_emit(args: &[String]) -> Result<Command, CliError> {
    let file = args.first().ok_or_else(|| CliError::usage("usage: minill emit <file>"))?;
    if args.len() > 1 {
        return Err(CliError::usage(format!("unexpected extra argument: {}", args[1])));
    }
    Ok(Command::Emit { file: PathBuf::from(file) })
}

fn parse_build(args: &[String]) -> Result<Command, CliError> {
    // build <file> [-o <out.ll>]
    let mut file: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut i = 0usize;

    while i < args.len() {
        let a = &args[i];
        match a.as_str() {
            "-o" | "--output" => {
                output = Some(PathBuf::from(take_value(args, i, "-o <file>")?));
                i += 2;
                continue;
            }
            _ if a.starts_with('-') => {
                return Err(CliError::usage(format!("unknown option for build: {}", a)));
            }
            _ => {
                if file.is_none() {
                    file = Some(PathBuf::from(a));
                } else {
                    return Err(CliError::usage(format!("unexpected extra argument: {}", a)));
                }
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| CliError::usage("usage: minill build <file> [-o <out.ll>]"))?;
    Ok(Command::Build { file, output })
}

pub fn print_usage() {
    eprintln!(
        "\n{} {}",
        "Usage:".color(RED),
        "minill [global-options] <command> [command-options]"
    );
}

pub fn print_version() {
    println!(
        "{} {}",
        "minill".color(GREEN),
        version::version().color(GREEN)
    );

    if let Some(backend) = backend() {
        println!("  backend: {}", backend.color(GREY));
    }
}

pub fn print_help() {
    println!("{}", "minill: op-script to LLVM IR".color(GREEN));
    print_usage();

    println!("\nCommands:");
    println!("  {:<22} {}", "emit <file>".color(BLUE), "Print the LLVM IR for a script");
    println!("  {:<22} {}", "build <file> [-o out]".color(BLUE), "Write the LLVM IR to <stem>.ll or <out>");
    println!("  {:<22} {}", "--version".color(BLUE), "Show version");
    println!("  {:<22} {}", "--help".color(BLUE), "Show help");

    println!("\nGlobal options (anywhere):");
    println!("  {:<26} {}", "--debug-wave=<modes>".color(BLUE), "Trace script,ir,stack (or all) to stderr");
    println!("  {:<26} {}", "--opaque-pointers".color(BLUE), "Emit `ptr` instead of typed pointers");
    println!("  {:<26} {}", "--entry <name>".color(BLUE), "Name of the emitted function (default main)");
    println!("  {:<26} {}", "--triple <triple>".color(BLUE), "Add a target triple line");
    println!("  {:<26} {}", "--verify".color(BLUE), "Check the output with LLVM (verify feature)");
}
