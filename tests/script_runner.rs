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

//! Scripts driven end to end through the runner.

use std::fs;
use std::path::PathBuf;

use minill::compiler_config::CompilerConfig;
use minill::flags::DebugFlags;
use minill::runner;

const CELSIUS: &str = r#"
# read a temperature and print it in fahrenheit
declare double c
declare double f
write "celsius? "
read c
load c
push 9
mul
push 5
div
push 32
add
store f
write f
write "\n"
"#;

#[test]
fn celsius_script_emits_expected_module() {
    let ir = runner::emit_source(CELSIUS, &CompilerConfig::new()).unwrap();
    let expected = r#"@str1 = private unnamed_addr constant [10 x i8] c"celsius? \00"
@str2 = private unnamed_addr constant [4 x i8] c"%lf\00"
@str3 = private unnamed_addr constant [2 x i8] c"\0A\00"

define i32 @main() {
  %1 = alloca double, align 8
  %2 = alloca double, align 8
  %3 = call i32 (i8*, ...) @printf(i8* getelementptr inbounds ([10 x i8], [10 x i8]* @str1, i64 0, i64 0))
  %4 = call i32 (i8*, ...) @scanf(i8* getelementptr inbounds ([4 x i8], [4 x i8]* @str2, i64 0, i64 0), double* %1)
  %5 = load double, double* %1, align 8
  %6 = sitofp i32 9 to double
  %7 = fmul double %5, %6
  %8 = sitofp i32 5 to double
  %9 = fdiv double %7, %8
  %10 = sitofp i32 32 to double
  %11 = fadd double %9, %10
  store double %11, double* %2, align 8
  %12 = load double, double* %2, align 8
  %13 = call i32 (i8*, ...) @printf(i8* getelementptr inbounds ([4 x i8], [4 x i8]* @str2, i64 0, i64 0), double %12)
  %14 = call i32 (i8*, ...) @printf(i8* getelementptr inbounds ([2 x i8], [2 x i8]* @str3, i64 0, i64 0))
  ret i32 0
}

declare i32 @printf(i8*, ...)
declare i32 @scanf(i8*, ...)
"#;
    assert_eq!(ir, expected);
}

#[cfg(feature = "verify")]
#[test]
fn celsius_module_passes_the_llvm_verifier() {
    let config = CompilerConfig::new().with_verify(true);
    let ir = runner::emit_source(CELSIUS, &config).unwrap();
    assert_eq!(llvm::verify::verify_ir(&ir), Ok(()));
}

#[test]
fn tracing_does_not_change_output() {
    let mut debug = DebugFlags::default();
    debug.apply("all");
    let traced = CompilerConfig::new().with_debug(debug);

    let plain = runner::emit_source(CELSIUS, &CompilerConfig::new()).unwrap();
    assert_eq!(runner::emit_source(CELSIUS, &traced).unwrap(), plain);
}

#[test]
fn build_writes_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("sum.mil");
    fs::write(&src, "declare int x\npush 3\npush 4\nadd\nstore x\nwrite x\n").unwrap();

    let config = CompilerConfig::new().add_source_file(src.clone());
    let written = runner::build_files(&config).unwrap();

    let out = dir.path().join("sum.ll");
    assert_eq!(written, vec![out.clone()]);
    let ir = fs::read_to_string(out).unwrap();
    assert!(ir.contains("  %2 = add nsw i32 3, 4\n"));
    assert!(ir.ends_with("declare i32 @printf(i8*, ...)\n"));
}

#[test]
fn build_honours_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("p.mil");
    fs::write(&src, "write \"hi\"\n").unwrap();
    let out = dir.path().join("custom.ll");

    let config = CompilerConfig::new()
        .add_source_file(src)
        .with_output_path(out.clone());
    runner::build_files(&config).unwrap();
    assert!(fs::read_to_string(out).unwrap().contains("c\"hi\\00\""));
}

#[test]
fn missing_file_mentions_path() {
    let config = CompilerConfig::new();
    let err = runner::emit_file(&PathBuf::from("/nonexistent/x.mil"), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/x.mil"));
}

#[test]
fn script_errors_keep_their_kind_through_anyhow() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("bad.mil");
    fs::write(&src, "store nowhere\n").unwrap();

    let err = runner::emit_file(&src, &CompilerConfig::new()).unwrap_err();
    let ir_err = err.downcast_ref::<error::IrError>().unwrap();
    assert_eq!(
        ir_err.kind,
        error::IrErrorKind::UnknownVariable("nowhere".to_string())
    );
}
