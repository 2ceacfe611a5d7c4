//! End-to-end CLI tests: run the `jaoc` binary as a subprocess against real
//! `.jao` source files, exercising the six scenarios from spec.md §8 at the
//! process/stdout level.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn jao_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(source.as_bytes()).expect("failed to write temp file");
    file
}

fn jaoc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_jaoc"))
}

#[test]
fn runs_arithmetic_and_print() {
    let file = jao_file("<< mostra_ae(2 + 3 * 4) >>");
    jaoc().arg(file.path()).assert().success().stdout("14\n");
}

#[test]
fn runs_if_else_with_comparison() {
    let src = r#"
        << inteirao x vira 5
           se_liga_jao x > 3 << mostra_ae(eh_tudo) >>
           se_nao_jao      << mostra_ae(eh_nada) >> >>
    "#;
    let file = jao_file(src);
    jaoc().arg(file.path()).assert().success().stdout("true\n");
}

#[test]
fn runs_for_loop_summing_to_fifteen() {
    let src = r#"
        << inteirao i vira 1
           inteirao s vira 0
           vai_rodando_ae i < 6 << s vira s + i
                                   i vira i + 1 >>
           mostra_ae(s) >>
    "#;
    let file = jao_file(src);
    jaoc().arg(file.path()).assert().success().stdout("15\n");
}

#[test]
fn reports_a_type_error_and_exits_nonzero() {
    let file = jao_file("<< inteirao x vira 1 falae s vira \"a\" mostra_ae(x + s - 1) >>");
    jaoc()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn missing_source_argument_exits_with_code_one() {
    jaoc().assert().failure().code(1);
}

#[test]
fn missing_source_file_exits_with_code_one() {
    jaoc()
        .arg("/nonexistent/path/does-not-exist.jao")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn dump_tokens_prints_token_stream_without_running() {
    let file = jao_file("<< mostra_ae(1) >>");
    jaoc()
        .arg(file.path())
        .arg("--dump-tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print").and(predicate::str::contains("Eof")));
}

#[test]
fn dump_ast_prints_parsed_tree_without_running() {
    let file = jao_file("<< mostra_ae(1) >>");
    jaoc()
        .arg(file.path())
        .arg("--dump-ast")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print"));
}
