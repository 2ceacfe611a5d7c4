//! jaoc-drv - CLI driver
//!
//! Wires the three interpreter crates together: `jaoc-lex` tokenizes,
//! `jaoc-par` builds the AST, `jaoc-eval` walks it. There is no separate
//! compilation pipeline to orchestrate (spec.md §1 non-goals: no codegen,
//! no bytecode) so the driver's whole job is argument handling, source
//! loading, and turning a `JaoError` into a rendered diagnostic on exit.

pub mod cli;

use std::fs;
use std::io::{self, BufReader, Write};
use std::path::Path;

use jaoc_eval::Evaluator;
use jaoc_lex::Lexer;
use jaoc_par::Parser;
use jaoc_util::{Interner, SourceMap};

pub use cli::Cli;

/// Turns on `tracing` output for `--verbose`; otherwise the interpreter
/// stays silent except for the program's own `mostra_ae` output.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "error" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the whole pipeline for one invocation, returning the process exit
/// code. Never panics on user input: every fallible step is rendered to
/// stderr and mapped to exit code 1.
pub fn run(cli: &Cli) -> i32 {
    let source = match read_source(&cli.source) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}: {}", cli.source.display(), e);
            return 1;
        }
    };

    let map = SourceMap::new(cli.source.display().to_string(), source.clone());
    let mut interner = Interner::new();

    if cli.dump_tokens {
        return match dump_tokens(&source, &mut interner) {
            Ok(()) => 0,
            Err(e) => {
                render_error(&map, &e);
                1
            }
        };
    }

    let program = {
        let _span = tracing::debug_span!("parse").entered();
        match Parser::new(&source, &mut interner).and_then(|mut p| p.parse_program()) {
            Ok(program) => program,
            Err(e) => {
                render_error(&map, &e);
                return 1;
            }
        }
    };

    if cli.dump_ast {
        println!("{:#?}", program);
        return 0;
    }

    let stdin = BufReader::new(io::stdin());
    let mut evaluator = Evaluator::new(&interner, stdin, io::stdout());
    let result = {
        let _span = tracing::debug_span!("eval").entered();
        evaluator.run(&program)
    };
    match result {
        Ok(()) => 0,
        Err(e) => {
            render_error(&map, &e);
            1
        }
    }
}

fn read_source(path: &Path) -> io::Result<String> {
    fs::read_to_string(path)
}

fn dump_tokens(source: &str, interner: &mut Interner) -> jaoc_util::JaoResult<()> {
    let mut lexer = Lexer::new(source, interner)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    loop {
        let token = lexer.current().clone();
        let is_eof = token.kind == jaoc_lex::TokenKind::Eof;
        writeln!(out, "{:?}", token).expect("stdout write failed");
        if is_eof {
            break;
        }
        lexer.advance()?;
    }
    Ok(())
}

fn render_error(map: &SourceMap, err: &jaoc_util::JaoError) {
    eprintln!("error: {}", err);
    eprintln!("{}", map.format_span(err.span()));
}
