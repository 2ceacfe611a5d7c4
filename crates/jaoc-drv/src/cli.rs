//! Command-line surface (spec.md §6): one positional argument, the source
//! file path, plus debug-only flags that never affect evaluation semantics.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "jaoc", about = "Interpreter for JaoLang")]
pub struct Cli {
    /// Path to the .jao source file to run.
    pub source: PathBuf,

    /// Emit tracing spans for each pipeline phase instead of staying silent.
    #[arg(long)]
    pub verbose: bool,

    /// Print the token stream instead of running the program.
    #[arg(long)]
    pub dump_tokens: bool,

    /// Print the parsed AST instead of running the program.
    #[arg(long)]
    pub dump_ast: bool,
}
