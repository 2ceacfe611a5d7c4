use std::process::ExitCode;

use clap::Parser as _;
use jaoc_drv::{init_tracing, run, Cli};

fn main() -> ExitCode {
    // clap's default arg-error exit code is 2; spec.md §6 requires exactly 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprint!("{}", e);
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.verbose);
    ExitCode::from(run(&cli) as u8)
}
