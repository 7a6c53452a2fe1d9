use std::process::ExitCode;

use clap::Parser;
use shootsync::cli::{self, Cli};

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_tracing(&args.log_level);

    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[shootsync] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
