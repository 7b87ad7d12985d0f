//! LS-8 CLI — load a binary-literal program and execute it.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Input/load error
//! - 2: Usage error
//! - 3: Runtime error

mod commands;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LS8_LOG=debug`.
const LOG_ENV: &str = "LS8_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "Run an LS-8 program",
    long_about = "Load a program written as one binary byte per line (`#` starts a comment) \
                  into memory at address 0 and execute it until HLT. PRN output goes to stdout."
)]
struct Cli {
    /// Program file to load.
    program: PathBuf,

    /// Log machine state before every instruction to stderr.
    #[arg(long)]
    trace: bool,

    /// Print an annotated listing of the program instead of running it.
    #[arg(long)]
    disassemble: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let result = if cli.disassemble {
        commands::disassemble(&cli.program)
    } else {
        commands::run(&cli.program)
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn init_logging(trace: bool) {
    let mut filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        if let Ok(directive) = "ls8_vm=trace".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
