use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use robotscript::parse_program;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Checks robot programs without running them: every file is parsed, and the
/// program is printed back in canonical form or the syntax error is reported.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Enables debug logging unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,

    /// Only reports failures instead of printing each parsed program.
    #[arg(short, long)]
    quiet: bool,

    /// Robot program files to check.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "robotscript=debug" } else { "robotscript=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let mut failed = 0usize;
    for path in &args.files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", path.display());
                failed += 1;
                continue;
            },
        };

        match parse_program(&source) {
            Ok(program) => {
                info!(file = %path.display(),
                      statements = program.statements.len(),
                      "parsing completed");
                if !args.quiet {
                    println!("{program}");
                }
            },
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                failed += 1;
            },
        }
    }

    if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
