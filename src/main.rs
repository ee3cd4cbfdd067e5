use std::process;
use tracing_subscriber::EnvFilter;

use declscan::cli::{Args, Command};
use declscan::NAME;

fn main() {
    let args = Args::parse_args();

    setup_logging(args.verbose, args.quiet);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Route diagnostics to stderr; `RUST_LOG` overrides the verbosity flags
fn setup_logging(verbose: bool, quiet: bool) {
    let default_directive = if verbose {
        format!("{}=debug,warn", NAME)
    } else if quiet {
        "warn".to_string()
    } else {
        format!("{}=info,warn", NAME)
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
