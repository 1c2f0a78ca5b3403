//! Entry point for the `ceol` binary.

use std::{env, io, process::ExitCode};

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr and stay off unless RUST_LOG asks for them;
    // stdout is reserved for hotlist output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .ok();

    // The first argument is the search prefix; anything after it is ignored.
    let args: Vec<String> = env::args().collect();
    match ceol::run(args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_silent() {
                eprintln!("Error: {err}");
            }
            ExitCode::from(1)
        }
    }
}
