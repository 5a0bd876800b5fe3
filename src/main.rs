#![forbid(unsafe_code)]

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TUNEUP_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match tuneup::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("tuneup: {e}");
            ExitCode::from(2)
        }
    }
}
