//! Kodegen Bundler Electron - stages Electron runtimes with application sources.
//!
//! This binary copies a vendored runtime distribution into a clean build
//! directory, installs the application sources and applies branding.

use kodegen_bundler_electron::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
