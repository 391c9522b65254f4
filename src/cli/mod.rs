//! Command line interface for the Electron staging tool.
//!
//! Parses arguments, layers them over an optional config file and runs the
//! staging pipeline.

mod args;

pub use args::Args;

use crate::bundler::{Platform, StageOptions, StagedApp, stage};
use crate::error::{CliError, Result};
use crate::metadata::load_config;
use path_absolutize::Absolutize;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(&args).await
}

/// Runs the pipeline for already parsed arguments.
pub async fn execute(args: &Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let file_options = args.config.as_deref().map(load_config).transpose()?;

    let platform_key = args
        .platform
        .clone()
        .or_else(|| file_options.as_ref().and_then(|o| o.platform.clone()))
        .unwrap_or_else(|| Platform::host().to_string());

    let mut cli_options = args.to_options(&platform_key);
    anchor_to_cwd(&mut cli_options)?;

    let options = match file_options {
        Some(file_options) => file_options.merge(cli_options),
        None => cli_options,
    };

    let staged = stage(options).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&staged)?);
    } else {
        print_summary(&staged);
    }

    Ok(0)
}

/// Makes command line paths absolute against the working directory, so a
/// config file's directory never reinterprets them.
fn anchor_to_cwd(options: &mut StageOptions) -> std::io::Result<()> {
    for path in [
        &mut options.src_dir,
        &mut options.build_dir,
        &mut options.binaries_dir,
    ]
    .into_iter()
    .flatten()
    {
        *path = path.absolutize()?.into_owned();
    }

    for resources in options.platform_resources.values_mut() {
        if let Some(icon) = resources.icon.as_mut() {
            *icon = icon.absolutize()?.into_owned();
        }
    }

    Ok(())
}

fn print_summary(staged: &StagedApp) {
    println!(
        "Staged {} ({}/{}) in {}",
        staged.name.as_deref().unwrap_or("Electron"),
        staged.platform,
        staged.arch,
        staged.build_dir.display()
    );
    println!("  executable: {}", staged.executable_path.display());
    println!("  app:        {}", staged.app_dir.display());
    if let Some(bundle) = &staged.bundle_path {
        println!("  bundle:     {}", bundle.display());
    }
    println!("  sha256:     {}", staged.checksum);
}
