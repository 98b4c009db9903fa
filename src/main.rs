//! CLI entrypoint for `extract-targets`.
//!
//! Reads the build configuration file (conventionally `build.config.zig` in
//! the working directory), locates the declared `targets` list, and prints it
//! as one bracketed, comma-separated line for a CI matrix generator to
//! consume. A file with no targets declaration produces no output and exits
//! zero; an unreadable file is fatal.
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use extract_targets::{
    extract::{DEFAULT_CONFIG_PATH, extract_from_path},
    render::render_list,
};
use log::{LevelFilter, debug, error};

#[derive(Parser, Debug)]
#[command(
    name = "extract-targets",
    version,
    about = "Print declared build targets as a CI matrix line"
)]
struct Args {
    /// Path to the build configuration file
    #[arg(short = 'f', long = "file", default_value = DEFAULT_CONFIG_PATH)]
    file: PathBuf,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn verify_input(args: &Args) -> Result<()> {
    if !args.file.exists() {
        bail!("build configuration not found: {}", args.file.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    if let Err(e) = verify_input(&args) {
        error!("{}", e);
        std::process::exit(2);
    }
    match extract_from_path(&args.file) {
        Ok(Some(names)) => {
            debug!(
                "extracted {} target(s) from {}",
                names.len(),
                args.file.display()
            );
            println!("{}", render_list(&names));
        }
        Ok(None) => {
            // Absent declaration is a normal outcome: stay silent so the
            // consumer sees an empty matrix rather than noise on stdout.
            debug!("no targets block in {}", args.file.display());
        }
        Err(e) => {
            error!("failed to load input: {}", e);
            std::process::exit(3);
        }
    }
}
