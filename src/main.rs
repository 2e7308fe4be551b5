// src/main.rs
mod utils;
mod extractors;

use std::io::Write;
use std::path::PathBuf;
use clap::error::ErrorKind;
use clap::Parser;
use utils::AppError;
use utils::config::{Config, DEFAULT_CHANGELOG_PATH};
use extractors::section::SectionExtractor;

/// Prints the changelog section for a release version
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Release version, e.g. v1.2.3 (the VERSION environment variable takes precedence)
    #[arg(value_name = "VERSION")]
    release: Option<String>,

    /// Path to the changelog document
    #[arg(long, env = "CHANGELOG_PATH", default_value = DEFAULT_CHANGELOG_PATH)]
    changelog_path: PathBuf,

    // Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<String>,
}

impl Args {
    /// Settings used when the command line cannot be parsed: no version, path from env or default.
    fn without_cli() -> Self {
        Self {
            release: None,
            changelog_path: std::env::var_os("CHANGELOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CHANGELOG_PATH)),
            _rest: Vec::new(),
        }
    }
}

// A malformed command line must not fail the release step, so it degrades to the fallback notes
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            tracing::warn!("Ignoring command-line arguments ({})", e.kind());
            Args::without_cli()
        }
    }
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var, writes to stderr)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments and resolve the version
    let args = parse_args();
    tracing::debug!("Parsed args: {:?}", args);

    let config = Config::from_env(args.release.as_deref(), args.changelog_path);
    tracing::info!("Extracting notes for version {:?} from {}", config.version, config.changelog_path.display());

    // 3. Extract the section, falling back to the fixed notes on any failure
    let notes = SectionExtractor::new().release_notes(&config.changelog_path, &config.version);

    // 4. Print with no trailing newline
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(notes.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
