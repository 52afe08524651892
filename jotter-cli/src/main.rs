use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use jotter_lib::{Error, Notebook, config::CoreConfig};
use sysexits::ExitCode;
use tracing::{Level, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod note;

#[derive(Parser, Debug)]
#[command(name = "jotter")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: note::Command,

    /// Override the directory notes are stored in
    #[arg(short, long, global = true)]
    storage_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Human friendly panicking in release mode
    human_panic::setup_panic!();

    // Logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set up logging: {e}");
    }

    let cli = Cli::parse();

    let mut cfg = CoreConfig::load().unwrap_or_else(|e| {
        warn!("Falling back to the default configuration: {e}");
        CoreConfig::default()
    });
    if let Some(dir) = &cli.storage_dir {
        cfg.set_storage_dir(dir);
    }

    let result = Notebook::from_config(&cfg)
        .and_then(|mut notebook| note::handle(&mut notebook, &cli.command));

    match result {
        Ok(()) => ExitCode::Ok,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            exit_code(&e)
        }
    }
}

fn exit_code(err: &Error) -> ExitCode {
    match err {
        Error::ContentLength { .. } => ExitCode::DataErr,
        Error::NotFound(_) => ExitCode::NoInput,
        Error::ConfigRead(_) | Error::ConfigWrite(_) => ExitCode::Config,
        Error::NoHome => ExitCode::OsFile,
        Error::Io(_) | Error::Json(_) => ExitCode::IoErr,
    }
}
