//! bytepatch CLI
//!
//! Inspect and patch binary files from the command line.
//!
//! # Commands
//!
//! - `read` - Print a byte range as a hex dump
//! - `write` - Overwrite bytes at an offset with hex data
//! - `memset` - Fill a range with a single byte value

mod commands;
mod error;
mod usage;

use bytepatch_core::WriteOptions;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use error::CliError;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const COMMAND_NAMES: [&str; 6] = ["r", "read", "w", "write", "m", "memset"];

/// Hex dump and patch tool for binary files.
#[derive(Parser)]
#[command(name = "bytepatch")]
#[command(version, about, long_about = None, disable_help_subcommand = true)]
struct Cli {
    /// Log progress to stderr
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Sync written data to disk before reporting success
    #[arg(global = true, long)]
    sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a byte range as hex: `[<offset> <length>] <file>`
    #[command(visible_alias = "r")]
    Read {
        /// Either `<file>` or `<offset> <length> <file>`
        #[arg(
            required = true,
            num_args = 1..=3,
            value_name = "ARG",
            allow_negative_numbers = true
        )]
        args: Vec<String>,
    },

    /// Write hex data at an offset
    #[command(visible_alias = "w")]
    Write {
        /// Byte offset or `append`
        #[arg(allow_negative_numbers = true)]
        offset: String,

        /// Hex digits, whitespace is ignored
        data: String,

        /// Target file, created if missing
        file: PathBuf,
    },

    /// Fill a range with one byte value
    #[command(visible_alias = "m")]
    Memset {
        /// Byte offset or `append`
        #[arg(allow_negative_numbers = true)]
        offset: String,

        /// Number of bytes to write
        #[arg(allow_negative_numbers = true)]
        length: String,

        /// Byte value: literal, `\n`-style escape, `0x41` or `\65`
        #[arg(value_name = "CHAR")]
        byte: String,

        /// Target file, created if missing
        file: PathBuf,
    },
}

/// Whether the invocation is exactly `<prog> --help`.
fn is_help_invocation(args: &[OsString]) -> bool {
    matches!(args, [_, flag] if flag == "--help")
}

/// Lowercases the subcommand name so `READ` and `Memset` are accepted.
fn normalize_command(args: Vec<OsString>) -> Vec<OsString> {
    let mut args = args;
    if let Some(arg) = args
        .iter_mut()
        .skip(1)
        .find(|arg| !arg.to_string_lossy().starts_with('-'))
    {
        if let Some(name) = arg.to_str().map(str::to_ascii_lowercase) {
            if COMMAND_NAMES.contains(&name.as_str()) {
                *arg = OsString::from(name);
            }
        }
    }
    args
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let options = WriteOptions::new().sync(cli.sync);

    match cli.command {
        Commands::Read { args } => commands::read::run(&args),
        Commands::Write { offset, data, file } => {
            commands::write::run(&offset, &data, &file, &options)
        }
        Commands::Memset {
            offset,
            length,
            byte,
            file,
        } => commands::memset::run(&offset, &length, &byte, &file, &options),
    }
}

fn main() -> ExitCode {
    let args = normalize_command(std::env::args_os().collect());
    let prog = usage::program_name(args.first().map(OsString::as_os_str));

    if is_help_invocation(&args) {
        print!("{}", usage::help(&prog));
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprint!("{}", usage::usage(&prog));
                return ExitCode::FAILURE;
            }
        },
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage) => {
            eprint!("{}", usage::usage(&prog));
            ExitCode::FAILURE
        }
        Err(CliError::Patch(e)) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
