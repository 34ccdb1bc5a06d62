use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use gsloc::cli;
use gsloc::config::DEFAULT_CONFIG_PATH;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gsloc")]
#[command(about = "gsloc is a tool to generate localization files from google spreadsheets")]
#[command(long_about = "gsloc - localization files from Google Sheets

Reads one spreadsheet tab and writes <output_dir>/<locale>.json for every
locale column listed in the config file.

COMMANDS:
  gen-loc             - Generate localization files
  gen-config-example  - Write an example conf.yaml

EXAMPLES:
  gsloc gen-config-example          # Write ./conf.yaml to edit
  gsloc gen-loc                     # Use ./conf.yaml
  gsloc gen-loc -c i18n/conf.yaml -v

Logging: set RUST_LOG (e.g. RUST_LOG=gsloc=debug) for detailed traces.

Docs: https://github.com/atcdot/gsloc")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Generate localization files from google spreadsheets.

Fetches all values of `sheet_name` once, then for every entry in `locales`
pairs `keys_column` with the locale's column and writes one JSON file.

OUTPUT FORMATS:
  is_flat: false (default)   {\"menu\": {\"open\": \"Open\"}}
  is_flat: true              {\"menu.open\": \"Open\"}

Rows shorter than the key/locale columns and rows with an empty
translation are skipped. Every run fully regenerates the files.")]
    /// Generate localization files from google spreadsheets
    GenLoc {
        /// Path to the YAML config file
        #[arg(short, long, env = "GSLOC_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate an example config file
    GenConfigExample {
        /// Where to write the example config
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gsloc=debug" } else { "gsloc=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> anyhow::Result<()> {
    match args.command {
        Commands::GenLoc { config, verbose } => {
            init_tracing(verbose);
            cli::gen_loc(config, verbose).context("Can't generate localization files")
        }

        Commands::GenConfigExample { output, force } => {
            init_tracing(false);
            cli::gen_config_example(output, force).context("Can't generate config file")
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
