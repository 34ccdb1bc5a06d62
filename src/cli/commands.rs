use crate::config::{self, Config};
use crate::core::{generate, GenerationReport};
use crate::error::GslocResult;
use crate::source::{GoogleSheetsClient, SheetSource};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Execute the gen-loc command against Google Sheets
pub fn gen_loc(config_path: PathBuf, verbose: bool) -> GslocResult<()> {
    let config = Config::load(&config_path)?;
    let client = GoogleSheetsClient::new(config.service_account_json.clone())?;
    gen_loc_with_source(&config_path, &config, &client, verbose).map(|_| ())
}

/// Execute gen-loc with any sheet source (used directly by tests)
pub fn gen_loc_with_source(
    config_path: &Path,
    config: &Config,
    source: &dyn SheetSource,
    verbose: bool,
) -> GslocResult<GenerationReport> {
    println!("{}", "🌐 gsloc - Generating localization files".bold().green());
    println!("   Config: {}", config_path.display());
    println!(
        "   Sheet:  {} ({})",
        config.sheet_name.bright_blue(),
        config.spreadsheet_id
    );
    println!("   Output: {}\n", config.output_dir.display());

    if verbose {
        println!("{}", "📥 Fetching sheet values...".cyan());
    }

    let report = generate(config, source)?;

    if verbose {
        println!(
            "   Fetched {} rows, writing {} output\n",
            report.rows_fetched,
            report.format.to_string().bold()
        );
    }

    for locale in &report.locales {
        if verbose {
            println!(
                "   📄 {} → {} ({} keys)",
                locale.locale.bright_blue().bold(),
                locale.path.display(),
                locale.entries
            );
        } else {
            println!("   📄 {}", locale.locale.bright_blue().bold());
        }
    }
    println!();
    println!(
        "{}",
        "✅ Localization files generated successfully!".bold().green()
    );

    Ok(report)
}

/// Execute the gen-config-example command
pub fn gen_config_example(output: PathBuf, force: bool) -> GslocResult<()> {
    config::write_example(&output, force)?;

    println!("{}", "✅ Config file generated successfully".bold().green());
    println!("   File: {}", output.display());
    println!(
        "   Edit {} and {} before running {}",
        "spreadsheet_id".yellow(),
        "service_account_json".yellow(),
        "gsloc gen-loc".bold()
    );

    Ok(())
}
