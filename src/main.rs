use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use tmdb_cli::api::client::TmdbClient;
use tmdb_cli::config::config::Config;
use tmdb_cli::data::exporter;
use tmdb_cli::data::report::MovieReport;
use tmdb_cli::viz::charts;

mod table_display;

fn print_help() {
    println!("{}", "TMDB CLI - popular and rated movie charts".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  tmdb-cli [OPTIONS]");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {}    - Initialize configuration with wizard",
        "--init-config".green()
    );
    println!(
        "  {} - Generate config file with defaults",
        "--generate-config".green()
    );
    println!(
        "  {}   - How many popular movies to fetch",
        "--quantity <N>".green()
    );
    println!(
        "  {}     - Directory for charts and exports",
        "--output <DIR>".green()
    );
    println!("  {}         - Also export both lists to CSV", "--export".green());
    println!("  {}           - Show this help", "--help".green());
    println!();
    println!("{}", "Credentials:".yellow());
    println!("  Set TMDB_AUTH_TOKEN and TMDB_ACCOUNT_ID, or store them in the");
    println!("  config file (see --generate-config).");
    println!();
}

fn main() {
    tmdb_cli::utils::logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.contains(&"--help".to_string()) {
        print_help();
        return;
    }

    // Check for config initialization
    if args.contains(&"--init-config".to_string()) {
        match Config::init_wizard() {
            Ok(_) => {
                println!("\nConfiguration initialized successfully!");
                return;
            }
            Err(e) => {
                eprintln!("Error initializing config: {}", e);
                std::process::exit(1);
            }
        }
    }

    if args.contains(&"--generate-config".to_string()) {
        match Config::get_config_path() {
            Ok(path) => {
                let config_content = Config::create_default_with_comments();
                if let Some(parent) = path.parent() {
                    if let Err(e) = std::fs::create_dir_all(parent) {
                        eprintln!("Error creating config directory: {}", e);
                        std::process::exit(1);
                    }
                }
                if let Err(e) = std::fs::write(&path, config_content) {
                    eprintln!("Error writing config file: {}", e);
                    std::process::exit(1);
                }
                println!("Configuration file created at: {:?}", path);
                println!("Edit this file to add your TMDB credentials.");
                return;
            }
            Err(e) => {
                eprintln!("Error determining config path: {}", e);
                std::process::exit(1);
            }
        }
    }

    let quantity = match flag_value(&args, "--quantity") {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("{}", format!("Invalid --quantity value: {}", raw).red());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let output_dir = flag_value(&args, "--output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let export = args.contains(&"--export".to_string());

    if let Err(e) = run(quantity, &output_dir, export) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
        .map(|value| value.as_str())
}

fn run(quantity: Option<usize>, output_dir: &Path, export: bool) -> Result<()> {
    let config = Config::load().context("loading configuration")?;
    config.api.validate()?;

    let client = TmdbClient::new(
        &config.api.base_url,
        &config.api.auth_token,
        &config.api.account_id,
    );
    println!("{}", format!("Fetching from {}", config.api.base_url).cyan());

    let rated = client.rated_movies()?;
    let popular = client.popular_movies(quantity.unwrap_or(config.fetch.popular_quantity))?;

    let report = MovieReport::new(popular, rated);
    let average = report.average_user_rating();

    table_display::display_rated(&report.rated, average);
    table_display::display_popular(&report.popular);

    let size = (config.charts.width, config.charts.height);
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    let rated_path = output_dir.join("rated_movies.svg");
    charts::rated_movies_chart(&report.rated, average, &rated_path, size)?;
    println!("{}", format!("Chart written to {}", rated_path.display()).green());

    let popular_path = output_dir.join("popular_movies.svg");
    charts::popular_movies_chart(&report.popular, &popular_path, size)?;
    println!(
        "{}",
        format!("Chart written to {}", popular_path.display()).green()
    );

    if export {
        println!("{}", exporter::export_rated_csv(&report.rated, output_dir)?.green());
        println!(
            "{}",
            exporter::export_popular_csv(&report.popular, output_dir)?.green()
        );
    }

    Ok(())
}
