//! route-matcher CLI.
//!
//! Loads route patterns from a TOML config and/or `--pattern` flags, then
//! matches a URL against them, prints the parsed table, or validates it.
//!
//! ```text
//! route-matcher --config routes.toml match https://example.com/blog/1
//! route-matcher -p 'example.com/blog/*' -p '*.example.com' --sort parse
//! route-matcher --config routes.toml validate
//! ```

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use route_matcher::config::{loader, validate_config, MatcherConfig, RouteConfig};
use route_matcher::observability::logging;
use route_matcher::{RouteTable, Url};

#[derive(Parser)]
#[command(name = "route-matcher")]
#[command(about = "Match URLs against worker-route style patterns", long_about = None)]
struct Cli {
    /// TOML file with `[[routes]]` entries.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extra pattern, appended after configured routes. May be repeated.
    #[arg(short = 'p', long = "pattern")]
    patterns: Vec<String>,

    /// Order routes by descending specificity.
    #[arg(long)]
    sort: bool,

    /// Log level, overrides the configured one.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the first route matching URL
    Match { url: String },
    /// Print the parsed route table
    Parse,
    /// Report every invalid pattern
    Validate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::read_config(path)?,
        None => MatcherConfig::default(),
    };
    config.routes.extend(cli.patterns.iter().map(|pattern| RouteConfig {
        pattern: pattern.clone(),
        target: None,
    }));
    if cli.sort {
        config.sort_by_specificity = true;
    }

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    logging::init(&level);

    match cli.command {
        Commands::Validate => {
            if let Err(errors) = validate_config(&config) {
                for error in &errors {
                    println!("{}", error);
                }
                process::exit(1);
            }
            println!("{} routes OK", config.routes.len());
        }
        Commands::Parse => {
            let table = RouteTable::from_config(&config)?;
            println!("{}", serde_json::to_string_pretty(table.routes())?);
        }
        Commands::Match { url } => {
            let url = Url::parse(&url)?;
            let table = RouteTable::from_config(&config)?;
            if !table.matches(&url)? {
                println!("no match");
                process::exit(1);
            }
            if let Some(route) = table.find(&url) {
                println!("{}", serde_json::to_string_pretty(route)?);
            }
        }
    }

    Ok(())
}
