use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use league_ranker::config::{self, ConfigValues};
use league_ranker::input::{STDIN_SOURCE, read_input};
use league_ranker::{compute_standings, logging, render};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Calculate and print the ranking table for a league.
#[derive(Debug, Parser)]
#[command(name = "league_ranker", version)]
struct Cli {
    /// Input file with one match result per line, or '-' for stdin
    #[arg(default_value = STDIN_SOURCE)]
    input: String,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable strict parsing. Input values will not be normalised
    #[arg(short, long)]
    strict: bool,

    /// Print parsing statistics at completion
    #[arg(short, long)]
    verbose: bool,

    /// Logger level (trace, debug, info, warn, error, off)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Points awarded for a win
    #[arg(long)]
    points_win: Option<String>,

    /// Points awarded for a loss
    #[arg(long)]
    points_loss: Option<String>,

    /// Points awarded for a draw
    #[arg(long)]
    points_draw: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Cli {
    /// Only flags the user actually passed, so lower layers still apply.
    fn config_values(&self) -> ConfigValues {
        let mut out = ConfigValues::new();
        let mut put = |key: &str, val: Option<&String>| {
            if let Some(val) = val {
                out.insert(key.to_string(), val.clone());
            }
        };
        put(config::KEY_CONFIG_PATH, self.config.as_ref());
        put(config::KEY_LOG_LEVEL, self.log_level.as_ref());
        put(config::KEY_POINTS_WIN, self.points_win.as_ref());
        put(config::KEY_POINTS_LOSS, self.points_loss.as_ref());
        put(config::KEY_POINTS_DRAW, self.points_draw.as_ref());
        if self.strict {
            out.insert(config::KEY_STRICT_PARSE.to_string(), "true".to_string());
        }
        if self.verbose {
            out.insert(config::KEY_VERBOSE.to_string(), "true".to_string());
        }
        out
    }
}

fn main() -> ExitCode {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(cli.config_values()).context("invalid configuration")?;
    logging::init(config.log_level);
    match &config.config_path {
        Some(path) => info!("read config from {}", path.display()),
        None => info!("no config file found, using defaults"),
    }

    if config.strict_parse {
        eprintln!("Note: Strict parsing is enabled.");
    }

    let text = read_input(&cli.input)?;
    let table = compute_standings(&text, &config);
    info!(
        "records read: {}, parsed: {}, rejected: {}",
        table.stats.read, table.stats.parsed, table.stats.error
    );

    match cli.format {
        OutputFormat::Text => {
            for line in render::standings_lines(&table.standings) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let json = render::standings_json(&table.standings).context("serialize standings")?;
            println!("{json}");
        }
    }

    if config.verbose {
        println!();
        println!("Statistics:");
        println!("{}", render::stats_table(&table.stats));
    }

    Ok(())
}
