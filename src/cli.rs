//! Command-line front end for one-shot predictions.

use crate::config::Config;
use crate::error::Result;
use crate::predictor::{Predictor, ZoxidePredictor};
use crate::search::{FormatStyle, LastComponentMode, Strategy, Suggestion, TokenizerMode};
use crate::table::{FileSource, ScoreSource, ScoreTable, SharedTable, ZoxideSource};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(name = "zoxide-predictor")]
#[command(about = "Suggest frecent directories for a partially typed cd command", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/zoxide-predictor/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Read `<score> <path>` lines from this file instead of running zoxide
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// Print suggestions as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, value_enum)]
    pub tokenizer: Option<TokenizerMode>,

    #[arg(long, global = true, value_enum)]
    pub last_component: Option<LastComponentMode>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatStyle>,

    #[arg(long, global = true, value_enum)]
    pub strategy: Option<Strategy>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest completions for a full command line, e.g. "cd proj ba"
    Suggest { line: String },
    /// Print the single most frecent directory
    Best,
    /// Print the most frecent directories
    Top {
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    /// Overlay command-line flags on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer = tokenizer;
        }
        if let Some(last_component) = self.last_component {
            config.last_component = last_component;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Commands::Top { limit: Some(limit) } = self.command {
            config.limit = limit;
        }
    }
}

/// Execute one CLI invocation, writing suggestions to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    cli.apply(&mut config);

    let table = match &cli.table {
        Some(path) => load_table(FileSource::new(path)).await,
        None => load_table(ZoxideSource::new(config.zoxide_bin.clone())).await,
    };
    let predictor = ZoxidePredictor::new(Arc::new(SharedTable::new(table)), &config);

    let suggestions = match &cli.command {
        Commands::Suggest { line } => predictor
            .suggest(line, &CancellationToken::new())
            .unwrap_or_default(),
        Commands::Best => predictor.suggest_best().into_iter().collect(),
        Commands::Top { .. } => predictor.suggest_top(),
    };

    print_suggestions(&suggestions, cli.json)
}

/// One-shot load; a failing source behaves like an empty table.
async fn load_table<S: ScoreSource>(source: S) -> ScoreTable {
    match source.load().await {
        Ok(table) => table,
        Err(e) => {
            tracing::warn!("Could not load scores from {}: {}", source.describe(), e);
            ScoreTable::default()
        }
    }
}

fn print_suggestions(suggestions: &[Suggestion], json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, suggestions)
            .context("Failed to serialize suggestions")?;
        writeln!(stdout)?;
    } else {
        for suggestion in suggestions {
            writeln!(stdout, "{}", suggestion.text)?;
        }
    }
    Ok(())
}
