//! lexicon - Latin dictionary lookups from the command line

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use latin_lexicon::{DefaultLexicon, LexiconConfig, LookupOutcome, Rendering};

#[derive(Debug, Parser)]
#[command(name = "lexicon")]
#[command(version, about = "Look up the Latin section of Wiktionary entries", long_about = None)]
#[command(after_help = "EXAMPLES:
    lexicon lookup rosa           Print the Latin entry for 'rosa'
    lexicon appendix Glossary     Print an appendix page
    lexicon favourites add rosa   Remember an entry")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render subsection headings as toggles
    #[arg(long, global = true)]
    collapsible: bool,

    /// Heading level that starts a subsection
    #[arg(long, global = true, value_name = "N")]
    subsection_level: Option<u8>,

    /// Where history, favourites and the last query are kept
    #[arg(long, global = true, value_name = "FILE")]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a word and print its Latin section
    Lookup { word: String },

    /// Print an appendix page
    Appendix { name: String },

    /// Repeat the last lookup
    Restore,

    /// Show or edit search history
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Show or edit favourites
    Favourites {
        #[command(subcommand)]
        action: Option<FavouritesAction>,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    List,
    Remove { word: String },
    Clear,
}

#[derive(Debug, Subcommand)]
enum FavouritesAction {
    List,
    Add { word: String },
    Remove { word: String },
    Clear,
}

impl Cli {
    fn load_config(&self) -> Result<LexiconConfig> {
        let base = match &self.config {
            Some(path) => LexiconConfig::from_json_file(path)?,
            None => LexiconConfig::default(),
        };

        let mut builder = base.into_builder();
        if self.collapsible {
            builder = builder.collapsible_headings(true);
        }
        if let Some(level) = self.subsection_level {
            builder = builder.subsection_heading_level(level);
        }
        if let Some(path) = &self.state {
            builder = builder.state_path(path);
        }
        builder.build()
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = cli.load_config()?;
    let lexicon = DefaultLexicon::from_config(&config)?;
    let target_label = &config.pipeline().target_label;

    match cli.command {
        Command::Lookup { word } => show_lookup(&lexicon, lexicon.search(&word).await),
        Command::Restore => show_lookup(&lexicon, lexicon.restore().await),
        Command::Appendix { name } => {
            let outcome = lexicon.open_appendix(&name).await?;
            println!("{}", outcome.rendering(target_label).to_html());
            Ok(exit_code(&outcome))
        }
        Command::History { action } => {
            let history = lexicon.history();
            match action.unwrap_or(HistoryAction::List) {
                HistoryAction::List => print_lines(&history.list()?),
                HistoryAction::Remove { word } => {
                    if !history.remove(&word)? {
                        eprintln!("'{word}' is not in history");
                    }
                }
                HistoryAction::Clear => history.clear()?,
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Favourites { action } => {
            let favourites = lexicon.favourites();
            match action.unwrap_or(FavouritesAction::List) {
                FavouritesAction::List => print_lines(&favourites.list()?),
                FavouritesAction::Add { word } => {
                    favourites.add(word.trim())?;
                }
                FavouritesAction::Remove { word } => {
                    if !favourites.remove(&word)? {
                        eprintln!("'{word}' is not a favourite");
                    }
                }
                FavouritesAction::Clear => favourites.clear()?,
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print whatever the output region ended up showing
///
/// Failed requests were already rendered into the region, so they print
/// like any other result but still exit with failure.
fn show_lookup(
    lexicon: &DefaultLexicon,
    result: latin_lexicon::LexiconResult<LookupOutcome>,
) -> Result<ExitCode> {
    match result {
        Ok(outcome) => {
            println!("{}", lexicon.output().current_html());
            Ok(exit_code(&outcome))
        }
        Err(e) if matches!(lexicon.output().current(), Rendering::RequestError { .. }) => {
            println!("{}", lexicon.output().current_html());
            tracing::warn!("Lookup failed: {e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

fn exit_code(outcome: &LookupOutcome) -> ExitCode {
    match outcome {
        LookupOutcome::NotFound { .. } => ExitCode::from(2),
        LookupOutcome::Found(_) | LookupOutcome::Idle => ExitCode::SUCCESS,
    }
}

fn print_lines(entries: &[String]) {
    for entry in entries {
        println!("{entry}");
    }
}
