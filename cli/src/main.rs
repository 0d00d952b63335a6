//! CLI entrypoint for quotecycle
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quotecycle_application::{BrowseQuotesUseCase, CorpusLoader, SelectionEngine};
use quotecycle_domain::Quote;
use quotecycle_infrastructure::{ConfigLoader, FileConfig, RngSource, source_for_location};
use quotecycle_presentation::{BrowseRepl, Cli, Command, ConsoleFormatter, ShareLinks};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting quotecycle with corpus at {}", config.corpus.location);

    // === Dependency Injection ===
    let source = source_for_location(&config.corpus)?;
    let loader = Arc::new(CorpusLoader::new(source));
    let engine = Arc::new(SelectionEngine::new(Arc::clone(&loader), RngSource::from_os()));
    let browse = BrowseQuotesUseCase::new(Arc::clone(&engine));
    let links = ShareLinks::new(config.share.base_url.as_deref())
        .context("Invalid share.base_url")?;

    match cli.subcommand() {
        Command::Show { id, category } => {
            if category.is_some() {
                engine.set_category(category);
            }
            let shown = browse.open(id.as_deref()).await?;
            let active = engine.active_category();

            if cli.json {
                println!("{}", ConsoleFormatter::format_json(&shown.quote));
            } else if cli.quiet {
                println!("{}", ConsoleFormatter::format_plain(&shown.quote));
            } else {
                println!();
                print!("{}", ConsoleFormatter::format_shown(&shown, active.as_deref()));
                if let Some(link) = links.permalink(&shown.quote) {
                    println!("\n  {}", link);
                }
                println!();
            }
        }

        Command::Browse { id, category } => {
            if category.is_some() {
                engine.set_category(category);
            }
            let mut repl = BrowseRepl::new(browse).with_links(links);
            repl.run(id.as_deref()).await?;
        }

        Command::Categories => {
            let entries = browse.categories().await?;
            print!("{}", ConsoleFormatter::format_categories(&entries));
        }

        Command::Authors => {
            let counts = loader.author_counts().await?;
            print!("{}", ConsoleFormatter::format_counts(&counts));
        }

        Command::Get { id } => {
            let quote = find_quote(&loader, &id).await?;
            if cli.json {
                println!("{}", ConsoleFormatter::format_json(&quote));
            } else {
                print!("{}", ConsoleFormatter::format_quote(&quote));
            }
        }

        Command::Share { id } => {
            let quote = find_quote(&loader, &id).await?;
            println!("{}", ConsoleFormatter::format_plain(&quote));
            if let Some(link) = links.permalink(&quote) {
                println!("Link:  {}", link);
            }
            println!("Tweet: {}", links.tweet_intent(&quote)?);
            if let Some(pin) = links.pin_intent(&quote) {
                println!("Pin:   {}", pin);
            }
        }
    }

    Ok(())
}

/// Load configuration, apply CLI overrides and report validation issues
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(location) = &cli.corpus {
        config.corpus.location = location.clone();
    }

    let issues = config.validate();
    for issue in &issues {
        warn!("{}", issue);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration: {}", issue.message);
    }

    Ok(config)
}

async fn find_quote(loader: &CorpusLoader, id: &str) -> Result<Quote> {
    match loader.get_by_id(id).await? {
        Some(quote) => Ok(quote),
        None => bail!("Quote not found: {}", id),
    }
}
