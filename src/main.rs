use std::collections::HashMap;
use std::io::{self, Write};

use chrono::Utc;
use clap::Parser;
use tracing::debug;

use topread::cli::{Cli, Commands, OutputFormat};
use topread::config::Config;
use topread::domain::DisplayContext;
use topread::errors::TopReadResult;
use topread::i18n::StringTable;
use topread::logging;
use topread::render::{text, Rendered};
use topread::services::presentation::{reinvocation_url, select_context};
use topread::services::{parse_query, FetchService, LocaleResolver, RenderService};
use topread::sources::{HttpThumbnailLoader, WikipediaSource};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> TopReadResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    logging::init(&config.log_level);

    // Resolve the language once for the whole run
    let strings = StringTable::bundled();
    let query: HashMap<String, String> = cli.query.as_deref().map(parse_query).unwrap_or_default();
    let locale = LocaleResolver::new(&strings).resolve(cli.param.as_deref(), &query);
    debug!("Resolved language {}", locale);

    match cli.command {
        Commands::Link => cmd_link(&config, &locale),
        Commands::Table { max } => {
            let maximum = max.unwrap_or(config.maximum_articles);
            let context = select_context(false, None);
            cmd_render(&config, &strings, &locale, context, maximum, cli.format)
        }
        Commands::Widget { size } => {
            let context = select_context(true, Some(size));
            cmd_render(&config, &strings, &locale, context, config.maximum_articles, cli.format)
        }
    }
}

fn cmd_link(config: &Config, locale: &str) -> TopReadResult<()> {
    println!(
        "{}",
        reinvocation_url(&config.url_scheme, &config.script_name, locale)?
    );
    Ok(())
}

fn cmd_render(
    config: &Config,
    strings: &StringTable,
    locale: &str,
    context: DisplayContext,
    table_maximum: usize,
    format: OutputFormat,
) -> TopReadResult<()> {
    let fetch_service = FetchService::new(
        WikipediaSource::new(config.timeout_secs),
        &config.api_domain,
    );
    let service = RenderService::new(
        fetch_service,
        HttpThumbnailLoader::new(config.timeout_secs),
        config,
        strings,
    );

    let rendered = service.render(context, locale, Utc::now(), table_maximum)?;
    print_rendered(&rendered, format)
}

fn print_rendered(rendered: &Rendered, format: OutputFormat) -> TopReadResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => text::write_rendered(&mut out, rendered)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rendered)?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}
