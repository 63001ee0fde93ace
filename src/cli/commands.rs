use clap::{Parser, Subcommand};

use crate::domain::WidgetSize;

#[derive(Parser)]
#[command(name = "topread")]
#[command(about = "Today's most read Wikipedia articles as a widget or a table")]
#[command(version)]
pub struct Cli {
    /// Preset widget parameter, used as the language code (e.g. "fr")
    #[arg(long, global = true, env = "TOPREAD_PARAM")]
    pub param: Option<String>,

    /// Query string from a URL scheme run (e.g. "lang=fr"); its lang wins over --param
    #[arg(long, global = true)]
    pub query: Option<String>,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the full most-read table, as when run inside the app
    Table {
        /// Number of articles to list (defaults to TOPREAD_MAX_ARTICLES or 25)
        #[arg(short, long)]
        max: Option<usize>,
    },

    /// Build the home-screen widget for a widget size
    Widget {
        /// Widget size: small, medium or large
        #[arg(short, long, default_value = "large")]
        size: WidgetSize,
    },

    /// Print the URL that re-opens this script with the resolved language
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
