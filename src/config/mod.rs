use std::str::FromStr;

use serde::Serialize;

use crate::errors::{TopReadError, TopReadResult};

/// A colour with a light and a dark appearance, both as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Color {
    pub light: String,
    pub dark: String,
}

impl Color {
    pub fn dynamic(light: &str, dark: &str) -> Self {
        Self {
            light: light.to_string(),
            dark: dark.to_string(),
        }
    }

    pub fn fixed(hex: &str) -> Self {
        Self::dynamic(hex, hex)
    }
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground_primary: Color,
    pub foreground_secondary: Color,
    pub foreground_tertiary: Color,
    pub stats_background: Color,
    pub stats_foreground: Color,
    pub rank_colors: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::dynamic("#FFF", "#000"),
            foreground_primary: Color::dynamic("#000", "#FFF"),
            foreground_secondary: Color::dynamic("#8A898D", "#8E8D93"),
            foreground_tertiary: Color::dynamic("#EEE", "#222"),
            stats_background: Color::dynamic("#F8F7F9", "#1F1F1F"),
            stats_foreground: Color::fixed("#4DAA8C"),
            rank_colors: vec![
                Color::fixed("#3F64C7"),
                Color::fixed("#3E75B5"),
                Color::fixed("#4188A7"),
                Color::fixed("#479B99"),
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Articles listed in table mode. The feed itself returns about 50.
    pub maximum_articles: usize,
    pub fullscreen: bool,
    pub script_name: String,
    pub url_scheme: String,
    pub api_domain: String,
    pub timeout_secs: u64,
    pub log_level: String,
    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maximum_articles: 25,
            fullscreen: false,
            script_name: "Wikipedia Top Read".to_string(),
            url_scheme: "scriptable".to_string(),
            api_domain: "wikipedia.org".to_string(),
            timeout_secs: 30,
            log_level: "info".to_string(),
            theme: Theme::default(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TopReadResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup, applying defaults
    /// for anything unset.
    pub fn from_lookup<F>(lookup: F) -> TopReadResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            maximum_articles: parse_var(&lookup, "TOPREAD_MAX_ARTICLES", defaults.maximum_articles)?,
            fullscreen: parse_var(&lookup, "TOPREAD_FULLSCREEN", defaults.fullscreen)?,
            script_name: lookup("TOPREAD_SCRIPT_NAME").unwrap_or(defaults.script_name),
            url_scheme: lookup("TOPREAD_URL_SCHEME").unwrap_or(defaults.url_scheme),
            api_domain: lookup("TOPREAD_API_DOMAIN").unwrap_or(defaults.api_domain),
            timeout_secs: parse_var(&lookup, "TOPREAD_TIMEOUT_SECS", defaults.timeout_secs)?,
            log_level: lookup("TOPREAD_LOG").unwrap_or(defaults.log_level),
            theme: defaults.theme,
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> TopReadResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| TopReadError::Config(format!("{} has an invalid value: {}", name, raw))),
        None => Ok(default),
    }
}
