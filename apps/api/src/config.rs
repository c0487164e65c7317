use anyhow::{Context, Result};
use serde::Serialize;

pub const DEFAULT_TAILWIND_SCRIPT_URL: &str = "https://cdn.tailwindcss.com";
pub const DEFAULT_MATERIAL_ICONS_URL: &str =
    "https://fonts.googleapis.com/icon?family=Material+Icons";
pub const DEFAULT_MATERIAL_SYMBOLS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@20..48,100..700,0..1,-50..200";
pub const DEFAULT_WEB_FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;600;800&family=JetBrains+Mono:wght@400;700&family=Press+Start+2P&family=Space+Grotesk:wght@400;700&display=swap";

/// Application configuration loaded from environment variables.
/// Everything has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub default_template_id: String,
    pub assets: AssetUrls,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_template_id: env_or_default(
                |key| std::env::var(key).ok(),
                "DEFAULT_TEMPLATE_ID",
                "neo-brutalism",
            ),
            assets: AssetUrls::from_env(),
        })
    }
}

/// Stylesheet and script URLs linked from exported documents.
///
/// Each one can be redirected to a self-hosted mirror through the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUrls {
    pub tailwind_script: String,
    pub material_icons: String,
    pub material_symbols: String,
    pub web_fonts: String,
}

impl AssetUrls {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves every URL through `lookup`, falling back to the public CDN defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        AssetUrls {
            tailwind_script: env_or_default(
                &lookup,
                "TAILWIND_SCRIPT_URL",
                DEFAULT_TAILWIND_SCRIPT_URL,
            ),
            material_icons: env_or_default(&lookup, "MATERIAL_ICONS_URL", DEFAULT_MATERIAL_ICONS_URL),
            material_symbols: env_or_default(
                &lookup,
                "MATERIAL_SYMBOLS_URL",
                DEFAULT_MATERIAL_SYMBOLS_URL,
            ),
            web_fonts: env_or_default(&lookup, "WEB_FONTS_URL", DEFAULT_WEB_FONTS_URL),
        }
    }
}

impl Default for AssetUrls {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn env_or_default<F>(lookup: F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
