use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::options::StripOptions;

/// Defaults for the command-line binary, loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live there.
/// Command-line flags override whatever is set here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default replacement string (EMOJI_STRIP_REPLACE_WITH)
    pub replace_with: Option<String>,
    /// Comma-separated literals to keep (EMOJI_STRIP_PRESERVE)
    pub preserve: Vec<String>,
    /// Turn emoticon stripping on or off (EMOJI_STRIP_EMOTICONS=true|false)
    pub remove_emoticons: Option<bool>,
    /// JSON options file applied before env and flags (EMOJI_STRIP_OPTIONS)
    pub options_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let preserve = lookup("EMOJI_STRIP_PRESERVE")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            replace_with: lookup("EMOJI_STRIP_REPLACE_WITH"),
            preserve,
            remove_emoticons: lookup("EMOJI_STRIP_EMOTICONS").as_deref().and_then(parse_flag),
            options_path: lookup("EMOJI_STRIP_OPTIONS")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Resolve the options this configuration describes: the JSON file
    /// (`file` overrides `options_path`) first, then the env overrides.
    pub fn resolve(&self, file: Option<&PathBuf>) -> Result<StripOptions> {
        let mut options = match file.or(self.options_path.as_ref()) {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read options file {}", path.display()))?;
                let value: serde_json::Value = serde_json::from_str(&raw)
                    .with_context(|| format!("Options file {} is not valid JSON", path.display()))?;
                StripOptions::from_value(&value)
            }
            None => StripOptions::default(),
        };

        if let Some(remove) = self.remove_emoticons {
            options.remove_emoticons = remove;
        }
        if let Some(replacement) = &self.replace_with {
            options.replace_with = replacement.clone();
        }
        options = options.preserve(self.preserve.iter().cloned());

        Ok(options)
    }
}

/// Unrecognised values leave the setting unset.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
