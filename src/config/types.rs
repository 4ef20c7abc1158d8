// Configuration type definitions

use serde::Deserialize;

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_top_k() -> usize {
    8
}

/// Keystroke debounce before an autocomplete request
fn default_debounce_ms() -> u64 {
    250
}

/// Empty and single-character queries never trigger autocomplete
pub const MIN_SUGGEST_CHARS: usize = 2;

/// Shorter (trimmed) queries never trigger autocomplete
fn default_min_suggest_chars() -> usize {
    MIN_SUGGEST_CHARS
}

fn default_categories() -> Vec<String> {
    ["Murder", "Theft", "Fraud", "Assault", "Kidnapping", "Defamation"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Search service connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Search and autocomplete behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_min_suggest_chars")]
    pub min_suggest_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            top_k: default_top_k(),
            debounce_ms: default_debounce_ms(),
            min_suggest_chars: default_min_suggest_chars(),
        }
    }
}

/// UI configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Quick-pick queries offered on the home view
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            categories: default_categories(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Raises values that would break searching to their minimum.
    ///
    /// Returns the names of the keys that were changed.
    pub fn clamp_to_minimums(&mut self) -> Vec<&'static str> {
        let mut adjusted = Vec::new();
        if self.server.timeout_secs == 0 {
            self.server.timeout_secs = 1;
            adjusted.push("server.timeout_secs");
        }
        if self.search.top_k == 0 {
            self.search.top_k = 1;
            adjusted.push("search.top_k");
        }
        if self.search.min_suggest_chars < MIN_SUGGEST_CHARS {
            self.search.min_suggest_chars = MIN_SUGGEST_CHARS;
            adjusted.push("search.min_suggest_chars");
        }
        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.search.top_k, 8);
        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.min_suggest_chars, 2);
        assert_eq!(config.ui.categories.len(), 6);
        assert_eq!(config.ui.categories[0], "Murder");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.top_k, 8);
        assert_eq!(config.ui.categories, default_categories());
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let toml = r#"
[server]
[search]
[ui]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.timeout_secs, 10);
        assert_eq!(config.search.min_suggest_chars, 2);
        assert_eq!(config.ui.categories.len(), 6);
    }

    #[test]
    fn test_parse_custom_categories() {
        let toml = r#"
[ui]
categories = ["Cheating", "Forgery"]
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.ui.categories, vec!["Cheating", "Forgery"]);
    }

    #[test]
    fn test_negative_top_k_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[search]\ntop_k = -1\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_clamp_leaves_valid_config_alone() {
        let mut config = Config::default();
        assert!(config.clamp_to_minimums().is_empty());
        assert_eq!(config.search.top_k, 8);
    }

    #[test]
    fn test_clamp_raises_zero_values() {
        let mut config: Config = toml::from_str(
            "[server]\ntimeout_secs = 0\n[search]\ntop_k = 0\nmin_suggest_chars = 0\n",
        )
        .unwrap();

        let adjusted = config.clamp_to_minimums();

        assert_eq!(
            adjusted,
            vec!["server.timeout_secs", "search.top_k", "search.min_suggest_chars"]
        );
        assert_eq!(config.server.timeout_secs, 1);
        assert_eq!(config.search.top_k, 1);
        assert_eq!(config.search.min_suggest_chars, 2);
    }

    #[test]
    fn test_clamp_raises_single_char_suggestions() {
        let mut config: Config = toml::from_str("[search]\nmin_suggest_chars = 1\n").unwrap();

        assert_eq!(config.clamp_to_minimums(), vec!["search.min_suggest_chars"]);
        assert_eq!(config.search.min_suggest_chars, 2);
    }

    // Any subset of [search] keys parses, and missing keys keep their defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_partial_search_section(
            top_k in prop::option::of(1usize..50),
            debounce_ms in prop::option::of(0u64..2000),
        ) {
            let mut toml_content = String::from("[search]\n");
            if let Some(k) = top_k {
                toml_content.push_str(&format!("top_k = {}\n", k));
            }
            if let Some(ms) = debounce_ms {
                toml_content.push_str(&format!("debounce_ms = {}\n", ms));
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            prop_assert_eq!(config.search.top_k, top_k.unwrap_or(8));
            prop_assert_eq!(config.search.debounce_ms, debounce_ms.unwrap_or(250));
            prop_assert_eq!(config.search.min_suggest_chars, 2);
        }
    }
}
