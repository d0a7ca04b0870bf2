use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::listing::CATEGORY_ALL;

/// Root configuration container.
///
/// The category vocabulary lives here, not in the listing store: the store
/// accepts any category string, and the view renders tabs from this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered category vocabulary shown as filter tabs.
    /// The first entry is the "no filtering" sentinel.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// UI tick rate in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Catalog JSON file to load instead of the built-in seed.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            tick_rate_ms: default_tick_rate_ms(),
            catalog_path: None,
        }
    }
}

fn default_categories() -> Vec<String> {
    [
        CATEGORY_ALL,
        "Ramen/Tsukemen",
        "Tonkatsu/Kushikatsu",
        "Soba/Udon",
        "Okonomiyaki/Takoyaki",
        "Sukiyaki/Shabu Shabu",
        "Tempura",
        "Eel",
        "Yakitori/Skewer",
        "Sushi & Seafood",
    ]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn default_tick_rate_ms() -> u64 {
    250
}
