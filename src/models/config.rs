//! Application configuration structures.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Gazette;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Keyword filtering and extraction settings
    #[serde(default)]
    pub search: SearchConfig,

    /// National feed source
    #[serde(default)]
    pub feed: FeedConfig,

    /// Regional issue-numbered PDF source
    #[serde(default)]
    pub regional: RegionalConfig,

    /// Provincial date-path PDF sources
    #[serde(default = "defaults::provincials")]
    pub provincial: Vec<ProvincialConfig>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.search.domain_keywords.is_empty() {
            return Err(AppError::validation("No domain keywords defined"));
        }
        if self.search.title_max_chars == 0 {
            return Err(AppError::validation("search.title_max_chars must be > 0"));
        }
        url::Url::parse(&self.feed.url)?;
        url::Url::parse(&self.regional.base_url)?;
        if self.regional.anchor_issue == 0 {
            return Err(AppError::validation("regional.anchor_issue must be > 0"));
        }
        for bop in &self.provincial {
            url::Url::parse(&bop.base_url)?;
            if bop.max_pages == 0 {
                return Err(AppError::validation(format!(
                    "provincial max_pages for {} must be > 0",
                    bop.gazette
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            search: SearchConfig::default(),
            feed: FeedConfig::default(),
            regional: RegionalConfig::default(),
            provincial: defaults::provincials(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Keyword filtering and block extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Built-in subject vocabulary applied before user keywords
    #[serde(default = "defaults::domain_keywords")]
    pub domain_keywords: Vec<String>,

    /// Minimum extracted-block length considered a real entry
    #[serde(default = "defaults::min_block_chars")]
    pub min_block_chars: usize,

    /// Maximum characters kept from a block when used as a title
    #[serde(default = "defaults::title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            domain_keywords: defaults::domain_keywords(),
            min_block_chars: defaults::min_block_chars(),
            title_max_chars: defaults::title_max_chars(),
        }
    }
}

/// National RSS feed source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Feed URL
    #[serde(default = "defaults::feed_url")]
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: defaults::feed_url(),
        }
    }
}

/// Regional issue-numbered PDF source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionalConfig {
    /// Base URL; issues live at `{base}/boc-s-{year}-{issue}.pdf`
    #[serde(default = "defaults::regional_base_url")]
    pub base_url: String,

    /// Known publication date with a known issue number
    #[serde(default = "defaults::anchor_date")]
    pub anchor_date: NaiveDate,

    /// Issue number published on `anchor_date`
    #[serde(default = "defaults::anchor_issue")]
    pub anchor_issue: u32,

    /// Candidate days probed before today
    #[serde(default = "defaults::regional_days_back")]
    pub days_back: u64,

    /// Candidate days probed after today
    #[serde(default = "defaults::regional_days_ahead")]
    pub days_ahead: u64,
}

impl Default for RegionalConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::regional_base_url(),
            anchor_date: defaults::anchor_date(),
            anchor_issue: defaults::anchor_issue(),
            days_back: defaults::regional_days_back(),
            days_ahead: defaults::regional_days_ahead(),
        }
    }
}

/// Provincial date-path PDF source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvincialConfig {
    /// Which gazette this source publishes
    pub gazette: Gazette,

    /// Base URL; issues live at `{base}/{year}/{d}-{m}-{yy}/{d}-{m}-{yy}.pdf`
    pub base_url: String,

    /// Summary pages scanned per issue
    pub max_pages: usize,

    /// Whether the day path component is zero-padded
    pub zero_pad_day: bool,

    /// Candidate days probed starting today (inclusive)
    #[serde(default = "defaults::provincial_days_ahead")]
    pub days_ahead: u64,
}

mod defaults {
    use chrono::NaiveDate;

    use super::{Gazette, ProvincialConfig};

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; boletines/1.0)".into()
    }
    pub fn timeout() -> u64 {
        10
    }

    // Search defaults
    pub fn domain_keywords() -> Vec<String> {
        [
            "Ley",
            "Ley Orgánica",
            "Decreto Ley",
            "Decreto Legislativo",
            "Texto Refundido",
            "Reglamento",
            "Ordenación",
            "Urbanismo",
            "Decreto-Ley",
            "Instrumento de planeamiento",
            "Planeamiento",
            "Plan Insular",
            "Plan General",
            "Plan Especial",
            "Plan Parcial",
            "Plan Modernización",
            "Modificación puntual del P.G.O.",
            "Proyecto de urbanización",
            "Ordenanza Provisional",
            "Ordenanza municipal de urbanización",
            "Urbanización",
            "Edificación",
            "Catálogo de protección",
            "Evaluación Ambiental",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
    pub fn min_block_chars() -> usize {
        30
    }
    pub fn title_max_chars() -> usize {
        200
    }

    // Source defaults
    pub fn feed_url() -> String {
        "https://www.boe.es/rss/boe.php".into()
    }
    pub fn regional_base_url() -> String {
        "https://sede.gobiernodecanarias.org/boc".into()
    }
    pub fn anchor_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid anchor date")
    }
    pub fn anchor_issue() -> u32 {
        1
    }
    pub fn regional_days_back() -> u64 {
        2
    }
    pub fn regional_days_ahead() -> u64 {
        2
    }
    pub fn provincial_days_ahead() -> u64 {
        4
    }

    pub fn provincials() -> Vec<ProvincialConfig> {
        vec![
            ProvincialConfig {
                gazette: Gazette::BopLasPalmas,
                base_url: "https://www.boplaspalmas.net/boletines".into(),
                max_pages: 3,
                zero_pad_day: true,
                days_ahead: provincial_days_ahead(),
            },
            ProvincialConfig {
                gazette: Gazette::BopSantaCruz,
                base_url: "https://www.bopsantacruzdetenerife.es/boletines".into(),
                max_pages: 4,
                zero_pad_day: false,
                days_ahead: provincial_days_ahead(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_keywords() {
        let mut config = Config::default();
        config.search.domain_keywords.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_feed_url() {
        let mut config = Config::default();
        config.feed.url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_provincial_pages() {
        let mut config = Config::default();
        config.provincial[0].max_pages = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_provincials_differ_in_padding_and_pages() {
        let config = Config::default();
        assert_eq!(config.provincial.len(), 2);
        assert!(config.provincial[0].zero_pad_day);
        assert!(!config.provincial[1].zero_pad_day);
        assert_ne!(config.provincial[0].max_pages, config.provincial[1].max_pages);
    }

    #[test]
    fn load_roundtrip_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let serialized = toml::to_string(&Config::default()).unwrap();
        std::fs::write(&path, serialized).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.regional.anchor_issue, 1);
        assert_eq!(loaded.http.timeout_secs, 10);
        assert_eq!(loaded.search.domain_keywords.len(), 24);
    }
}
