// src/models/mod.rs

//! Domain models for the gazette search application.

mod config;
mod document;

use chrono::NaiveDate;

// Re-export all public types
pub use config::{
    Config, FeedConfig, HttpConfig, ProvincialConfig, RegionalConfig, SearchConfig,
};
pub use document::{DocumentRecord, Gazette};

/// Timezone anchoring "today" for the bulletin sources.
pub const LOCAL_TZ: chrono_tz::Tz = chrono_tz::Atlantic::Canary;

/// Timezone in which feed publication timestamps are interpreted.
pub const FEED_TZ: chrono_tz::Tz = chrono_tz::Europe::Madrid;

/// Explicit date context for a search run.
///
/// Adapters never read the system clock; the caller decides what "today"
/// means, which keeps candidate-date windows deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    /// The date treated as today when building candidate windows
    pub today: NaiveDate,
}

impl SearchContext {
    /// Context for an explicit date.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Context for the current date in the bulletin-local timezone.
    pub fn now_local() -> Self {
        Self {
            today: chrono::Utc::now().with_timezone(&LOCAL_TZ).date_naive(),
        }
    }
}
