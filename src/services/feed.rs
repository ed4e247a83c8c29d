// src/services/feed.rs

//! National gazette feed adapter.
//!
//! Reads the BOE RSS feed and keeps today's entries whose text touches the
//! domain vocabulary.

use std::sync::Arc;

use chrono::DateTime;
use rss::Channel;

use crate::error::{AppError, Result};
use crate::models::{Config, DocumentRecord, FeedConfig, Gazette, FEED_TZ, SearchContext};
use crate::utils::FetchBytes;
use crate::utils::text;

/// Adapter for the national RSS feed source.
pub struct FeedAdapter {
    config: FeedConfig,
    domain_keywords: Vec<String>,
    fetcher: Arc<dyn FetchBytes>,
}

impl FeedAdapter {
    /// Create a feed adapter; domain keywords are normalized once here.
    pub fn new(config: &Config, fetcher: Arc<dyn FetchBytes>) -> Self {
        Self {
            config: config.feed.clone(),
            domain_keywords: config
                .search
                .domain_keywords
                .iter()
                .map(|kw| text::normalize(kw))
                .collect(),
            fetcher,
        }
    }

    /// Fetch today's domain-relevant feed entries.
    ///
    /// Failures are logged and mapped to an empty list; one broken source
    /// never aborts the overall search.
    pub async fn fetch_documents(&self, ctx: &SearchContext) -> Vec<DocumentRecord> {
        match self.fetch_inner(ctx).await {
            Ok(documents) => documents,
            Err(error) => {
                log::warn!("BOE feed unavailable: {}", error);
                Vec::new()
            }
        }
    }

    async fn fetch_inner(&self, ctx: &SearchContext) -> Result<Vec<DocumentRecord>> {
        let bytes = self.fetcher.fetch(&self.config.url).await?;
        let channel = Channel::read_from(&bytes[..]).map_err(AppError::feed)?;

        let mut documents = Vec::new();
        for item in channel.items() {
            let Some(published) = item.pub_date().and_then(parse_feed_date) else {
                log::debug!("Feed entry without a parseable pubDate skipped");
                continue;
            };
            if published != ctx.today {
                continue;
            }

            let Some(link) = item.link() else {
                continue;
            };
            let title = item.title().unwrap_or_default();
            let description = item.description().unwrap_or_default();

            let haystack = format!("{} {}", title, description);
            if !text::contains_any(&haystack, &self.domain_keywords) {
                continue;
            }

            documents.push(DocumentRecord {
                gazette: Gazette::Boe,
                title: title.to_string(),
                url: link.to_string(),
                published_date: published.format("%Y-%m-%d").to_string(),
                summary: description.to_string(),
            });
        }
        Ok(documents)
    }
}

/// Parse an RFC 2822 pubDate and take its calendar date in the feed's
/// home timezone.
fn parse_feed_date(raw: &str) -> Option<chrono::NaiveDate> {
    DateTime::parse_from_rfc2822(raw)
        .ok()
        .map(|dt| dt.with_timezone(&FEED_TZ).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_feed_date_converts_timezone() {
        // 23:30 UTC on the 9th is already the 10th in Madrid (+01:00).
        let date = parse_feed_date("Sun, 09 Mar 2025 23:30:00 +0000").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_parse_feed_date_rejects_garbage() {
        assert!(parse_feed_date("not a date").is_none());
        assert!(parse_feed_date("").is_none());
    }
}
