// src/services/provincial.rs

//! Provincial gazette PDF adapters.
//!
//! Provincial bulletins live under date-path URLs and open with a summary
//! section listing every entry under a six-digit code. The adapter scans
//! the first few pages of the first fetchable issue and keeps the summary
//! blocks that touch the domain vocabulary.
//!
//! Unlike the regional adapter, probing stops at the first candidate whose
//! PDF fetches and parses, even when no block matches.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::Result;
use crate::models::{Config, DocumentRecord, ProvincialConfig, SearchConfig, SearchContext};
use crate::utils::{FetchBytes, PdfExtract, segment, text};

/// Placeholder summary for records taken from a bulletin summary section.
const SUMMARY_NOTE: &str = "(Sumario completo)";

/// Adapter for one date-path provincial PDF source.
pub struct ProvincialAdapter {
    config: ProvincialConfig,
    search: SearchConfig,
    domain_keywords: Vec<String>,
    fetcher: Arc<dyn FetchBytes>,
    pdf: Arc<dyn PdfExtract>,
}

impl ProvincialAdapter {
    /// Create a provincial adapter for one configured source.
    pub fn new(
        config: &Config,
        source: ProvincialConfig,
        fetcher: Arc<dyn FetchBytes>,
        pdf: Arc<dyn PdfExtract>,
    ) -> Self {
        Self {
            config: source,
            search: config.search.clone(),
            domain_keywords: config
                .search
                .domain_keywords
                .iter()
                .map(|kw| text::normalize(kw))
                .collect(),
            fetcher,
            pdf,
        }
    }

    /// Probe today and the following days, returning the matching summary
    /// blocks of the first issue that fetches and parses.
    pub async fn fetch_documents(&self, ctx: &SearchContext) -> Vec<DocumentRecord> {
        for offset in 0..=self.config.days_ahead as i64 {
            let candidate = ctx.today + Duration::days(offset);
            match self.fetch_candidate(candidate).await {
                Ok(documents) => return documents,
                Err(error) => {
                    log::warn!(
                        "{} candidate {} skipped: {}",
                        self.config.gazette,
                        candidate,
                        error
                    );
                }
            }
        }
        Vec::new()
    }

    /// Build the issue URL for a candidate date. The day component is
    /// zero-padded only for sources that publish padded paths; the month is
    /// never padded and the year is two-digit.
    fn issue_url(&self, date: NaiveDate) -> String {
        let day = if self.config.zero_pad_day {
            format!("{:02}", date.day())
        } else {
            date.day().to_string()
        };
        let segment = format!("{}-{}-{:02}", day, date.month(), date.year() % 100);
        format!("{}/{}/{}/{}.pdf", self.config.base_url, date.year(), segment, segment)
    }

    /// Fetch one candidate issue and filter its summary blocks.
    async fn fetch_candidate(&self, candidate: NaiveDate) -> Result<Vec<DocumentRecord>> {
        let url = self.issue_url(candidate);
        let bytes = self.fetcher.fetch(&url).await?;

        let page_count = self.pdf.page_count(&bytes)?;
        let pages = page_count.min(self.config.max_pages);

        // One whitespace-collapsed line per summary page.
        let mut lines = Vec::with_capacity(pages);
        for page_index in 0..pages {
            if let Some(page_text) = self.pdf.extract_page_text(&bytes, page_index)? {
                lines.push(page_text.split_whitespace().collect::<Vec<_>>().join(" "));
            }
        }

        let blocks = segment::segment_blocks(lines.iter().map(String::as_str));
        let mut documents = Vec::new();
        for block in blocks {
            if !text::contains_any(&block, &self.domain_keywords) {
                continue;
            }
            documents.push(DocumentRecord {
                gazette: self.config.gazette,
                title: text::truncate_chars(&block, self.search.title_max_chars).to_uppercase(),
                url: url.clone(),
                published_date: candidate.format("%Y-%m-%d").to_string(),
                summary: SUMMARY_NOTE.to_string(),
            });
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gazette;
    use crate::utils::{HttpFetcher, LopdfExtract};

    fn adapter_for(zero_pad_day: bool) -> ProvincialAdapter {
        let config = Config::default();
        let source = ProvincialConfig {
            gazette: Gazette::BopLasPalmas,
            base_url: "https://example.net/boletines".to_string(),
            max_pages: 3,
            zero_pad_day,
            days_ahead: 4,
        };
        let fetcher = Arc::new(HttpFetcher::new(&config.http).unwrap());
        ProvincialAdapter::new(&config, source, fetcher, Arc::new(LopdfExtract))
    }

    #[test]
    fn test_issue_url_zero_padded() {
        let adapter = adapter_for(true);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(
            adapter.issue_url(date),
            "https://example.net/boletines/2025/05-3-25/05-3-25.pdf"
        );
    }

    #[test]
    fn test_issue_url_unpadded() {
        let adapter = adapter_for(false);
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(
            adapter.issue_url(date),
            "https://example.net/boletines/2025/5-3-25/5-3-25.pdf"
        );
    }

    #[test]
    fn test_issue_url_two_digit_year() {
        let adapter = adapter_for(true);
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(
            adapter.issue_url(date),
            "https://example.net/boletines/2026/31-12-26/31-12-26.pdf"
        );
    }
}
