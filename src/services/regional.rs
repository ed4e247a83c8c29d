// src/services/regional.rs

//! Regional gazette PDF adapter.
//!
//! The regional bulletin publishes one issue-numbered PDF per weekday. The
//! adapter probes a window of dates around today, derives each candidate's
//! issue number, and extracts keyword-relevant text blocks from the first
//! candidate that yields any.

use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::{Config, DocumentRecord, Gazette, RegionalConfig, SearchConfig, SearchContext};
use crate::utils::{FetchBytes, PDF_MAGIC, PdfExtract, calendar, text};

/// Placeholder summary for records extracted from PDF blocks.
const PDF_SUMMARY: &str = "(Extraído de PDF)";

/// Adapter for the issue-numbered regional PDF source.
pub struct RegionalAdapter {
    config: RegionalConfig,
    search: SearchConfig,
    domain_keywords: Vec<String>,
    fetcher: Arc<dyn FetchBytes>,
    pdf: Arc<dyn PdfExtract>,
}

impl RegionalAdapter {
    /// Create a regional adapter; domain keywords are normalized once here.
    pub fn new(config: &Config, fetcher: Arc<dyn FetchBytes>, pdf: Arc<dyn PdfExtract>) -> Self {
        Self {
            config: config.regional.clone(),
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

    /// Probe candidate dates around today and return the first candidate's
    /// matching blocks.
    ///
    /// Stops at the first candidate that yields at least one record. A
    /// candidate that fetches fine but matches nothing moves on to the next
    /// date; a candidate that fails is logged and skipped.
    pub async fn fetch_documents(&self, ctx: &SearchContext) -> Vec<DocumentRecord> {
        let back = self.config.days_back as i64;
        let ahead = self.config.days_ahead as i64;

        for offset in -back..=ahead {
            let candidate = ctx.today + Duration::days(offset);
            match self.fetch_candidate(candidate).await {
                Ok(documents) if !documents.is_empty() => return documents,
                Ok(_) => {}
                Err(error) => {
                    log::warn!("BOC candidate {} skipped: {}", candidate, error);
                }
            }
        }
        Vec::new()
    }

    /// Fetch and filter one candidate issue.
    async fn fetch_candidate(&self, candidate: NaiveDate) -> Result<Vec<DocumentRecord>> {
        let (issue, _effective) = calendar::issue_number(
            candidate,
            self.config.anchor_date,
            self.config.anchor_issue,
        )?;
        let url = format!(
            "{}/boc-s-{}-{}.pdf",
            self.config.base_url,
            candidate.year(),
            issue
        );

        let bytes = self.fetcher.fetch(&url).await?;
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(AppError::pdf(format!(
                "response at {} lacks the %PDF signature",
                url
            )));
        }

        let blocks = self.pdf.extract_blocks(&bytes)?;
        let mut documents = Vec::new();
        for block in blocks {
            if block.chars().count() < self.search.min_block_chars {
                continue;
            }
            if !text::contains_any(&block, &self.domain_keywords) {
                continue;
            }
            documents.push(DocumentRecord {
                gazette: Gazette::Boc,
                title: text::truncate_chars(&block, self.search.title_max_chars).to_uppercase(),
                url: url.clone(),
                published_date: candidate.format("%Y-%m-%d").to_string(),
                summary: PDF_SUMMARY.to_string(),
            });
        }
        Ok(documents)
    }
}
