// src/pipeline/search.rs

//! Search orchestration.
//!
//! Fans out to the four source adapters, concatenates their output in a
//! fixed order (BOE, BOC, then the provincial sources as configured), and
//! applies the user keyword filter.

use std::sync::Arc;

use futures::future::join_all;

use crate::error::{AppError, Result};
use crate::models::{Config, DocumentRecord, SearchContext};
use crate::services::{FeedAdapter, ProvincialAdapter, RegionalAdapter};
use crate::utils::{FetchBytes, HttpFetcher, LopdfExtract, PdfExtract, text};

/// Normalize user-supplied keywords for matching.
///
/// Blank entries are dropped; an empty result is the user-visible
/// "no keywords provided" condition, not a valid empty search.
pub fn normalize_keywords(raw: &[String]) -> Result<Vec<String>> {
    let normalized: Vec<String> = raw
        .iter()
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .map(text::normalize)
        .collect();

    if normalized.is_empty() {
        return Err(AppError::EmptyKeywords);
    }
    Ok(normalized)
}

/// Keep records whose normalized title+summary contains any needle,
/// preserving input order.
pub fn filter_documents(
    documents: Vec<DocumentRecord>,
    needles: &[String],
) -> Vec<DocumentRecord> {
    documents
        .into_iter()
        .filter(|doc| doc.matches_any(needles))
        .collect()
}

/// The aggregated gazette search over all configured sources.
pub struct GazetteSearch {
    feed: FeedAdapter,
    regional: RegionalAdapter,
    provincial: Vec<ProvincialAdapter>,
}

impl GazetteSearch {
    /// Wire up all adapters with injected fetch and PDF collaborators.
    pub fn new(config: &Config, fetcher: Arc<dyn FetchBytes>, pdf: Arc<dyn PdfExtract>) -> Self {
        let provincial = config
            .provincial
            .iter()
            .map(|source| {
                ProvincialAdapter::new(
                    config,
                    source.clone(),
                    Arc::clone(&fetcher),
                    Arc::clone(&pdf),
                )
            })
            .collect();

        Self {
            feed: FeedAdapter::new(config, Arc::clone(&fetcher)),
            regional: RegionalAdapter::new(config, Arc::clone(&fetcher), Arc::clone(&pdf)),
            provincial,
        }
    }

    /// Wire up all adapters with the production HTTP client and PDF
    /// extractor.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher: Arc<dyn FetchBytes> = Arc::new(HttpFetcher::new(&config.http)?);
        let pdf: Arc<dyn PdfExtract> = Arc::new(LopdfExtract);
        Ok(Self::new(config, fetcher, pdf))
    }

    /// Run all adapters and return the concatenated, unfiltered output.
    ///
    /// Adapters run concurrently (they share no state) but the output
    /// order is fixed: feed, regional, then each provincial source in
    /// configuration order, each adapter's internal order preserved.
    pub async fn collect_all(&self, ctx: &SearchContext) -> Vec<DocumentRecord> {
        let (feed, regional, provincial) = tokio::join!(
            self.feed.fetch_documents(ctx),
            self.regional.fetch_documents(ctx),
            join_all(self.provincial.iter().map(|a| a.fetch_documents(ctx))),
        );

        let mut documents = feed;
        documents.extend(regional);
        for batch in provincial {
            documents.extend(batch);
        }
        documents
    }

    /// Full search: normalize user keywords, collect from every source,
    /// filter. An empty result list is a valid outcome.
    pub async fn search(
        &self,
        ctx: &SearchContext,
        user_keywords: &[String],
    ) -> Result<Vec<DocumentRecord>> {
        let needles = normalize_keywords(user_keywords)?;

        log::info!("Searching {} sources...", 2 + self.provincial.len());
        let documents = self.collect_all(ctx).await;
        log::info!("Collected {} candidate documents", documents.len());

        Ok(filter_documents(documents, &needles))
    }
}

/// Convenience entry point: build the production search from config and
/// run it once.
pub async fn run_search(
    config: &Config,
    ctx: &SearchContext,
    user_keywords: &[String],
) -> Result<Vec<DocumentRecord>> {
    GazetteSearch::from_config(config)?.search(ctx, user_keywords).await
}
