// src/services/mod.rs

//! Source adapters, one per gazette family.
//!
//! Every adapter exposes `fetch_documents(ctx) -> Vec<DocumentRecord>`:
//! infallible at the boundary, with per-candidate failures logged and
//! mapped to "no output for that candidate".

pub mod feed;
pub mod provincial;
pub mod regional;

pub use feed::FeedAdapter;
pub use provincial::ProvincialAdapter;
pub use regional::RegionalAdapter;
