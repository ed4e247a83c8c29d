//! Pipeline entry points for gazette search operations.
//!
//! - `run_search`: Collect from all sources and filter by user keywords

pub mod search;

pub use search::{GazetteSearch, filter_documents, normalize_keywords, run_search};
