//! Utility functions and helpers.

pub mod calendar;
pub mod http;
pub mod pdf;
pub mod segment;
pub mod text;

pub use calendar::issue_number;
pub use http::{FetchBytes, HttpFetcher};
pub use pdf::{LopdfExtract, PDF_MAGIC, PdfExtract};
pub use segment::segment_blocks;
pub use text::{contains_any, normalize, truncate_chars};
