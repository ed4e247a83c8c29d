// src/utils/pdf.rs

//! PDF text extraction.
//!
//! Adapters depend on the [`PdfExtract`] trait rather than a concrete
//! library so tests can feed canned text. The default implementation is
//! backed by `lopdf`.

use lopdf::Document;

use crate::error::{AppError, Result};

/// Leading bytes of a well-formed PDF file.
pub const PDF_MAGIC: &[u8] = b"%PDF";

/// Text extraction interface over raw PDF bytes.
pub trait PdfExtract: Send + Sync {
    /// Extract all text blocks across all pages, in page order. A block is
    /// a contiguous run of non-empty text lines.
    fn extract_blocks(&self, bytes: &[u8]) -> Result<Vec<String>>;

    /// Extract the text of a single zero-indexed page, or `None` when the
    /// page does not exist.
    fn extract_page_text(&self, bytes: &[u8], page_index: usize) -> Result<Option<String>>;

    /// Number of pages in the document.
    fn page_count(&self, bytes: &[u8]) -> Result<usize>;
}

/// [`PdfExtract`] implementation backed by `lopdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtract;

impl LopdfExtract {
    fn load(bytes: &[u8]) -> Result<Document> {
        Document::load_mem(bytes).map_err(AppError::pdf)
    }

    fn split_blocks(text: &str) -> Vec<String> {
        let mut blocks = Vec::new();
        let mut current = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(line);
            }
        }
        if !current.is_empty() {
            blocks.push(current);
        }
        blocks
    }
}

impl PdfExtract for LopdfExtract {
    fn extract_blocks(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = Self::load(bytes)?;
        let mut blocks = Vec::new();
        for (page_num, _) in doc.get_pages() {
            let text = doc.extract_text(&[page_num]).map_err(AppError::pdf)?;
            blocks.extend(Self::split_blocks(&text));
        }
        Ok(blocks)
    }

    fn extract_page_text(&self, bytes: &[u8], page_index: usize) -> Result<Option<String>> {
        let doc = Self::load(bytes)?;
        // lopdf page numbers are 1-indexed
        let page_nums: Vec<u32> = doc.get_pages().keys().copied().collect();
        match page_nums.get(page_index) {
            Some(&page_num) => {
                let text = doc.extract_text(&[page_num]).map_err(AppError::pdf)?;
                Ok(Some(text))
            }
            None => Ok(None),
        }
    }

    fn page_count(&self, bytes: &[u8]) -> Result<usize> {
        Ok(Self::load(bytes)?.get_pages().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks_on_blank_lines() {
        let text = "Decreto 12/2025\nde ordenación urbana\n\nAnuncio de licitación\n";
        assert_eq!(
            LopdfExtract::split_blocks(text),
            vec![
                "Decreto 12/2025 de ordenación urbana".to_string(),
                "Anuncio de licitación".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_blocks_empty_input() {
        assert!(LopdfExtract::split_blocks("").is_empty());
        assert!(LopdfExtract::split_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(LopdfExtract::load(b"not a pdf at all").is_err());
    }
}
