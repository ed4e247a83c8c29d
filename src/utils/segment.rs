// src/utils/segment.rs

//! Summary block segmentation for provincial bulletin PDFs.
//!
//! Provincial summaries list entries as a six-digit entry code followed by
//! the entry text, with continuation lines wrapped underneath.

use std::sync::LazyLock;

use regex::Regex;

/// A line opening a new summary entry: six digits, whitespace, then text.
static BLOCK_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}\s+.+").expect("valid block-start regex"));

/// Group lines into summary entry blocks.
///
/// Each block starts at a line matching the entry-code pattern and absorbs
/// following lines until the next entry code. Lines before the first entry
/// code are discarded.
pub fn segment_blocks<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in lines {
        let line = line.trim();
        if BLOCK_START.is_match(line) {
            if !current.is_empty() {
                blocks.push(current);
            }
            current = line.to_string();
        } else if !current.is_empty() && !line.is_empty() {
            current.push(' ');
            current.push_str(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_continuation_lines() {
        let lines = [
            "garbage",
            "123456 Title one",
            "continuation",
            "654321 Title two",
        ];
        assert_eq!(
            segment_blocks(lines),
            vec![
                "123456 Title one continuation".to_string(),
                "654321 Title two".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_entry_code_yields_empty() {
        let lines = ["preamble", "index", "page 1"];
        assert!(segment_blocks(lines).is_empty());
    }

    #[test]
    fn test_leading_junk_dropped() {
        let lines = ["header text", "123456 Decreto 5/2025", "por el que se aprueba"];
        assert_eq!(
            segment_blocks(lines),
            vec!["123456 Decreto 5/2025 por el que se aprueba".to_string()]
        );
    }

    #[test]
    fn test_short_code_is_not_a_block_start() {
        let lines = ["12345 too short", "123456 real entry"];
        assert_eq!(segment_blocks(lines), vec!["123456 real entry".to_string()]);
    }

    #[test]
    fn test_final_block_flushed() {
        let lines = ["123456 only entry", "tail line"];
        assert_eq!(
            segment_blocks(lines),
            vec!["123456 only entry tail line".to_string()]
        );
    }
}
