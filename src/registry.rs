//! Bulk corporate registry parsing
//!
//! The registry document is one large XML-ish file with hundreds of
//! thousands of repeated `<list>...</list>` blocks, one per company.
//! Blocks are located with fast substring scans and each field is
//! extracted independently, so one malformed block never loses the rest.

use crate::error::Result;
use crate::types::CompanyRecord;
use log::debug;
use memchr::memmem;
use rayon::prelude::*;
use std::path::Path;

const LIST_START: &[u8] = b"<list>";
const LIST_END: &[u8] = b"</list>";

// Below this block count the rayon fan-out costs more than it saves.
const PARALLEL_THRESHOLD: usize = 256;

/// Parse a registry document from a file path using memory mapping.
pub fn parse_registry_file(path: impl AsRef<Path>) -> Result<Vec<CompanyRecord>> {
    let file = std::fs::File::open(path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };
    Ok(parse_registry(&mmap))
}

/// Parse a registry document from a byte slice.
///
/// Returns one record per `<list>` block in source order. A block with
/// missing fields still contributes a partial record with those fields
/// empty; a document with no blocks yields an empty vec. Never fails.
pub fn parse_registry(data: &[u8]) -> Vec<CompanyRecord> {
    let boundaries = find_record_boundaries(data);
    debug!("registry scan found {} record blocks", boundaries.len());

    if boundaries.len() >= PARALLEL_THRESHOLD {
        boundaries
            .par_iter()
            .map(|(start, end)| extract_record(&data[*start..*end]))
            .collect()
    } else {
        boundaries
            .iter()
            .map(|(start, end)| extract_record(&data[*start..*end]))
            .collect()
    }
}

/// Find all (start, end) byte positions of `<list>...</list>` blocks
fn find_record_boundaries(data: &[u8]) -> Vec<(usize, usize)> {
    let mut boundaries = Vec::new();
    let finder_start = memmem::Finder::new(LIST_START);
    let finder_end = memmem::Finder::new(LIST_END);

    let mut pos = 0;
    while let Some(start) = finder_start.find(&data[pos..]) {
        let abs_start = pos + start;

        if let Some(end) = finder_end.find(&data[abs_start..]) {
            let abs_end = abs_start + end + LIST_END.len();
            boundaries.push((abs_start, abs_end));
            pos = abs_end;
        } else {
            break;
        }
    }

    boundaries
}

/// Extract one record from a single block span. Each field is located
/// independently; absence yields an empty string, not an error.
fn extract_record(block: &[u8]) -> CompanyRecord {
    CompanyRecord {
        corp_code: extract_field(block, "corp_code"),
        corp_name: extract_field(block, "corp_name"),
        corp_eng_name: extract_field(block, "corp_eng_name"),
        stock_code: extract_field(block, "stock_code"),
        modify_date: extract_field(block, "modify_date"),
    }
}

/// Extract the text between `<tag>` and `</tag>` inside the block.
fn extract_field(block: &[u8], tag: &str) -> String {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let Some(start) = memmem::find(block, open.as_bytes()) else {
        return String::new();
    };
    let content_start = start + open.len();

    let Some(end) = memmem::find(&block[content_start..], close.as_bytes()) else {
        return String::new();
    };

    let raw = &block[content_start..content_start + end];
    String::from_utf8_lossy(raw).trim().to_string()
}
