//! Locate-or-append editing of a managed block.
//!
//! The block span is found by plain substring search: the first start marker,
//! then the first end marker after it. Only that first pair is ever
//! replaced. A document holding several well-formed pairs keeps the later
//! ones untouched; this is a deliberate simplification.

use std::ops::Range;

use crate::block::ManagedBlock;
use crate::eol::EndOfLineStyle;

/// Find the byte span of the existing block in `content`.
///
/// The span covers the start marker through the end marker, plus any spaces
/// or tabs after the end marker and at most one line break (`\r\n`, `\n` or
/// `\r`). Returns `None` when either marker is missing or the end marker only
/// occurs before the start marker.
pub fn locate(content: &str, block: &ManagedBlock) -> Option<Range<usize>> {
    let start = content.find(block.start_marker())?;
    let search_from = start + block.start_marker().len();
    let end_offset = content[search_from..].find(block.end_marker())?;

    let mut end = search_from + end_offset + block.end_marker().len();
    let rest = content[end..].as_bytes();
    let padding = rest
        .iter()
        .take_while(|&&b| b == b' ' || b == b'\t')
        .count();
    end += padding;

    let rest = &content[end..];
    if rest.starts_with("\r\n") {
        end += 2;
    } else if rest.starts_with('\n') || rest.starts_with('\r') {
        end += 1;
    }

    Some(start..end)
}

/// Insert or refresh `block` in `content`.
///
/// The block is rendered with the line-ending style already used by
/// `content` (LF for an empty document). An existing block is replaced in
/// place; otherwise the block is appended, after a line break if the text
/// does not already end with one.
///
/// # Example
/// ```
/// use skills_blocks::{apply, Markers};
///
/// let block = Markers::new("T", "demo").block("hello");
/// let once = apply("# Notes", &block);
/// assert_eq!(once, "# Notes\n<!-- T:START demo -->\nhello\n<!-- T:END demo -->\n");
/// assert_eq!(apply(&once, &block), once);
/// ```
pub fn apply(content: &str, block: &ManagedBlock) -> String {
    let eol = EndOfLineStyle::detect(content);
    let rendered = block.render(eol);

    match locate(content, block) {
        Some(span) => {
            tracing::debug!(start = span.start, end = span.end, %eol, "Replacing managed block");
            let mut out = String::with_capacity(content.len() - span.len() + rendered.len());
            out.push_str(&content[..span.start]);
            out.push_str(&rendered);
            out.push_str(&content[span.end..]);
            out
        }
        None => {
            if content.contains(block.start_marker()) || content.contains(block.end_marker()) {
                tracing::warn!("Unpaired managed block marker found; appending a new block");
            }
            tracing::debug!(%eol, "Appending managed block");
            let mut out = String::with_capacity(content.len() + eol.as_str().len() + rendered.len());
            out.push_str(content);
            if !content.is_empty() && !content.ends_with(['\n', '\r']) {
                out.push_str(eol.as_str());
            }
            out.push_str(&rendered);
            out
        }
    }
}

/// Whether `content` already holds `block` exactly as [`apply`] would render it.
pub fn is_current(content: &str, block: &ManagedBlock) -> bool {
    locate(content, block).is_some() && apply(content, block) == content
}
