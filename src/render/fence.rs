//! Fenced `json` block scanning
//!
//! Finds ```` ```json ... ``` ```` regions in assistant text and reports
//! their exact byte ranges so the plan builder can splice around them.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Opening marker of a data block
pub const OPEN_MARKER: &str = "```json";

/// Non-greedy so consecutive blocks never merge into one match.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fence pattern is valid")
});

/// A fenced data block located inside a larger message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Byte range of the whole block, fence markers included
    pub span: Range<usize>,
    /// Text between the markers, surrounding whitespace trimmed
    pub inner: String,
}

impl FencedBlock {
    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The original block text, fence markers included
    pub fn raw<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.span.clone()).unwrap_or_default()
    }
}

/// Scan `text` left to right for non-overlapping fenced `json` blocks.
///
/// Blocks come back ordered by start offset. An opening marker with no
/// closing marker after it produces nothing.
pub fn extract_blocks(text: &str) -> Vec<FencedBlock> {
    FENCE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1).map_or("", |m| m.as_str());
            Some(FencedBlock {
                span: whole.range(),
                inner: inner.to_string(),
            })
        })
        .collect()
}

/// Offset of an opening marker left unclosed after the last complete block.
pub fn unterminated_fence(text: &str) -> Option<usize> {
    let tail_start = extract_blocks(text).last().map_or(0, FencedBlock::end);
    let tail = text.get(tail_start..)?;
    tail.find(OPEN_MARKER).map(|pos| tail_start + pos)
}
