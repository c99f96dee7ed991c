//! Substring matching over entry names and highlight rendering.
//!
//! An entry matches when the case-folded characters of its final path
//! segment contain the folded query as a contiguous run. Matching operates
//! on `char` sequences with per-character simple folding so the matched span
//! stays aligned with the original text even for non-ASCII names; byte
//! offsets of a case-folded string are never used.
//!
//! # Public API
//! - [`MatchSpan`]: First match position and length, in characters
//! - [`SearchHit`]: One matching entry with its display name and span
//! - [`find_matches`]: Linear scan of the candidate list for a query
//! - [`highlight`]: Render a name with the matched span visually inverted

use colored::*;
use std::path::{Path, PathBuf};

/// First occurrence of the query within a name, measured in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub len: usize,
}

/// A matching entry: the full path, its final segment, and the match span.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub path: PathBuf,
    pub name: String,
    pub span: MatchSpan,
}

/// Final path segment used for matching and display. Falls back to the full
/// path text for paths without a file name (e.g. `/`).
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Simple one-to-one case fold. Multi-char lowerings (like ß → ss) would
/// break span alignment, so only the first lowercase char is taken.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Locate the first case-insensitive occurrence of `query` in `name`.
/// An empty query matches everything with a zero-length span at the start.
pub fn match_name(name: &str, query: &str) -> Option<MatchSpan> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() {
        return Some(MatchSpan { start: 0, len: 0 });
    }

    let hay: Vec<char> = name.chars().map(fold).collect();
    if needle.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - needle.len())
        .find(|&start| hay[start..start + needle.len()] == needle[..])
        .map(|start| MatchSpan {
            start,
            len: needle.len(),
        })
}

/// Filter the candidate list, preserving scan order. One pass, no ranking.
pub fn find_matches(entries: &[PathBuf], query: &str) -> Vec<SearchHit> {
    entries
        .iter()
        .filter_map(|path| {
            let name = entry_name(path);
            match_name(&name, query).map(|span| SearchHit {
                path: path.clone(),
                name,
                span,
            })
        })
        .collect()
}

/// Split a name into before/match/after spans and render the matched slice
/// on a red background, the rest in yellow.
pub fn highlight(name: &str, span: MatchSpan) -> String {
    let chars: Vec<char> = name.chars().collect();
    let before: String = chars[..span.start].iter().collect();
    let matched: String = chars[span.start..span.start + span.len].iter().collect();
    let after: String = chars[span.start + span.len..].iter().collect();
    format!("{}{}{}", before.yellow(), matched.on_red(), after.yellow())
}
