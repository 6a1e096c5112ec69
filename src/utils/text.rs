//! Text helpers that measure and cut strings by user-perceived characters.

use unicode_segmentation::UnicodeSegmentation;

/// Number of extended grapheme clusters in `value`.
pub fn char_count(value: &str) -> usize {
    value.graphemes(true).count()
}

/// Returns `value` cut down to at most `limit` grapheme clusters.
///
/// Input already within the limit is returned unchanged. A cluster is never
/// split, so combining marks and emoji sequences survive intact.
pub fn truncate_graphemes(value: &str, limit: usize) -> String {
    match value.grapheme_indices(true).nth(limit) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}
