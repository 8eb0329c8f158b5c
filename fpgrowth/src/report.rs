//! Rendering of mined patterns.
//!
//! Patterns below a minimum size are dropped (by default singletons and the
//! empty key) and the rest are printed as `<a b : 3>`, smallest itemsets
//! first, then by key.

use std::io::Write;

use crate::error::Result;
use crate::fp::{PatternKey, Patterns};

pub const REPORT_HEADING: &str = "Frequent Items Are:";

/// Itemsets reported by default have at least two labels.
pub const DEFAULT_MIN_LEN: usize = 2;

/// Patterns with at least `min_len` labels, ordered by size then key.
pub fn filter_patterns(patterns: &Patterns, min_len: usize) -> Vec<(&PatternKey, usize)> {
    let mut selected: Vec<(&PatternKey, usize)> = patterns
        .iter()
        .filter(|(key, _)| key.len() >= min_len)
        .map(|(key, &count)| (key, count))
        .collect();
    selected.sort_unstable_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(b.0)));
    selected
}

pub fn format_pattern(key: &PatternKey, count: usize) -> String {
    format!("<{} : {}>", key, count)
}

pub fn render_report(patterns: &Patterns, min_len: usize) -> String {
    let entries: Vec<String> = filter_patterns(patterns, min_len)
        .into_iter()
        .map(|(key, count)| format_pattern(key, count))
        .collect();

    format!("{}\n\n{}\n", REPORT_HEADING, entries.join(", "))
}

pub fn write_report<W: Write>(writer: &mut W, patterns: &Patterns, min_len: usize) -> Result<()> {
    writer.write_all(render_report(patterns, min_len).as_bytes())?;
    writer.flush()?;
    Ok(())
}
