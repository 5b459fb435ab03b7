//! Mood frequency statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::storage::Entry;

/// Label used for entries without a mood.
pub const NO_MOOD_LABEL: &str = "(none)";

/// How many entries carry a given mood label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: String,
    pub count: usize,
}

/// Count entries per mood (trimmed), most frequent first, ties by label.
pub fn mood_counts(entries: &[Entry]) -> Vec<MoodCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        let mood = entry.mood.trim();
        let label = if mood.is_empty() { NO_MOOD_LABEL } else { mood };
        *counts.entry(label).or_default() += 1;
    }

    let mut result: Vec<MoodCount> = counts
        .into_iter()
        .map(|(mood, count)| MoodCount {
            mood: mood.to_string(),
            count,
        })
        .collect();
    // BTreeMap already yields labels ascending; the stable sort keeps that for ties.
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}
