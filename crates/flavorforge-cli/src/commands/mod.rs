pub mod check;
pub mod dump;
pub mod list;
pub mod show;

use owo_colors::OwoColorize;
use strsim::normalized_levenshtein;

const SUGGESTION_THRESHOLD: f64 = 0.7;
const MAX_SUGGESTIONS: usize = 3;

/// Registered names closest to `name`, best first.
pub fn suggestions<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| (normalized_levenshtein(name, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Multi-line "unknown constraint" message with suggestions.
pub fn unknown_message<'a>(name: &str, candidates: impl IntoIterator<Item = &'a str>) -> String {
    let mut message = format!("unknown constraint '{}'", name.bright_red());
    let close = suggestions(name, candidates);
    if !close.is_empty() {
        message.push_str("\n\ndid you mean:");
        for candidate in close {
            message.push_str(&format!("\n    {}", candidate.bright_green()));
        }
    }
    message
}
