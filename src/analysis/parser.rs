//! Line-prefix parser for the analysis reply grammar.

use super::{AnalysisResult, SCORE_FALLBACK, TONE_FALLBACK};

/// Parse a model reply into an [`AnalysisResult`].
///
/// Total function: each line is matched case-insensitively against the known
/// prefixes, unknown lines are ignored, and missing fields fall back to
/// documented defaults, so even an empty or malformed reply produces a
/// usable result. A later score or tone line overwrites an earlier one;
/// suggestion lines keep appending on every prefix match, so a degenerate
/// reply can yield more than three suggestions.
pub fn parse_reply(raw: &str) -> AnalysisResult {
    let mut clarity_score = None;
    let mut tone = None;
    let mut suggestions = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        let upper = line.to_uppercase();

        if upper.starts_with("CLARITY_SCORE:") {
            // first integer on the line, clamped; a score line without
            // digits is treated as absent
            if let Some(n) = first_integer(value_after_colon(line)) {
                clarity_score = Some(n.clamp(1, 10) as u8);
            }
        } else if upper.starts_with("TONE:") {
            tone = Some(value_after_colon(line).to_string());
        } else if upper.starts_with("SUGGESTION_1:")
            || upper.starts_with("SUGGESTION_2:")
            || upper.starts_with("SUGGESTION_3:")
        {
            suggestions.push(value_after_colon(line).to_string());
        }
    }

    AnalysisResult {
        clarity_score: clarity_score.unwrap_or(SCORE_FALLBACK),
        tone: tone.unwrap_or_else(|| TONE_FALLBACK.to_string()),
        suggestions,
        raw: raw.to_string(),
    }
}

/// Trimmed text after the first colon, or the empty string without one.
fn value_after_colon(line: &str) -> &str {
    line.split_once(':')
        .map(|(_, rest)| rest.trim())
        .unwrap_or("")
}

/// First run of decimal digits in `s`, if any. A run too long for `u64`
/// saturates, which still clamps to the top of the score range.
fn first_integer(s: &str) -> Option<u64> {
    let digits: String = s
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        Some(digits.parse().unwrap_or(u64::MAX))
    }
}
