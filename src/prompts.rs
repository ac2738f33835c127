//! Prompt construction for the analysis contract.
//!
//! The completion service offers no guaranteed structured-output mode, so
//! the system prompt locks the reply into a fixed line format that
//! [`crate::analysis::parse_reply`] reads back with safe defaults.

/// Reply format mandated by the analysis prompt.
///
/// Must stay in sync with the prefixes recognised by the reply parser.
const REPLY_FORMAT: &str = "CLARITY_SCORE: <integer 1-10>\n\
TONE: <one or two sentence description of the writing tone>\n\
SUGGESTION_1: <first specific suggestion tailored to the chosen style>\n\
SUGGESTION_2: <second specific suggestion tailored to the chosen style>\n\
SUGGESTION_3: <third specific suggestion tailored to the chosen style>";

/// System prompt for a document analysis call.
///
/// Names the requested style and numeric target, and mandates the exact
/// reply grammar with no extra commentary or markup. `target_score` is
/// passed through as given; only the score parsed out of the reply is
/// clamped.
pub fn analysis_system_prompt(style: &str, target_score: u8) -> String {
    format!(
        "You are an expert writing coach specialising in {style} writing. \
         The author's target clarity score is {target_score}/10. \
         Analyze the user's document and return your analysis in EXACTLY this format \
         - no extra commentary, no markdown:\n\n{REPLY_FORMAT}"
    )
}

/// User message wrapping the document text.
///
/// The `---` delimiter lines give the model an unambiguous boundary even
/// when the document itself contains triple dashes.
pub fn analysis_user_message(text: &str) -> String {
    format!("Document:\n---\n{text}\n---")
}
