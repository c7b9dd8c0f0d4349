//! Profanity detection model for the `badWords` endpoint.

use serde::{Deserialize, Serialize};

/// Result of scanning a text for profane language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfanityResult {
    /// The text as checked by the upstream.
    #[serde(default)]
    pub text: String,

    #[serde(rename = "totalBadWords", default)]
    pub total_bad_words: u32,

    /// 0 (clean) to 100.
    #[serde(default)]
    pub risk_score: u32,

    pub is_safe: bool,
}
