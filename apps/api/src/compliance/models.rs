use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extraction::DocumentFormat;

pub const DEFAULT_REQUIRED_SECTIONS: &[&str] = &[
    "Introduction",
    "Objective",
    "Skills",
    "Education",
    "Experience",
    "Conclusion",
];
pub const DEFAULT_MIN_WORDS: usize = 100;
pub const DEFAULT_MAX_WORDS: usize = 1000;
pub const DEFAULT_PASS_THRESHOLD: f64 = 80.0;

/// The checks a document is held to. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRules {
    pub required_sections: Vec<String>,
    pub min_words: usize,
    pub max_words: usize,
    /// Minimum percentage (0–100) needed to pass, inclusive.
    pub pass_threshold: f64,
}

impl Default for ComplianceRules {
    fn default() -> Self {
        Self {
            required_sections: DEFAULT_REQUIRED_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCheck {
    pub name: String,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCountResult {
    pub count: usize,
    pub within_range: bool,
    pub min_words: usize,
    pub max_words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub percentage: f64,
    pub passed_checks: usize,
    pub total_checks: usize,
    pub passed: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Report envelope returned by the API
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    #[serde(rename = "Found")]
    Found,
    #[serde(rename = "Not Found")]
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordCountStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Not OK")]
    NotOk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRow {
    pub section: String,
    pub found: bool,
    pub status: SectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCountReport {
    #[serde(flatten)]
    pub result: WordCountResult,
    pub status: WordCountStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub report_id: Uuid,
    pub file_name: String,
    pub format: DocumentFormat,
    pub checked_at: DateTime<Utc>,
    pub sections: Vec<SectionRow>,
    pub word_count: WordCountReport,
    pub score: ComplianceScore,
    /// Percentage with two decimals, e.g. "85.71%".
    pub score_display: String,
    pub message: String,
}
