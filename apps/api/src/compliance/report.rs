use chrono::Utc;
use uuid::Uuid;

use crate::compliance::models::{
    ComplianceReport, ComplianceRules, SectionRow, SectionStatus, WordCountReport, WordCountStatus,
};
use crate::compliance::scoring::compute_score;
use crate::compliance::sections::check_sections;
use crate::compliance::word_count::check_word_count;
use crate::extraction::DocumentFormat;

pub const PASSED_MESSAGE: &str = "Document PASSED Compliance Check!";
pub const FAILED_MESSAGE: &str = "Document FAILED Compliance Check!";

/// Runs the section, word-count and score checks over extracted text and
/// wraps the results in the report returned to clients.
pub fn build_report(
    file_name: &str,
    format: DocumentFormat,
    text: &str,
    rules: &ComplianceRules,
) -> ComplianceReport {
    let section_checks = check_sections(text, &rules.required_sections);
    let word_count = check_word_count(text, rules.min_words, rules.max_words);
    let score = compute_score(&section_checks, &word_count, rules.pass_threshold);

    let sections = section_checks
        .into_iter()
        .map(|check| SectionRow {
            status: if check.found {
                SectionStatus::Found
            } else {
                SectionStatus::NotFound
            },
            section: check.name,
            found: check.found,
        })
        .collect();

    let word_count = WordCountReport {
        status: if word_count.within_range {
            WordCountStatus::Ok
        } else {
            WordCountStatus::NotOk
        },
        result: word_count,
    };

    ComplianceReport {
        report_id: Uuid::new_v4(),
        file_name: file_name.to_string(),
        format,
        checked_at: Utc::now(),
        sections,
        word_count,
        score_display: format!("{:.2}%", score.percentage),
        message: if score.passed {
            PASSED_MESSAGE
        } else {
            FAILED_MESSAGE
        }
        .to_string(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SECTIONS: &str = "Introduction Objective Skills Education Experience Conclusion ";

    fn filler(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    #[test]
    fn test_complete_document_passes() {
        let text = format!("{ALL_SECTIONS}{}", filler(94));
        let report = build_report("cv.docx", DocumentFormat::Docx, &text, &ComplianceRules::default());

        assert_eq!(report.word_count.result.count, 100);
        assert!(report.word_count.result.within_range);
        assert_eq!(report.word_count.status, WordCountStatus::Ok);
        assert!(report.sections.iter().all(|s| s.status == SectionStatus::Found));
        assert_eq!(report.score.passed_checks, 7);
        assert_eq!(report.score.total_checks, 7);
        assert_eq!(report.score.percentage, 100.0);
        assert!(report.score.passed);
        assert_eq!(report.score_display, "100.00%");
        assert_eq!(report.message, PASSED_MESSAGE);
    }

    #[test]
    fn test_short_document_with_one_section_fails() {
        let text = format!("Introduction {}", filler(49));
        let report = build_report("cv.pdf", DocumentFormat::Pdf, &text, &ComplianceRules::default());

        assert_eq!(report.word_count.result.count, 50);
        assert_eq!(report.word_count.status, WordCountStatus::NotOk);
        assert_eq!(report.score.passed_checks, 1);
        assert_eq!(report.score.total_checks, 7);
        assert_eq!(report.score_display, "14.29%");
        assert!(!report.score.passed);
        assert_eq!(report.message, FAILED_MESSAGE);
    }

    #[test]
    fn test_empty_text_is_scored_not_rejected() {
        let report = build_report("blank.pdf", DocumentFormat::Pdf, "", &ComplianceRules::default());
        assert_eq!(report.sections.len(), 6);
        assert!(report.sections.iter().all(|s| !s.found));
        assert_eq!(report.word_count.result.count, 0);
        assert_eq!(report.score.percentage, 0.0);
        assert_eq!(report.score_display, "0.00%");
    }

    #[test]
    fn test_custom_rules_are_honoured() {
        let rules = ComplianceRules {
            required_sections: vec!["Summary".to_string()],
            min_words: 1,
            max_words: 5,
            pass_threshold: 50.0,
        };
        let report = build_report("a.docx", DocumentFormat::Docx, "executive summary", &rules);
        assert_eq!(report.sections.len(), 1);
        assert!(report.sections[0].found);
        assert_eq!(report.word_count.result.max_words, 5);
        assert!(report.score.passed);
    }

    #[test]
    fn test_report_serializes_status_labels() {
        let report = build_report("x.pdf", DocumentFormat::Pdf, "Skills", &ComplianceRules::default());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["format"], "pdf");
        assert_eq!(json["sections"][0]["status"], "Not Found");
        assert_eq!(json["sections"][2]["status"], "Found");
        assert_eq!(json["word_count"]["status"], "Not OK");
        assert_eq!(json["word_count"]["count"], 1);
        assert_eq!(json["word_count"]["min_words"], 100);
        assert_eq!(json["score"]["total_checks"], 7);
    }
}
