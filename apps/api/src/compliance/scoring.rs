use crate::compliance::models::{ComplianceScore, SectionCheck, WordCountResult};

/// Every found section and an in-range word count each earn one check.
/// percentage = 100 * passed_checks / total_checks, where total_checks is
/// the number of sections plus the word-count check (so never zero).
/// The document passes when percentage >= pass_threshold.
pub fn compute_score(
    sections: &[SectionCheck],
    word_count: &WordCountResult,
    pass_threshold: f64,
) -> ComplianceScore {
    let sections_found = sections.iter().filter(|s| s.found).count();
    let passed_checks = sections_found + usize::from(word_count.within_range);
    let total_checks = sections.len() + 1;

    let percentage = 100.0 * passed_checks as f64 / total_checks as f64;

    ComplianceScore {
        percentage,
        passed_checks,
        total_checks,
        passed: percentage >= pass_threshold,
    }
}
