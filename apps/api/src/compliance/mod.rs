// Document compliance checks: mandatory sections, word count, pass/fail score.
// The check functions are pure; handlers only extract text and delegate.

pub mod handlers;
pub mod models;
pub mod report;
pub mod scoring;
pub mod sections;
pub mod word_count;
