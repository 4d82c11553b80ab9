use crate::compliance::models::SectionCheck;

/// Checks each required section name against the document text.
///
/// A section counts as found when its name occurs anywhere in the text,
/// ignoring case. There is no word-boundary requirement, so "Education"
/// is found inside "MisEducationally".
pub fn check_sections(text: &str, required_sections: &[String]) -> Vec<SectionCheck> {
    let text_lower = text.to_lowercase();

    required_sections
        .iter()
        .map(|name| SectionCheck {
            name: name.clone(),
            found: text_lower.contains(&name.to_lowercase()),
        })
        .collect()
}
