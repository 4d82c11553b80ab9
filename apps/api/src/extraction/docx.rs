use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

/// Extracts body paragraphs in document order, one paragraph per line.
/// Empty paragraphs are kept as empty lines.
pub fn extract_text(bytes: &[u8]) -> Result<String, String> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| e.to_string())?;

    let lines: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(lines.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, out),
            // Hyperlinks wrap their own runs
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, out),
            _ => {}
        }
    }
}

fn push_run_text(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Builds an in-memory .docx with one paragraph per entry.
#[cfg(test)]
pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    use docx_rs::Docx;

    let docx = paragraphs.iter().fold(Docx::new(), |doc, text| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)))
    });

    let mut buf = std::io::Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    buf.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_are_joined_in_order() {
        let bytes = build_docx(&["Introduction", "Objective", "Conclusion"]);
        let text = extract_text(&bytes).unwrap();

        let intro = text.find("Introduction").unwrap();
        let objective = text.find("Objective").unwrap();
        let conclusion = text.find("Conclusion").unwrap();
        assert!(intro < objective && objective < conclusion, "{text:?}");
        assert!(text.lines().any(|l| l == "Objective"), "{text:?}");
    }

    #[test]
    fn test_multiple_runs_share_a_line() {
        use docx_rs::Docx;

        let para = Paragraph::new()
            .add_run(Run::new().add_text("Team"))
            .add_run(Run::new().add_text("work"));
        let mut buf = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(para)
            .build()
            .pack(&mut buf)
            .unwrap();

        let text = extract_text(&buf.into_inner()).unwrap();
        assert!(text.lines().any(|l| l == "Teamwork"), "{text:?}");
    }

    #[test]
    fn test_not_a_zip_fails() {
        assert!(extract_text(b"plain text pretending to be docx").is_err());
    }
}
