use std::sync::LazyLock;

use regex::Regex;

use crate::document::ReconstructedDocument;

static RE_PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"=== Page (\d+) ===").expect("valid page marker regex"));

const RTF_HEADER: &str = r"{\rtf1\ansi\deff0 {\fonttbl {\f0 Times New Roman;}}";

/// Render a reconstructed document as a minimal RTF document.
pub fn render_rtf(document: &ReconstructedDocument) -> String {
    wrap_rtf(&document.to_marked_text())
}

/// Wrap marked plain text in the RTF envelope (font table, 12pt default).
pub fn wrap_rtf(marked_text: &str) -> String {
    format!("{RTF_HEADER}\\f0\\fs24 {}}}", escape_rtf(marked_text))
}

/// Escape marked plain text for an RTF body.
///
/// Newlines become paragraph breaks, tabs become tab marks and page markers
/// become bold page headings.
pub fn escape_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\par "),
            '\t' => out.push_str("\\tab "),
            '\r' => {}
            c if c.is_ascii() => out.push(c),
            c => {
                // RTF \u takes a signed 16-bit value, one per UTF-16 unit.
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
        }
    }
    RE_PAGE_MARKER
        .replace_all(&out, r"\par\b Page $1 \b0\par")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_breaks_and_tabs() {
        assert_eq!(escape_rtf("a\tb\nc"), r"a\tab b\par c");
    }

    #[test]
    fn test_page_marker_becomes_heading() {
        assert_eq!(
            escape_rtf("\n=== Page 2 ===\nx\n"),
            r"\par \par\b Page 2 \b0\par\par x\par "
        );
    }

    #[test]
    fn test_control_characters_escaped() {
        assert_eq!(escape_rtf(r"{a\b}"), r"\{a\\b\}");
    }

    #[test]
    fn test_non_ascii_as_unicode_escape() {
        assert_eq!(escape_rtf("é"), r"\u233?");
        // Outside the BMP: two surrogate halves, each signed.
        assert_eq!(escape_rtf("😀"), r"\u-10179?\u-8704?");
    }

    #[test]
    fn test_render_envelope() {
        let mut doc = ReconstructedDocument::default();
        doc.push_page(1, "Hi\n".into());
        let rtf = render_rtf(&doc);
        assert!(rtf.starts_with(r"{\rtf1\ansi\deff0 {\fonttbl {\f0 Times New Roman;}}\f0\fs24 "));
        assert!(rtf.ends_with('}'));
        assert!(rtf.contains(r"\b Page 1 \b0"));
        assert!(rtf.contains(r"Hi\par "));
    }
}
