use serde::{Deserialize, Serialize};

/// Reconstructed text of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    pub page_number: usize,
    pub text: String,
}

/// Reading-order text of a whole document, page by page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedDocument {
    pub pages: Vec<PageSection>,
}

impl ReconstructedDocument {
    pub fn push_page(&mut self, page_number: usize, text: String) {
        self.pages.push(PageSection { page_number, text });
    }

    /// Literal delimiter line placed before each page's text.
    pub fn page_marker(page_number: usize) -> String {
        format!("=== Page {page_number} ===")
    }

    /// Flatten to one stream, each page introduced by its marker line.
    pub fn to_marked_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push('\n');
            out.push_str(&Self::page_marker(page.page_number));
            out.push('\n');
            out.push_str(&page.text);
            out.push('\n');
        }
        out
    }
}
