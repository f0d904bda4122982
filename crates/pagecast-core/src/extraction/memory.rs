use async_trait::async_trait;

use crate::error::ConvertError;
use crate::extraction::{Fragment, PageSource, TextItem};

/// A page source over fragments that were already extracted.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: Vec<Vec<Fragment>>,
}

impl MemorySource {
    pub fn new(pages: Vec<Vec<Fragment>>) -> Self {
        MemorySource { pages }
    }

    /// Parse a JSON dump of text items: an array of pages, each an array of
    /// `{ "str", "transform", "width" }` objects.
    pub fn from_items_json(json: &str) -> Result<Self, ConvertError> {
        let pages: Vec<Vec<TextItem>> = serde_json::from_str(json)?;
        Ok(MemorySource {
            pages: pages
                .into_iter()
                .map(|items| items.into_iter().map(Fragment::from).collect())
                .collect(),
        })
    }
}

#[async_trait]
impl PageSource for MemorySource {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    async fn page_fragments(&mut self, page_number: usize) -> Result<Vec<Fragment>, ConvertError> {
        page_number
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or(ConvertError::PageOutOfRange {
                page: page_number,
                count: self.pages.len(),
            })
    }
}
