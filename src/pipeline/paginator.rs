use tracing::debug;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{Entry, Page, WordSet};

/// Sorts a word set and cuts it into fixed-capacity columns.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    capacity: usize,
}

impl Paginator {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "page capacity must be at least 1".to_string(),
            ));
        }
        Ok(Paginator { capacity })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// ceil(total / capacity)
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.capacity)
    }

    /// Serials run 1..=total across all pages; only the last page may be short.
    /// An empty set yields no pages.
    pub fn paginate(&self, words: WordSet) -> Vec<Page> {
        let sorted = words.into_sorted();
        let mut pages = Vec::with_capacity(self.page_count(sorted.len()));
        let mut entries = Vec::with_capacity(self.capacity.min(sorted.len()));

        for (index, word) in sorted.into_iter().enumerate() {
            entries.push(Entry { serial: index + 1, word });

            if entries.len() == self.capacity {
                pages.push(Page {
                    number: pages.len() + 1,
                    entries: std::mem::take(&mut entries),
                });
            }
        }

        if !entries.is_empty() {
            pages.push(Page {
                number: pages.len() + 1,
                entries,
            });
        }

        for page in &pages {
            debug!(
                column = page.number,
                first = page.first_serial(),
                last = page.last_serial(),
                "paginated column"
            );
        }

        pages
    }
}
