//! Fixed-size pagination with clamping.

use core::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Items shown per listing page.
pub const PAGE_SIZE: usize = 12;

/// One page of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Effective (clamped) page number, 1-indexed.
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slices sequences into pages of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: NonZeroUsize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl Paginator {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// `max(1, ceil(len / page_size))`: an empty sequence still has one (empty) page.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.get()).max(1)
    }

    /// `requested` clamped into `1..=total_pages(len)`.
    pub fn effective_page(&self, len: usize, requested: usize) -> usize {
        requested.clamp(1, self.total_pages(len))
    }

    /// The page at `requested`, clamped; never fails.
    pub fn page<'a, T>(&self, items: &'a [T], requested: usize) -> Page<'a, T> {
        let len = items.len();
        let number = self.effective_page(len, requested);
        let start = ((number - 1) * self.page_size.get()).min(len);
        let end = (number * self.page_size.get()).min(len);

        Page {
            items: &items[start..end],
            number,
            total_pages: self.total_pages(len),
            total_items: len,
        }
    }
}

/// Current page of a listing (1-indexed).
///
/// Transitions: set (clamped against the current page count), previous/next
/// (saturating), and reset to 1 whenever criteria or sort order change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageState {
    current: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl PageState {
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set(&mut self, requested: usize, total_pages: usize) {
        self.current = requested.clamp(1, total_pages.max(1));
    }

    pub fn next(&mut self, total_pages: usize) {
        self.set(self.current.saturating_add(1), total_pages);
    }

    pub fn previous(&mut self, total_pages: usize) {
        self.set(self.current.saturating_sub(1), total_pages);
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}
