//! Pagination engine.
//!
//! Pages are 1-based. A page past the end yields an empty slice; keeping the
//! current page in range is the job of [`Pagination`], which clamps on page
//! size changes. The screen resets it to the first page when the criteria or
//! the data change, and clamps it when a status patch shrinks the matches.

use crate::config::PageSizeConfig;
use crate::error::PaginationError;

/// Returns the `page`-th window of `page_size` items. Page 0 is treated as
/// page 1.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items; zero for an empty collection.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// 1-based `from..=to` item positions of the current page, for the
/// "Showing from-to of total" footer. Both are zero when nothing is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    offered: Vec<usize>,
}

impl Default for Pagination {
    /// Sizes 10/25/50, starting at 10.
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            offered: vec![10, 25, 50],
        }
    }
}

impl Pagination {
    pub fn new(offered: Vec<usize>, page_size: usize) -> Result<Self, PaginationError> {
        if !offered.contains(&page_size) || page_size == 0 {
            return Err(PaginationError::UnsupportedPageSize {
                size: page_size,
                offered,
            });
        }
        Ok(Self {
            page: 1,
            page_size,
            offered,
        })
    }

    pub fn from_config(config: &PageSizeConfig) -> Result<Self, PaginationError> {
        Self::new(config.offered.clone(), config.default_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn offered(&self) -> &[usize] {
        &self.offered
    }

    /// Highest valid page for `total` items. An empty collection still has
    /// page 1.
    pub fn last_page(&self, total: usize) -> usize {
        page_count(total, self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, self.last_page(total));
    }

    /// Changes density while keeping the current page when it is still in
    /// range; otherwise clamps to the last valid page.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) -> Result<(), PaginationError> {
        if !self.offered.contains(&page_size) {
            return Err(PaginationError::UnsupportedPageSize {
                size: page_size,
                offered: self.offered.clone(),
            });
        }
        self.page_size = page_size;
        self.page = self.page.min(self.last_page(total));
        Ok(())
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        paginate(items, self.page, self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < page_count(total, self.page_size)
    }

    pub fn window(&self, total: usize) -> PageWindow {
        let shown = paginate_len(total, self.page, self.page_size);
        if shown == 0 {
            return PageWindow { from: 0, to: 0, total };
        }
        let from = (self.page - 1) * self.page_size + 1;
        PageWindow {
            from,
            to: from + shown - 1,
            total,
        }
    }
}

fn paginate_len(total: usize, page: usize, page_size: usize) -> usize {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    total.saturating_sub(start).min(page_size)
}
