//! Page range computation for pagination controls.
//!
//! Given a total item count, a page size and the host's current page, produce
//! the compact list of page buttons and ellipsis markers a pager renders. The
//! first and last pages are always shown, a window of pages sits around the
//! current one, and long runs collapse into a single ellipsis.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PaginationError;

/// Up to this many pages every page is listed and no ellipsis is emitted.
pub const MAX_VISIBLE_PAGES: u64 = 7;

/// Page size hosts fall back to when none is configured.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One rendered unit of a pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "lowercase")]
pub enum PageEntry {
    /// A selectable, 1-based page number.
    Page(u64),
    /// A non-selectable marker for an elided run of pages.
    Ellipsis,
}

impl PageEntry {
    pub fn page_number(&self) -> Option<u64> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Self::Ellipsis)
    }
}

/// Input of a single computation. The host owns these values and passes them
/// in on every render; nothing here is remembered between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub total_items: u64,
    pub page_size: u64,
    /// 1-based. May be stale or out of range; it is clamped before use.
    pub current_page: i64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self { total_items: 0, page_size: DEFAULT_PAGE_SIZE, current_page: 1 }
    }
}

impl PaginationState {
    pub fn new(total_items: u64, page_size: u64, current_page: i64) -> Self {
        Self { total_items, page_size, current_page }
    }

    pub fn total_pages(&self) -> Result<u64, PaginationError> {
        total_pages(self.total_items, self.page_size)
    }

    /// Current page forced into `[1, total_pages]`.
    pub fn clamped_page(&self) -> Result<u64, PaginationError> {
        Ok(clamp_page(self.current_page, self.total_pages()?))
    }

    /// Zero-based index of the first item on the clamped current page.
    pub fn offset(&self) -> Result<u64, PaginationError> {
        let page = self.clamped_page()?;
        Ok((page - 1).saturating_mul(self.page_size))
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn compute(&self) -> Result<PageRangeResult, PaginationError> {
        compute(self.total_items, self.page_size, self.current_page)
    }
}

/// What a pager needs to render: the entries plus the boundary flags for the
/// previous/next controls. Flags reflect the clamped page, not the raw input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRangeResult {
    pub entries: Vec<PageEntry>,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_items: u64,
    pub page_size: u64,
}

impl PageRangeResult {
    /// Target of the "previous" control, `None` on the first page.
    pub fn prev_page(&self) -> Option<u64> {
        if self.is_first_page {
            return None;
        }
        self.current_page.checked_sub(1).filter(|p| *p >= 1)
    }

    /// Target of the "next" control, `None` on the last page.
    pub fn next_page(&self) -> Option<u64> {
        if self.is_last_page {
            return None;
        }
        self.current_page.checked_add(1)
    }

    /// 1-based inclusive `(first, last)` item numbers shown on the current
    /// page, e.g. `(11, 20)` for "11-20 of 95". `None` when nothing is listed.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.total_items == 0 || self.page_size == 0 {
            return None;
        }
        let first = self
            .current_page
            .checked_sub(1)?
            .checked_mul(self.page_size)?
            .checked_add(1)?;
        if first > self.total_items {
            return None;
        }
        let last = first.saturating_add(self.page_size - 1).min(self.total_items);
        Some((first, last))
    }

    /// Number of selectable page buttons, ellipses excluded.
    pub fn page_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_ellipsis()).count()
    }

    /// Structural checks every computed result satisfies.
    pub fn is_well_formed(&self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let no_adjacent_ellipsis = self
            .entries
            .windows(2)
            .all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis()));
        let pages: Vec<u64> = self.entries.iter().filter_map(PageEntry::page_number).collect();
        let increasing = pages.windows(2).all(|w| w[0] < w[1]);
        let has_first = pages.first() == Some(&1);
        let has_last = self.total_pages == 1 || pages.last() == Some(&self.total_pages);
        no_adjacent_ellipsis
            && increasing
            && has_first
            && has_last
            && self.page_count() as u64 <= MAX_VISIBLE_PAGES
    }
}

/// `ceil(total_items / page_size)`, never less than one page.
pub fn total_pages(total_items: u64, page_size: u64) -> Result<u64, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::page_size(page_size));
    }
    Ok(total_items.div_ceil(page_size).max(1))
}

fn clamp_page(current_page: i64, total_pages: u64) -> u64 {
    if current_page < 1 {
        1
    } else {
        (current_page as u64).min(total_pages)
    }
}

/// Compute the page entries for `current_page` of `total_items` split into
/// pages of `page_size`.
///
/// Fails only when `page_size` is zero. An out-of-range `current_page` is
/// treated as the nearest valid page.
pub fn compute(
    total_items: u64,
    page_size: u64,
    current_page: i64,
) -> Result<PageRangeResult, PaginationError> {
    let total_pages = total_pages(total_items, page_size)?;
    let current = clamp_page(current_page, total_pages);
    if i64::try_from(current).map_or(true, |c| c != current_page) {
        debug!(
            requested = current_page,
            clamped = current,
            total_pages,
            "current page clamped into range"
        );
    }

    let result = PageRangeResult {
        entries: window(total_pages, current),
        is_first_page: current <= 1,
        is_last_page: current >= total_pages,
        total_pages,
        current_page: current,
        total_items,
        page_size,
    };
    debug_assert!(result.is_well_formed(), "malformed page range: {result:?}");
    Ok(result)
}

fn window(total_pages: u64, current: u64) -> Vec<PageEntry> {
    use PageEntry::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }
    let last = total_pages;
    if current <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(last)]
    } else if current >= last - 2 {
        vec![Page(1), Ellipsis, Page(last - 3), Page(last - 2), Page(last - 1), Page(last)]
    } else {
        vec![
            Page(1),
            Ellipsis,
            Page(current - 1),
            Page(current),
            Page(current + 1),
            Ellipsis,
            Page(last),
        ]
    }
}

/// Stateless handle for hosts that prefer an object to free functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageRangeCalculator;

impl PageRangeCalculator {
    pub fn compute(
        &self,
        total_items: u64,
        page_size: u64,
        current_page: i64,
    ) -> Result<PageRangeResult, PaginationError> {
        compute(total_items, page_size, current_page)
    }

    pub fn compute_state(&self, state: &PaginationState) -> Result<PageRangeResult, PaginationError> {
        state.compute()
    }
}
