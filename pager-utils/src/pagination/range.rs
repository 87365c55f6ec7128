//! Page range computation with ellipsis collapsing.
//!
//! Produces the compressed list of page tokens a pagination control renders:
//! the first and last page, the current page and `sibling_count` neighbours on
//! each side stay visible, and far-away runs collapse into at most two
//! [`PageToken::Ellipsis`] markers.

use super::page::effective_total;

/// Sibling count used when a caller does not pick one.
pub const DEFAULT_SIBLING_COUNT: i64 = 1;

/// Slots reserved besides the sibling window: first, last, current and two ellipses.
const FIXED_SLOTS: usize = 5;

/// One element of a rendered page sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A pressable page, 1-based.
    Page(usize),
    /// A collapsed run of hidden pages.
    Ellipsis,
}

impl PageToken {
    /// Page number when this token is numeric.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

/// Raw caller input for a range computation.
///
/// None of the fields are validated up front; everything is normalized by
/// [`compute_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationRequest {
    /// Desired current page, 1-based. Clamped, never rejected.
    pub current: i64,
    /// Total pages known by the caller. `<= 0` means nothing to show.
    pub total: i64,
    /// Pages shown on each side of the current page. Negative counts as 0.
    pub sibling_count: i64,
    /// Optional cap on the pages actually displayed. Values below 1 count as 1.
    pub max_pages: Option<i64>,
}

impl PaginationRequest {
    /// Request with the default sibling count and no page cap.
    pub fn new(current: i64, total: i64) -> Self {
        Self {
            current,
            total,
            sibling_count: DEFAULT_SIBLING_COUNT,
            max_pages: None,
        }
    }

    /// Override the sibling window size.
    pub fn sibling_count(mut self, sibling_count: i64) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Cap the number of pages displayed.
    pub fn max_pages(mut self, max_pages: Option<i64>) -> Self {
        self.max_pages = max_pages;
        self
    }
}

/// Output of [`compute_range`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationResult {
    /// Tokens to render, in display order.
    pub tokens: Vec<PageToken>,
    /// Effective current page. `0` only when `total` is `0`.
    pub current: usize,
    /// Effective total after applying the page cap. `0` when nothing is shown.
    pub total: usize,
    /// Set when the requested page had to be clamped to `current`.
    ///
    /// Hosts report this back to whoever owns the page state after the result
    /// has been rendered, see [`super::notify::ClampNotifier`].
    pub corrected_current: Option<usize>,
    /// Raw requested page, kept so corrections can be deduplicated per input.
    pub requested: i64,
}

impl PaginationResult {
    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether a "previous" control would lead anywhere.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether a "next" control would lead anywhere.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

/// Compute the page tokens for a pagination control.
pub fn compute_range(request: PaginationRequest) -> PaginationResult {
    let total_raw = effective_total(request.total, request.max_pages);

    if total_raw <= 0 {
        // Any requested page is out of range for an empty control, but there
        // is no valid page to correct it to.
        return PaginationResult {
            tokens: Vec::new(),
            current: 0,
            total: 0,
            corrected_current: None,
            requested: request.current,
        };
    }

    let total = usize::try_from(total_raw).unwrap_or(usize::MAX);
    let current = usize::try_from(request.current.clamp(1, total_raw)).unwrap_or(1);
    let siblings = usize::try_from(request.sibling_count.max(0)).unwrap_or(usize::MAX);

    let corrected_current = (i64::try_from(current).ok() != Some(request.current)).then_some(current);

    PaginationResult {
        tokens: collapse(current, total, siblings),
        current,
        total,
        corrected_current,
        requested: request.current,
    }
}

fn collapse(current: usize, total: usize, siblings: usize) -> Vec<PageToken> {
    let total_slots = siblings.saturating_mul(2).saturating_add(FIXED_SLOTS);
    if total_slots >= total {
        return pages(1, total).collect();
    }

    let left_sibling = current.saturating_sub(siblings).max(1);
    let right_sibling = current.saturating_add(siblings).min(total);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total - 1;

    // Block shown next to a single ellipsis; matches the width of the
    // two-ellipsis layout (window plus both anchors).
    let edge_block = siblings * 2 + 3;

    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => pages(1, edge_block)
            .chain([PageToken::Ellipsis, PageToken::Page(total)])
            .collect(),
        (true, false) => [PageToken::Page(1), PageToken::Ellipsis]
            .into_iter()
            .chain(pages(total - edge_block + 1, total))
            .collect(),
        (true, true) => [PageToken::Page(1), PageToken::Ellipsis]
            .into_iter()
            .chain(pages(left_sibling, right_sibling))
            .chain([PageToken::Ellipsis, PageToken::Page(total)])
            .collect(),
        (false, false) => pages(1, total).collect(),
    }
}

fn pages(start: usize, end: usize) -> impl Iterator<Item = PageToken> {
    (start..=end).map(PageToken::Page)
}
