//! Pure pagination math and page-window shaping helpers.

/// Apply an optional page cap to a caller-supplied total.
///
/// A cap below 1 still allows a single page. Totals at or below zero pass
/// through untouched so callers can tell "nothing to show" apart.
pub fn effective_total(total: i64, max_pages: Option<i64>) -> i64 {
    match max_pages {
        Some(cap) => total.min(cap.max(1)),
        None => total,
    }
}

/// Return start/end indices for a page window.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = start.saturating_add(safe_per_page).min(total_items);
    (start.min(total_items), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_total_applies_cap() {
        assert_eq!(effective_total(20, Some(10)), 10);
        assert_eq!(effective_total(5, Some(10)), 5);
        assert_eq!(effective_total(20, Some(0)), 1);
        assert_eq!(effective_total(20, None), 20);
        assert_eq!(effective_total(-3, Some(4)), -3);
    }

    #[test]
    fn page_window_stays_inside_items() {
        assert_eq!(page_window(24, 5, 1), (0, 5));
        assert_eq!(page_window(24, 5, 5), (20, 24));
        assert_eq!(page_window(24, 5, 9), (24, 24));
    }
}
