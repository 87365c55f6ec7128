//! Edge-triggered delivery of clamped-page corrections.

use super::range::PaginationResult;

/// Remembers which clamped input was last reported.
///
/// A host keeps one notifier per piece of page state it owns and feeds it each
/// committed [`PaginationResult`]. A correction comes out once per distinct
/// `(requested page, effective total)` pair; repeated identical inputs stay
/// silent until an unclamped result resets the memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClampNotifier {
    last_reported: Option<(i64, usize)>,
}

impl ClampNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the corrected page if this result needs reporting.
    pub fn observe(&mut self, result: &PaginationResult) -> Option<usize> {
        let Some(corrected) = result.corrected_current else {
            self.last_reported = None;
            return None;
        };

        let key = (result.requested, result.total);
        if self.last_reported == Some(key) {
            return None;
        }

        self.last_reported = Some(key);
        Some(corrected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::range::{PaginationRequest, compute_range};

    #[test]
    fn reports_clamp_once_per_input() {
        let mut notifier = ClampNotifier::new();
        let result = compute_range(PaginationRequest::new(15, 10));

        assert_eq!(notifier.observe(&result), Some(10));
        assert_eq!(notifier.observe(&result), None);
        assert_eq!(notifier.observe(&compute_range(PaginationRequest::new(15, 10))), None);
    }

    #[test]
    fn reports_again_when_total_changes() {
        let mut notifier = ClampNotifier::new();

        assert_eq!(notifier.observe(&compute_range(PaginationRequest::new(15, 10))), Some(10));
        assert_eq!(notifier.observe(&compute_range(PaginationRequest::new(15, 12))), Some(12));
    }

    #[test]
    fn unclamped_result_resets_memory() {
        let mut notifier = ClampNotifier::new();
        let clamped = compute_range(PaginationRequest::new(15, 10));

        assert_eq!(notifier.observe(&clamped), Some(10));
        assert_eq!(notifier.observe(&compute_range(PaginationRequest::new(4, 10))), None);
        assert_eq!(notifier.observe(&clamped), Some(10));
    }

    #[test]
    fn empty_results_never_report() {
        let mut notifier = ClampNotifier::new();
        assert_eq!(notifier.observe(&compute_range(PaginationRequest::new(3, 0))), None);
    }
}
