//! Presentation-level pagination controls built on top of the range computer.

use super::range::{
    DEFAULT_SIBLING_COUNT, PageToken, PaginationRequest, PaginationResult, compute_range,
};

/// Size of the page buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl PageButtonSize {
    /// Parse the lowercase name used in commands.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}

/// Display options of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationOptions {
    pub sibling_count: i64,
    pub max_pages: Option<i64>,
    /// Render previous/next controls at all.
    pub show_controls: bool,
    /// Render previous/next controls but never let them be pressed.
    pub disable_controls: bool,
    pub page_button_size: PageButtonSize,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            max_pages: None,
            show_controls: true,
            disable_controls: false,
            page_button_size: PageButtonSize::default(),
        }
    }
}

/// One pressable or static slot of a pagination control, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlItem {
    Previous { target: usize, disabled: bool },
    Page { page: usize, selected: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

/// Fully resolved pagination control ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub range: PaginationResult,
    pub items: Vec<ControlItem>,
    /// Options the control was resolved with.
    pub options: PaginationOptions,
}

impl PaginationControls {
    /// Resolve the control for a requested page.
    pub fn build(current: i64, total: i64, options: &PaginationOptions) -> Self {
        let range = compute_range(
            PaginationRequest::new(current, total)
                .sibling_count(options.sibling_count)
                .max_pages(options.max_pages),
        );

        let items = if range.is_empty() {
            Vec::new()
        } else {
            control_items(&range, options)
        };

        Self {
            range,
            items,
            options: *options,
        }
    }

    /// Re-resolve the same request with at most `max_siblings` siblings.
    ///
    /// Returns `None` when the control is already within the limit.
    pub fn with_sibling_cap(&self, max_siblings: i64) -> Option<Self> {
        if self.options.sibling_count <= max_siblings {
            return None;
        }

        let options = PaginationOptions {
            sibling_count: max_siblings,
            ..self.options
        };
        let total = i64::try_from(self.range.total).unwrap_or(i64::MAX);
        Some(Self::build(self.range.requested, total, &options))
    }

    /// Effective current page.
    pub fn current(&self) -> usize {
        self.range.current
    }

    /// Effective total page count.
    pub fn total(&self) -> usize {
        self.range.total
    }

    /// Check a page change requested through this control.
    pub fn request_page(&self, target: usize) -> Result<usize, PageChangeRejection> {
        validate_page_change(target, self.current(), self.total())
    }
}

fn control_items(range: &PaginationResult, options: &PaginationOptions) -> Vec<ControlItem> {
    let mut items = Vec::with_capacity(range.tokens.len() + 2);

    if options.show_controls {
        items.push(ControlItem::Previous {
            target: range.current.saturating_sub(1).max(1),
            disabled: options.disable_controls || !range.has_previous(),
        });
    }

    items.extend(range.tokens.iter().map(|token| match *token {
        PageToken::Page(page) => ControlItem::Page {
            page,
            selected: page == range.current,
        },
        PageToken::Ellipsis => ControlItem::Ellipsis,
    }));

    if options.show_controls {
        items.push(ControlItem::Next {
            target: (range.current + 1).min(range.total),
            disabled: options.disable_controls || !range.has_next(),
        });
    }

    items
}

/// Why a requested page change was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChangeRejection {
    /// Target is outside `1..=total`.
    OutOfRange,
    /// Target is the page already shown.
    AlreadyCurrent,
}

/// Accept a page change only when it lands on a different, existing page.
pub fn validate_page_change(
    target: usize,
    current: usize,
    total: usize,
) -> Result<usize, PageChangeRejection> {
    if target == 0 || target > total {
        return Err(PageChangeRejection::OutOfRange);
    }

    if target == current {
        return Err(PageChangeRejection::AlreadyCurrent);
    }

    Ok(target)
}
