//! Stable facade for pagination helpers used by command handlers.

/// Default timeout for button-based pagination sessions.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod components;
pub mod controls;
pub mod interaction;
pub mod notify;
mod page;
pub mod range;
pub mod respond;
pub mod token;
mod view;

pub use components::{MAX_RENDERED_SIBLINGS, build_nav_components};
pub use controls::{
    ControlItem, PageButtonSize, PageChangeRejection, PaginationControls, PaginationOptions,
    validate_page_change,
};
pub use interaction::{
    PaginationInteractionValidation, command_in_family, validate_interaction_for_command_prefix,
};
pub use notify::ClampNotifier;
pub use page::{effective_total, page_window};
pub use range::{PageToken, PaginationRequest, PaginationResult, compute_range};
pub use respond::{send_paginated_message, update_paginated_interaction_message};
pub use token::{PaginationAction, PaginationToken, PaginationValidationError};
pub use view::{PaginatedView, build_paginated_view};
