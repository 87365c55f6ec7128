//! Pagination UI component builders (previous, page, ellipsis and next buttons).

use tracing::debug;
use twilight_model::channel::message::component::{ActionRow, Button, ButtonStyle, Component};

use super::controls::{ControlItem, PageButtonSize, PaginationControls};
use super::token::{PaginationAction, build_custom_id, now_unix_secs};

/// Discord allows at most five buttons per action row.
pub const MAX_BUTTONS_PER_ROW: usize = 5;
/// Discord allows at most five action rows per message.
pub const MAX_ROWS: usize = 5;
/// Largest sibling count whose control still fits in [`MAX_ROWS`] rows.
///
/// `2 * siblings + 5` page slots plus two controls must fit in 25 buttons.
pub const MAX_RENDERED_SIBLINGS: i64 = 9;

const ELLIPSIS_LABEL: &str = "…";
const PREVIOUS_LABEL: &str = "◀";
const NEXT_LABEL: &str = "▶";

/// Build the button rows for a resolved pagination control.
///
/// Controls wider than [`MAX_RENDERED_SIBLINGS`] are re-resolved with the
/// capped sibling count so every item still gets a button.
/// Returns no components when there is at most one page.
pub fn build_nav_components(
    command: &str,
    controls: &PaginationControls,
    user_id: u64,
    timeout_secs: u64,
) -> Vec<Component> {
    let capped;
    let controls = match controls.with_sibling_cap(MAX_RENDERED_SIBLINGS) {
        Some(narrowed) => {
            debug!(
                requested = controls.options.sibling_count,
                rendered = MAX_RENDERED_SIBLINGS,
                "capped pagination siblings to fit message components"
            );
            capped = narrowed;
            &capped
        }
        None => controls,
    };

    if controls.total() <= 1 {
        return vec![];
    }

    let expires_at = now_unix_secs().saturating_add(timeout_secs);
    let current = controls.current();
    let total = controls.total();
    let custom_id = |action, target| {
        build_custom_id(command, action, target, current, total, user_id, expires_at)
    };

    let mut last_page = 0;
    let buttons: Vec<Component> = controls
        .items
        .iter()
        .map(|item| match *item {
            ControlItem::Previous { target, disabled } => nav_button(
                custom_id(PaginationAction::Prev, target),
                PREVIOUS_LABEL,
                disabled,
            ),
            ControlItem::Next { target, disabled } => {
                nav_button(custom_id(PaginationAction::Next, target), NEXT_LABEL, disabled)
            }
            ControlItem::Page { page, selected } => {
                last_page = page;
                Component::Button(Button {
                    id: None,
                    custom_id: Some(custom_id(PaginationAction::Page, page)),
                    disabled: false,
                    emoji: None,
                    label: Some(sized_label(&page.to_string(), controls.options.page_button_size)),
                    style: if selected {
                        ButtonStyle::Primary
                    } else {
                        ButtonStyle::Secondary
                    },
                    url: None,
                    sku_id: None,
                })
            }
            // The first hidden page keeps each gap ID unique within the message.
            ControlItem::Ellipsis => Component::Button(Button {
                id: None,
                custom_id: Some(custom_id(PaginationAction::Gap, last_page + 1)),
                disabled: true,
                emoji: None,
                label: Some(sized_label(ELLIPSIS_LABEL, controls.options.page_button_size)),
                style: ButtonStyle::Secondary,
                url: None,
                sku_id: None,
            }),
        })
        .collect();

    pack_rows(buttons)
}

fn nav_button(custom_id: String, label: &str, disabled: bool) -> Component {
    Component::Button(Button {
        id: None,
        custom_id: Some(custom_id),
        disabled,
        emoji: None,
        label: Some(label.to_owned()),
        style: ButtonStyle::Secondary,
        url: None,
        sku_id: None,
    })
}

/// Pad a page label with figure spaces so button widths follow the size setting.
fn sized_label(label: &str, size: PageButtonSize) -> String {
    const PAD: char = '\u{2007}';
    match size {
        PageButtonSize::Small => label.to_owned(),
        PageButtonSize::Medium => format!("{PAD}{label}{PAD}"),
        PageButtonSize::Large => format!("{PAD}{PAD}{label}{PAD}{PAD}"),
    }
}

fn pack_rows(buttons: Vec<Component>) -> Vec<Component> {
    let mut rows = Vec::new();
    let mut buttons = buttons.into_iter().peekable();

    while buttons.peek().is_some() && rows.len() < MAX_ROWS {
        let components: Vec<Component> = buttons.by_ref().take(MAX_BUTTONS_PER_ROW).collect();
        rows.push(Component::ActionRow(ActionRow {
            id: None,
            components,
        }));
    }

    rows
}
