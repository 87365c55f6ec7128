//! Embed and component composition helpers for paginated views.

use twilight_model::channel::message::component::Component;
use twilight_model::channel::message::embed::Embed;

use crate::embed::build_paginated_embed_with_footer_note;

use super::components::{MAX_RENDERED_SIBLINGS, build_nav_components};
use super::controls::{PaginationControls, PaginationOptions};

/// A paginated view request as seen by command handlers.
#[derive(Debug, Clone, Copy)]
pub struct PaginatedView<'a> {
    /// Command key carried in button IDs.
    pub command: &'a str,
    pub title: &'a str,
    /// Requested page, clamped during rendering.
    pub page: i64,
    pub total_pages: i64,
    pub options: PaginationOptions,
    pub owner_user_id: u64,
    pub timeout_secs: u64,
}

impl PaginatedView<'_> {
    /// Resolve the control this view renders, with the sibling count capped
    /// to what fits in a message.
    pub fn controls(&self) -> PaginationControls {
        let options = PaginationOptions {
            sibling_count: self.options.sibling_count.min(MAX_RENDERED_SIBLINGS),
            ..self.options
        };
        PaginationControls::build(self.page, self.total_pages, &options)
    }
}

/// Build a paginated embed + navigation controls.
///
/// `describe` renders the embed body for the effective (clamped) page. The
/// resolved control is returned too so callers can read the effective page and
/// any clamp correction.
pub fn build_paginated_view(
    view: &PaginatedView<'_>,
    describe: impl FnOnce(usize) -> String,
    footer_note: Option<&str>,
) -> anyhow::Result<(Embed, Vec<Component>, PaginationControls)> {
    let controls = view.controls();

    let embed = build_paginated_embed_with_footer_note(
        view.title,
        describe(controls.current()),
        controls.current(),
        controls.total(),
        footer_note,
    )?;

    let components = build_nav_components(
        view.command,
        &controls,
        view.owner_user_id,
        view.timeout_secs,
    );

    Ok((embed, components, controls))
}
