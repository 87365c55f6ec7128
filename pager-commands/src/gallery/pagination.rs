use std::sync::Arc;

use tracing::{debug, info};
use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use crate::CommandMeta;
use crate::gallery::embeds::{page_corrected_message, unknown_story_message};
use crate::gallery::stories::{COMMAND_FAMILY, Story};
use pager_core::Context;
use pager_utils::pagination::{
    PaginatedView, PaginationInteractionValidation, build_paginated_view,
    respond::respond_invalid, send_paginated_message, update_paginated_interaction_message,
    validate_interaction_for_command_prefix,
};

pub const META: CommandMeta = CommandMeta {
    name: "pagination",
    desc: "Show a pagination story from the component gallery.",
    usage: "!pagination [story] [page]",
};

/// Parsed `!pagination` arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StoryRequest<'a> {
    pub story_key: &'a str,
    /// Raw page, clamped later. `None` opens the story's initial page.
    pub page: Option<i64>,
}

/// Split `[story] [page]` arguments.
///
/// A lone number is a page of the default story. Returns `None` when the page
/// argument is not an integer, including a lone argument that looks like a
/// number but is not one (`1.5`, `2e3`).
pub(crate) fn parse_story_request<'a>(
    arg1: Option<&'a str>,
    arg_tail: Option<&'a str>,
) -> Option<StoryRequest<'a>> {
    let parse_page = |raw: &str| raw.trim().parse::<i64>().ok();

    match (arg1, arg_tail) {
        (None, _) => Some(StoryRequest {
            story_key: "default",
            page: None,
        }),
        (Some(first), None) => match parse_page(first) {
            Some(page) => Some(StoryRequest {
                story_key: "default",
                page: Some(page),
            }),
            None if looks_numeric(first) => None,
            None => Some(StoryRequest {
                story_key: first,
                page: None,
            }),
        },
        (Some(first), Some(tail)) => Some(StoryRequest {
            story_key: first,
            page: Some(parse_page(tail)?),
        }),
    }
}

fn looks_numeric(raw: &str) -> bool {
    raw.trim()
        .trim_start_matches(['+', '-'])
        .starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn story_view<'a>(
    ctx: &Context,
    story: &'a Story,
    command: &'a str,
    page: i64,
    owner: u64,
) -> PaginatedView<'a> {
    PaginatedView {
        command,
        title: story.title,
        page,
        total_pages: story.total_pages,
        options: story.options(ctx.config.default_sibling_count),
        owner_user_id: owner,
        timeout_secs: ctx.config.pagination_timeout_secs,
    }
}

/// Render a gallery story at the requested page.
///
/// Out-of-range pages are clamped; the correction is reported in a follow-up
/// message once the view has been sent.
pub async fn run(
    ctx: Context,
    msg: Box<MessageCreate>,
    arg1: Option<&str>,
    arg_tail: Option<&str>,
) -> anyhow::Result<()> {
    let http = &ctx.http;

    let Some(request) = parse_story_request(arg1, arg_tail) else {
        let usage = format!("Usage: `{}`", META.usage);
        http.create_message(msg.channel_id).content(&usage).await?;
        return Ok(());
    };

    let Some(story) = Story::find(request.story_key) else {
        let out = unknown_story_message(request.story_key);
        http.create_message(msg.channel_id).content(&out).await?;
        return Ok(());
    };

    let owner = msg.author.id.get();
    let command = story.command();
    let page = request.page.unwrap_or(story.initial_page);
    let view = story_view(&ctx, story, &command, page, owner);

    let (embed, components, controls) =
        build_paginated_view(&view, |page| story.description(page), None)?;

    send_paginated_message(
        Arc::clone(&ctx.http),
        msg.channel_id,
        embed,
        components,
        view.timeout_secs,
    )
    .await?;

    info!(story = story.key, page = controls.current(), "opened pagination story");

    if let Some(shown) = ctx.observe_clamp(owner, &command, &controls.range).await {
        let out = page_corrected_message(story, page, shown);
        http.create_message(msg.channel_id).content(&out).await?;
    }

    Ok(())
}

/// Handle navigation presses on gallery stories.
pub async fn handle_pagination_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<bool> {
    let http = &ctx.http;
    let (actor_id, token) =
        match validate_interaction_for_command_prefix(http, &interaction, COMMAND_FAMILY).await? {
            PaginationInteractionValidation::NotForCommand => return Ok(false),
            PaginationInteractionValidation::HandledInvalid => return Ok(true),
            PaginationInteractionValidation::Valid {
                actor_user_id,
                token,
            } => (actor_user_id, token),
        };

    let Some(story) = Story::from_command(&token.command) else {
        respond_invalid(http, &interaction).await?;
        return Ok(true);
    };

    debug!(
        story = story.key,
        action = token.action.as_str(),
        from = token.current,
        to = token.page,
        "pagination page change"
    );

    let target = i64::try_from(token.page).unwrap_or(i64::MAX);
    let view = story_view(&ctx, story, &token.command, target, actor_id);
    let (embed, components, controls) =
        build_paginated_view(&view, |page| story.description(page), None)?;

    update_paginated_interaction_message(
        Arc::clone(&ctx.http),
        &interaction,
        embed,
        components,
        view.timeout_secs,
    )
    .await?;

    // Landing on a valid page clears any pending clamp report.
    let _ = ctx.observe_clamp(actor_id, &token.command, &controls.range).await;

    Ok(true)
}
