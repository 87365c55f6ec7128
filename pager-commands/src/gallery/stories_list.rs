use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::CommandMeta;
use crate::gallery::embeds::{commands_overview, stories_overview};
use pager_core::Context;
use pager_utils::embed::build_paginated_embed_with_footer_note;

pub const META: CommandMeta = CommandMeta {
    name: "stories",
    desc: "Lists the pagination stories in the gallery.",
    usage: "!stories",
};

/// List every story key and the gallery commands.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let embed = build_paginated_embed_with_footer_note(
        "Pagination Stories",
        format!("{}\n\n{}", stories_overview(), commands_overview()),
        1,
        1,
        Some("Open one with !pagination <story> [page]"),
    )?;

    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}
