pub mod gallery;

use twilight_model::{
    application::interaction::InteractionData,
    gateway::payload::incoming::{InteractionCreate, MessageCreate},
};

use pager_core::Context;
use pager_utils::COMMAND_PREFIX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InteractionRoute {
    PaginationButtons,
}

fn route_interaction(custom_id: &str) -> Option<InteractionRoute> {
    const ROUTES: [(&str, InteractionRoute); 1] =
        [("pg:pagination", InteractionRoute::PaginationButtons)];

    ROUTES
        .into_iter()
        .find_map(|(prefix, route)| custom_id.starts_with(prefix).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[gallery::pagination::META, gallery::stories_list::META];

/// Split a prefixed message into a lowercase command, first argument and remaining text.
fn split_command(content: &str) -> Option<(String, Option<&str>, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();
    let mut command_and_rest = content.splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let (arg1, arg_tail) = match rest {
        Some(value) => {
            let mut args = value.splitn(2, char::is_whitespace);
            let first = args.next().filter(|arg| !arg.is_empty());
            let tail = args
                .next()
                .map(str::trim)
                .filter(|remaining| !remaining.is_empty());
            (first, tail)
        }
        None => (None, None),
    };

    Some((cmd, arg1, arg_tail))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, arg1, arg_tail)) = split_command(&content) else {
        return Ok(());
    };

    match cmd.as_str() {
        "pagination" => gallery::pagination::run(ctx.clone(), msg, arg1, arg_tail).await?,
        "stories" => gallery::stories_list::run(ctx.clone(), msg).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    let custom_id = match interaction.data.as_ref() {
        Some(InteractionData::MessageComponent(data)) => data.custom_id.clone(),
        _ => return Ok(()),
    };

    let Some(route) = route_interaction(&custom_id) else {
        return Ok(());
    };

    match route {
        InteractionRoute::PaginationButtons => {
            let _handled =
                gallery::pagination::handle_pagination_interaction(ctx.clone(), interaction)
                    .await?;
        }
    }

    Ok(())
}
