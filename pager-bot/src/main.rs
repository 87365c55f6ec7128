use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use pager_commands::{handle_interaction, handle_message};
use pager_core::{Config, Context};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    let token = config.discord_token.clone();
    info!(
        timeout_secs = config.pagination_timeout_secs,
        sibling_count = config.default_sibling_count,
        "configuration loaded"
    );

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let ctx = Context::new(Arc::clone(&http), config);

    let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::MESSAGE_CONTENT;
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    info!("pagination gallery is connecting...");

    while let Some(item) = shard.next_event(EventTypeFlags::all()).await {
        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        let outcome = match event {
            Event::Ready(_) => {
                info!("pagination gallery is ready");
                Ok(())
            }
            Event::MessageCreate(msg) => handle_message(ctx.clone(), msg).await,
            Event::InteractionCreate(interaction) => {
                handle_interaction(ctx.clone(), interaction).await
            }
            _ => Ok(()),
        };

        if let Err(source) = outcome {
            error!(?source, "event handler failed");
        }
    }

    Ok(())
}
