//! Interaction validation orchestration for pagination component handlers.

use tracing::debug;
use twilight_http::Client;
use twilight_model::application::interaction::InteractionData;
use twilight_model::gateway::payload::incoming::InteractionCreate;

use super::respond::{
    respond_already_current, respond_ephemeral_message, respond_expired, respond_invalid,
    respond_wrong_user,
};
use super::token::{PaginationToken, PaginationValidationError, parse_custom_id, validate_custom_id};

/// Outcome when validating whether an interaction belongs to a pagination command.
#[derive(Debug, Clone)]
pub enum PaginationInteractionValidation {
    /// Interaction does not target the given command's pagination buttons.
    NotForCommand,
    /// Interaction was invalid and already acknowledged with a user-facing response.
    HandledInvalid,
    /// Interaction is valid and contains parsed pagination data.
    Valid {
        actor_user_id: u64,
        token: PaginationToken,
    },
}

/// Whether a token command key belongs to a command family such as `pagination`.
///
/// Keys look like `pagination` or `pagination|<variant>`.
pub fn command_in_family(command: &str, family: &str) -> bool {
    command == family
        || command
            .strip_prefix(family)
            .is_some_and(|rest| rest.starts_with('|'))
}

/// Validate whether an interaction is a pagination component for a command family.
///
/// Returns:
/// - `NotForCommand` when the interaction should be ignored by this handler,
/// - `HandledInvalid` when it was invalid and already acknowledged,
/// - `Valid` when parsing and validation succeeded.
pub async fn validate_interaction_for_command_prefix(
    http: &Client,
    interaction: &InteractionCreate,
    command_prefix: &str,
) -> anyhow::Result<PaginationInteractionValidation> {
    let Some(InteractionData::MessageComponent(component_data)) = interaction.data.as_ref() else {
        return Ok(PaginationInteractionValidation::NotForCommand);
    };

    let raw_custom_id = &component_data.custom_id;
    let Some(token_preview) = parse_custom_id(raw_custom_id) else {
        return Ok(PaginationInteractionValidation::NotForCommand);
    };

    if !command_in_family(&token_preview.command, command_prefix) {
        return Ok(PaginationInteractionValidation::NotForCommand);
    }

    let Some(actor_user_id) = interaction.author_id().map(|id| id.get()) else {
        respond_ephemeral_message(http, interaction, "Unable to determine interaction user.")
            .await?;
        return Ok(PaginationInteractionValidation::HandledInvalid);
    };

    match validate_custom_id(raw_custom_id, &token_preview.command, actor_user_id) {
        Ok(token) => Ok(PaginationInteractionValidation::Valid {
            actor_user_id,
            token,
        }),
        Err(reason) => {
            debug!(?reason, custom_id = %raw_custom_id, "rejected pagination press");
            match reason {
                PaginationValidationError::WrongUser => respond_wrong_user(http, interaction).await?,
                PaginationValidationError::Expired => respond_expired(http, interaction).await?,
                PaginationValidationError::AlreadyCurrent => {
                    respond_already_current(http, interaction, token_preview.current).await?
                }
                _ => respond_invalid(http, interaction).await?,
            }
            Ok(PaginationInteractionValidation::HandledInvalid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_matching() {
        assert!(command_in_family("pagination", "pagination"));
        assert!(command_in_family("pagination|large", "pagination"));
        assert!(!command_in_family("paginationx", "pagination"));
        assert!(!command_in_family("help|utility", "pagination"));
    }
}
