//! Stateless pagination token encoding, parsing, and validation.
//!
//! Every navigation button carries its whole session in the custom ID:
//! `pg:{command}:{action}:{target}:{current}:{total}:{user_id}:{expires_at}`.

use std::time::{SystemTime, UNIX_EPOCH};

use super::controls::{PageChangeRejection, validate_page_change};

const TOKEN_PREFIX: &str = "pg";

/// Button role encoded in a custom ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationAction {
    Prev,
    Next,
    Page,
    /// Inert ellipsis slot. The target field only keeps the ID unique.
    Gap,
}

impl PaginationAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Page => "page",
            Self::Gap => "gap",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "prev" => Some(Self::Prev),
            "next" => Some(Self::Next),
            "page" => Some(Self::Page),
            "gap" => Some(Self::Gap),
            _ => None,
        }
    }
}

/// Parsed pagination token data from a button custom ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationToken {
    /// Logical command name (e.g. `pagination|default`).
    pub command: String,
    pub action: PaginationAction,
    /// Requested page, 1-based.
    pub page: usize,
    /// Page shown when the button was rendered.
    pub current: usize,
    /// Total page count when the button was rendered.
    pub total_pages: usize,
    /// User ID that owns this pagination session.
    pub user_id: u64,
    /// Expiry timestamp (unix seconds).
    pub expires_at: u64,
}

/// Validation outcome for pagination button presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationValidationError {
    Invalid,
    WrongCommand,
    WrongUser,
    Expired,
    OutOfRange,
    AlreadyCurrent,
}

impl From<PageChangeRejection> for PaginationValidationError {
    fn from(rejection: PageChangeRejection) -> Self {
        match rejection {
            PageChangeRejection::OutOfRange => Self::OutOfRange,
            PageChangeRejection::AlreadyCurrent => Self::AlreadyCurrent,
        }
    }
}

/// Build a compact custom ID carrying stateless pagination state.
pub fn build_custom_id(
    command: &str,
    action: PaginationAction,
    target_page: usize,
    current_page: usize,
    total_pages: usize,
    user_id: u64,
    expires_at: u64,
) -> String {
    format!(
        "{TOKEN_PREFIX}:{command}:{}:{target_page}:{current_page}:{total_pages}:{user_id}:{expires_at}",
        action.as_str()
    )
}

/// Parse a pagination custom ID.
pub fn parse_custom_id(custom_id: &str) -> Option<PaginationToken> {
    let mut parts = custom_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let command = parts.next()?.to_owned();
    let action = PaginationAction::parse(parts.next()?)?;
    let page = parts.next()?.parse::<usize>().ok()?;
    let current = parts.next()?.parse::<usize>().ok()?;
    let total_pages = parts.next()?.parse::<usize>().ok()?;
    let user_id = parts.next()?.parse::<u64>().ok()?;
    let expires_at = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some(PaginationToken {
        command,
        action,
        page,
        current,
        total_pages,
        user_id,
        expires_at,
    })
}

/// Validate a pagination token for command/user/expiry/page bounds.
pub fn validate_custom_id(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
) -> Result<PaginationToken, PaginationValidationError> {
    validate_custom_id_at(custom_id, expected_command, actor_user_id, now_unix_secs())
}

fn validate_custom_id_at(
    custom_id: &str,
    expected_command: &str,
    actor_user_id: u64,
    now: u64,
) -> Result<PaginationToken, PaginationValidationError> {
    let token = parse_custom_id(custom_id).ok_or(PaginationValidationError::Invalid)?;

    if token.command != expected_command {
        return Err(PaginationValidationError::WrongCommand);
    }

    if token.user_id != actor_user_id {
        return Err(PaginationValidationError::WrongUser);
    }

    if token.action == PaginationAction::Gap {
        return Err(PaginationValidationError::Invalid);
    }

    if now > token.expires_at {
        return Err(PaginationValidationError::Expired);
    }

    validate_page_change(token.page, token.current, token.total_pages)?;

    Ok(token)
}

pub(crate) fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn id(action: PaginationAction, target: usize, current: usize) -> String {
        build_custom_id("pagination|default", action, target, current, 10, 42, NOW + 60)
    }

    #[test]
    fn parses_built_id() {
        let token = parse_custom_id(&id(PaginationAction::Next, 4, 3)).expect("token");
        assert_eq!(token.command, "pagination|default");
        assert_eq!(token.action, PaginationAction::Next);
        assert_eq!(token.page, 4);
        assert_eq!(token.current, 3);
        assert_eq!(token.total_pages, 10);
        assert_eq!(token.user_id, 42);
    }

    #[test]
    fn rejects_foreign_and_malformed_ids() {
        assert_eq!(parse_custom_id("terminate:1:2"), None);
        assert_eq!(parse_custom_id("pg:pagination:jump:1:1:2:3:4"), None);
        assert_eq!(parse_custom_id("pg:pagination:page:1:1:2:3:4:extra"), None);
        assert_eq!(parse_custom_id("pg:pagination:page:x:1:2:3:4"), None);
    }

    #[test]
    fn validation_checks_owner_and_command() {
        let custom_id = id(PaginationAction::Page, 5, 3);
        assert_eq!(
            validate_custom_id_at(&custom_id, "pagination|large", 42, NOW),
            Err(PaginationValidationError::WrongCommand)
        );
        assert_eq!(
            validate_custom_id_at(&custom_id, "pagination|default", 7, NOW),
            Err(PaginationValidationError::WrongUser)
        );
        assert!(validate_custom_id_at(&custom_id, "pagination|default", 42, NOW).is_ok());
    }

    #[test]
    fn validation_checks_expiry() {
        let custom_id = id(PaginationAction::Page, 5, 3);
        assert_eq!(
            validate_custom_id_at(&custom_id, "pagination|default", 42, NOW + 61),
            Err(PaginationValidationError::Expired)
        );
    }

    #[test]
    fn validation_rejects_gap_and_current_page() {
        assert_eq!(
            validate_custom_id_at(&id(PaginationAction::Gap, 2, 3), "pagination|default", 42, NOW),
            Err(PaginationValidationError::Invalid)
        );
        assert_eq!(
            validate_custom_id_at(&id(PaginationAction::Page, 3, 3), "pagination|default", 42, NOW),
            Err(PaginationValidationError::AlreadyCurrent)
        );
        assert_eq!(
            validate_custom_id_at(&id(PaginationAction::Next, 11, 10), "pagination|default", 42, NOW),
            Err(PaginationValidationError::OutOfRange)
        );
    }
}
