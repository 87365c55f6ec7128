use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use tokio::sync::Mutex;
use twilight_http::Client;

use pager_utils::pagination::{
    ClampNotifier, DEFAULT_TIMEOUT_SECS, PaginationResult, range::DEFAULT_SIBLING_COUNT,
};

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    /// Seconds a pagination session stays interactive.
    pub pagination_timeout_secs: u64,
    /// Sibling count used by stories that do not set their own.
    pub default_sibling_count: i64,
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable `{0}`")]
    Missing(&'static str),
    #[error("environment variable `{name}` is not a valid number: `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;

        let pagination_timeout_secs =
            parse_or(&lookup, "PAGINATION_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let default_sibling_count =
            parse_or(&lookup, "PAGINATION_SIBLING_COUNT", DEFAULT_SIBLING_COUNT)?;

        Ok(Self {
            discord_token,
            pagination_timeout_secs,
            default_sibling_count,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

type NotifierKey = (u64, String);

/// Clamp notifiers keyed by user and command.
///
/// An entry only lives while its owner is sitting on a clamped input; the
/// first unclamped result drops it again.
#[derive(Debug, Default)]
pub struct ClampNotices {
    notifiers: Mutex<HashMap<NotifierKey, ClampNotifier>>,
}

impl ClampNotices {
    /// Feed a committed pagination result to the notifier owned by `user_id` for `command`.
    ///
    /// Returns the corrected page the first time a given clamped input is seen.
    pub async fn observe(
        &self,
        user_id: u64,
        command: &str,
        result: &PaginationResult,
    ) -> Option<usize> {
        let key = (user_id, command.to_owned());
        let mut notifiers = self.notifiers.lock().await;

        if result.corrected_current.is_none() {
            notifiers.remove(&key);
            return None;
        }

        notifiers.entry(key).or_default().observe(result)
    }

    /// Number of keys currently holding a clamped input.
    pub async fn tracked(&self) -> usize {
        self.notifiers.lock().await.len()
    }
}

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub config: Arc<Config>,
    pub clamp_notices: Arc<ClampNotices>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
            clamp_notices: Arc::default(),
        }
    }

    /// See [`ClampNotices::observe`].
    pub async fn observe_clamp(
        &self,
        user_id: u64,
        command: &str,
        result: &PaginationResult,
    ) -> Option<usize> {
        self.clamp_notices.observe(user_id, command, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pager_utils::pagination::{PaginationRequest, compute_range};

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_absent() {
        let config = Config::from_lookup(lookup(&[("DISCORD_TOKEN", "abc")])).expect("config");
        assert_eq!(config.discord_token, "abc");
        assert_eq!(config.pagination_timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.default_sibling_count, DEFAULT_SIBLING_COUNT);
    }

    #[test]
    fn token_is_required() {
        assert!(matches!(
            Config::from_lookup(lookup(&[("DISCORD_TOKEN", "  ")])),
            Err(ConfigError::Missing("DISCORD_TOKEN"))
        ));
    }

    #[test]
    fn invalid_numbers_are_reported() {
        let result = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("PAGINATION_TIMEOUT_SECS", "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber {
                name: "PAGINATION_TIMEOUT_SECS",
                ..
            })
        ));
    }

    fn clamped(current: i64, total: i64) -> PaginationResult {
        compute_range(PaginationRequest::new(current, total))
    }

    #[tokio::test]
    async fn clamp_reported_once_per_user_and_story() {
        let notices = ClampNotices::default();
        let result = clamped(15, 10);

        assert_eq!(notices.observe(1, "pagination|default", &result).await, Some(10));
        assert_eq!(notices.observe(1, "pagination|default", &result).await, None);

        assert_eq!(notices.observe(2, "pagination|default", &result).await, Some(10));
        assert_eq!(notices.observe(1, "pagination|large", &result).await, Some(10));
        assert_eq!(notices.observe(1, "pagination|default", &result).await, None);
        assert_eq!(notices.tracked().await, 3);
    }

    #[tokio::test]
    async fn unclamped_result_drops_the_entry() {
        let notices = ClampNotices::default();

        assert_eq!(notices.observe(1, "pagination|default", &clamped(15, 10)).await, Some(10));
        assert_eq!(notices.tracked().await, 1);

        assert_eq!(notices.observe(1, "pagination|default", &clamped(3, 10)).await, None);
        assert_eq!(notices.tracked().await, 0);

        assert_eq!(notices.observe(1, "pagination|default", &clamped(15, 10)).await, Some(10));
    }

    #[tokio::test]
    async fn unclamped_results_never_allocate_entries() {
        let notices = ClampNotices::default();
        for user in 0..50 {
            assert_eq!(notices.observe(user, "pagination|default", &clamped(2, 10)).await, None);
        }
        assert_eq!(notices.tracked().await, 0);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("DISCORD_TOKEN", "abc"),
            ("PAGINATION_TIMEOUT_SECS", "300"),
            ("PAGINATION_SIBLING_COUNT", "2"),
        ]))
        .expect("config");
        assert_eq!(config.pagination_timeout_secs, 300);
        assert_eq!(config.default_sibling_count, 2);
    }
}
