use crate::server::error::{config::ConfigError, AppError};

/// Token values shipped in example files that must never reach Discord.
const TOKEN_PLACEHOLDERS: &[&str] = &[
    "PASTE_YOUR_TOKEN_HERE",
    "PEGATU_TOKEN_AQUI",
    "your-bot-token",
    "changeme",
];

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Channel the counter message lives in.
    pub counter_channel_id: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `from_env` delegates here with `std::env::var`; tests pass a map instead.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let discord_bot_token = require("DISCORD_BOT_TOKEN")?;
        if TOKEN_PLACEHOLDERS
            .iter()
            .any(|placeholder| discord_bot_token.trim().eq_ignore_ascii_case(placeholder))
        {
            return Err(ConfigError::PlaceholderValue("DISCORD_BOT_TOKEN".to_string()).into());
        }

        let channel_id = require("COUNTER_CHANNEL_ID")?;
        let counter_channel_id = channel_id
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "COUNTER_CHANNEL_ID".to_string(),
                value: channel_id.clone(),
            })?;

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            discord_bot_token,
            counter_channel_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading a complete configuration.
    ///
    /// Expected: Ok with every field populated from the variable source
    #[test]
    fn loads_complete_configuration() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "MTIz.real.token"),
            ("COUNTER_CHANNEL_ID", "1427876160867536926"),
            ("DATABASE_URL", "sqlite://counter.db?mode=rwc"),
        ]))
        .unwrap();

        assert_eq!(config.discord_bot_token, "MTIz.real.token");
        assert_eq!(config.counter_channel_id, 1427876160867536926);
        assert_eq!(config.database_url, "sqlite://counter.db?mode=rwc");
    }

    /// Tests that a missing token aborts startup.
    ///
    /// Expected: Err(MissingEnvVar) naming DISCORD_BOT_TOKEN
    #[test]
    fn rejects_missing_token() {
        let result = Config::from_lookup(lookup_from(&[
            ("COUNTER_CHANNEL_ID", "1"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    /// Tests that an example placeholder token is refused.
    ///
    /// Expected: Err(PlaceholderValue)
    #[test]
    fn rejects_placeholder_token() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "PASTE_YOUR_TOKEN_HERE"),
            ("COUNTER_CHANNEL_ID", "1"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::PlaceholderValue(_)))
        ));
    }

    /// Tests that a non-numeric channel id is reported with its value.
    ///
    /// Expected: Err(InvalidEnvVar) for COUNTER_CHANNEL_ID
    #[test]
    fn rejects_non_numeric_channel_id() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "MTIz.real.token"),
            ("COUNTER_CHANNEL_ID", "general"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref value, .. })) if value == "general"
        ));
    }
}
