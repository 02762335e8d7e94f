use std::{env, fs, path::Path};

use crate::{
    domain::{ChannelId, UserId},
    errors::Error,
    Result,
};

/// Typed configuration for the relay.
///
/// Built once at process start and immutable afterwards; everything past
/// startup receives it by reference.
#[derive(Clone, Debug)]
pub struct Config {
    /// Bot API credential.
    pub bot_token: String,
    /// The sole user allowed to talk to the bot.
    pub owner_id: UserId,
    /// Destination channel for relayed media.
    pub target_channel: ChannelId,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("BOT_TOKEN").and_then(non_empty).ok_or_else(|| {
            Error::Config("BOT_TOKEN environment variable is required".to_string())
        })?;
        let owner_raw = env_str("OWNER_ID").and_then(non_empty).ok_or_else(|| {
            Error::Config("OWNER_ID environment variable is required".to_string())
        })?;
        let target_channel = env_str("TARGET_CHANNEL_ID")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TARGET_CHANNEL_ID environment variable is required".to_string())
            })?;

        let owner_id = owner_raw.trim().parse::<i64>().map_err(|_| {
            Error::Config("OWNER_ID must be an integer (Telegram user id)".to_string())
        })?;

        Ok(Self {
            bot_token,
            owner_id: UserId(owner_id),
            target_channel: ChannelId(target_channel),
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    fn clear_relay_env() {
        for key in ["BOT_TOKEN", "OWNER_ID", "TARGET_CHANNEL_ID"] {
            env::remove_var(key);
        }
    }

    // One test fn: the cases share process environment and must run
    // sequentially to avoid races.
    #[test]
    fn load_validates_environment() {
        clear_relay_env();
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));

        env::set_var("BOT_TOKEN", "12345:abcdef");
        env::set_var("OWNER_ID", "42");
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("TARGET_CHANNEL_ID"));

        env::set_var("TARGET_CHANNEL_ID", "@mychan");
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.bot_token, "12345:abcdef");
        assert_eq!(cfg.owner_id, UserId(42));
        assert_eq!(cfg.target_channel, ChannelId("@mychan".to_string()));

        env::set_var("OWNER_ID", "not-a-number");
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("integer"));

        // Whitespace-only counts as missing.
        env::set_var("OWNER_ID", "42");
        env::set_var("TARGET_CHANNEL_ID", "   ");
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("TARGET_CHANNEL_ID"));

        clear_relay_env();
    }
}
