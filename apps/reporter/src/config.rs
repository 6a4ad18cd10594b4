use anyhow::{Context, Result};

use crate::models::milestone::DEFAULT_ACTIVE_COLOR;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// User-story lines that fit in one milestone slide column.
    pub lines_per_slide: u32,
    /// Display color the tracker uses for completed milestones.
    pub active_milestone_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            lines_per_slide: 20,
            active_milestone_color: DEFAULT_ACTIVE_COLOR.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let lines_per_slide = parse_env("LINES_PER_SLIDE", defaults.lines_per_slide)?;
        if lines_per_slide == 0 {
            anyhow::bail!("LINES_PER_SLIDE must be greater than zero");
        }

        Ok(Config {
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            lines_per_slide,
            active_milestone_color: std::env::var("ACTIVE_MILESTONE_COLOR")
                .unwrap_or(defaults.active_milestone_color),
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.lines_per_slide, 20);
        assert_eq!(config.active_milestone_color, "#107c1e");
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: u32 = parse_env("REPORTER_TEST_UNSET_VARIABLE", 25).unwrap();
        assert_eq!(value, 25);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("REPORTER_TEST_BAD_NUMBER", "twenty");
        let result: Result<u32> = parse_env("REPORTER_TEST_BAD_NUMBER", 20);
        assert!(result.is_err());
        std::env::remove_var("REPORTER_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_parse_env_trims_whitespace() {
        std::env::set_var("REPORTER_TEST_PADDED_NUMBER", " 24 ");
        let value: u32 = parse_env("REPORTER_TEST_PADDED_NUMBER", 20).unwrap();
        assert_eq!(value, 24);
        std::env::remove_var("REPORTER_TEST_PADDED_NUMBER");
    }
}
