use anyhow::{Context, Result};
use dotenv::dotenv;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AppEnv {
    #[default]
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => anyhow::bail!("Invalid APP_ENV value: {other}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AppConfig {
    pub env: AppEnv,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            env: AppEnv::default(),
            port: 3000,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = AppConfig::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {port}"))?;
        }

        if let Some(env) = lookup("APP_ENV") {
            config.env = AppEnv::parse(&env)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 3000);
        assert_eq!(config.env, AppEnv::Development);
    }

    #[test]
    fn reads_port_and_env() {
        let config = load_from(&[("PORT", "8080"), ("APP_ENV", "Production")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.env, AppEnv::Production);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load_from(&[("PORT", "not-a-port")]).is_err());
        assert!(load_from(&[("APP_ENV", "staging")]).is_err());
    }
}
