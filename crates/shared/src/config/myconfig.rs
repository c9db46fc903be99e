use anyhow::{Context, Result, anyhow};
use dotenv::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_connections: u32,
    pub hash_cost: u32,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `init` reads the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .context("PORT must be a valid u16 integer")?,
            None => 8000,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32 integer")?,
            None => 5,
        };

        let hash_cost = match lookup("HASH_COST") {
            Some(value) => value
                .parse::<u32>()
                .context("HASH_COST must be a valid u32 integer")?,
            None => bcrypt::DEFAULT_COST,
        };

        if !(4..=31).contains(&hash_cost) {
            return Err(anyhow!("HASH_COST must be between 4 and 31, got {hash_cost}"));
        }

        let flag = |key: &str| {
            lookup(key)
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false)
        };

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_max_connections,
            hash_cost,
            is_dev: flag("DEV_MODE"),
            enable_file_log: flag("ENABLE_FILE_LOG"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/jobs")]).unwrap();

        assert_eq!(config.port, 8000);
        assert!(config.run_migrations);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.hash_cost, bcrypt::DEFAULT_COST);
        assert!(!config.is_dev);
        assert!(!config.enable_file_log);
    }

    #[test]
    fn database_url_is_required() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config_from(&[("DATABASE_URL", "x"), ("PORT", "eighty")]).is_err());
        assert!(config_from(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "yes")]).is_err());
        assert!(config_from(&[("DATABASE_URL", "x"), ("HASH_COST", "2")]).is_err());
    }

    #[test]
    fn reads_flags() {
        let config = config_from(&[
            ("DATABASE_URL", "x"),
            ("DEV_MODE", "1"),
            ("ENABLE_FILE_LOG", "true"),
            ("RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        assert!(config.is_dev);
        assert!(config.enable_file_log);
        assert!(!config.run_migrations);
    }
}
