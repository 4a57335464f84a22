use std::env;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub db_connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .context("PORT must be a number")?,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| split_origins(&extra))
                .unwrap_or_default(),

            db_connect_timeout_secs: env::var("DB_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .context("DB_CONNECT_TIMEOUT_SECS must be a number")?,
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".into())
                .parse()
                .context("REQUEST_TIMEOUT_SECS must be a number")?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_skips_blanks() {
        let origins = split_origins(" http://a.local , ,http://b.local,");
        assert_eq!(origins, vec!["http://a.local", "http://b.local"]);
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            database_url: "postgres://localhost/moodmapper".into(),
            host: "127.0.0.1".into(),
            port: 9000,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: vec![],
            db_connect_timeout_secs: 5,
            request_timeout_secs: 30,
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }
}
