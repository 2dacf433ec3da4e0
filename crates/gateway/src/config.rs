use anyhow::{Context, Result};
use shared::config::session_secret_from_env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub session_secret: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let upstream_url = std::env::var("UPSTREAM_URL")
            .context("Missing environment variable: UPSTREAM_URL")?
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            port,
            upstream_url,
            session_secret: session_secret_from_env(),
        })
    }
}
