use anyhow::{Context, Result};
use shared::config::session_secret_from_env;

pub const DEFAULT_REFRESH_PATH: &str = "/refresh-token";

/// Base URLs of the backends the dashboard talks to.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub auth_url: String,
    pub api_url: String,
    pub contact_url: String,
    pub trash_url: String,
    pub refresh_path: String,
    pub session_secret: String,
}

impl ClientConfig {
    pub fn init() -> Result<Self> {
        let auth_url = std::env::var("AUTH_SERVICE_URL")
            .context("Missing environment variable: AUTH_SERVICE_URL")?;

        let api_url = std::env::var("API_SERVICE_URL")
            .context("Missing environment variable: API_SERVICE_URL")?;

        let contact_url = std::env::var("CONTACT_SERVICE_URL")
            .context("Missing environment variable: CONTACT_SERVICE_URL")?;

        let trash_url = std::env::var("TRASH_SERVICE_URL")
            .context("Missing environment variable: TRASH_SERVICE_URL")?;

        let refresh_path =
            std::env::var("REFRESH_PATH").unwrap_or_else(|_| DEFAULT_REFRESH_PATH.to_string());

        Ok(Self {
            auth_url,
            api_url,
            contact_url,
            trash_url,
            refresh_path,
            session_secret: session_secret_from_env(),
        })
    }

    pub fn refresh_url(&self) -> String {
        join_url(&self.auth_url, &self.refresh_path)
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_doubled_slashes() {
        assert_eq!(join_url("http://auth/", "/login"), "http://auth/login");
        assert_eq!(join_url("http://auth", "login"), "http://auth/login");
    }
}
