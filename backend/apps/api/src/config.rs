//! Server configuration from the process environment

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use access::AccessConfig;
use anyhow::Context;
use axum::http::HeaderValue;
use catalog::CatalogConfig;
use news::NewsConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

#[derive(Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub allowed_origins: Vec<HeaderValue>,
    /// JSON export of the skills table; `None` serves an empty listing
    pub skills_path: Option<PathBuf>,
    /// JSON export of the tool table; `None` serves an empty catalog
    pub tools_path: Option<PathBuf>,
    /// JSON export of both story tables; `None` serves an empty feed
    pub news_path: Option<PathBuf>,
    pub access: AccessConfig,
    pub catalog: CatalogConfig,
    pub news: NewsConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr: SocketAddr = env_or("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let allowed_origins = env_or("FRONTEND_ORIGINS", DEFAULT_FRONTEND_ORIGINS)
            .split(',')
            .filter_map(|origin| origin.trim().parse().ok())
            .collect();

        let access = AccessConfig::from_values(
            env::var("CC_SKILLS_PAGE_PASSWORD").ok(),
            env::var("CC_SKILLS_COOKIE_SECRET").ok(),
            secure_cookies(env::var("APP_ENV").ok().as_deref()),
        );
        if access.page_password.is_none() {
            tracing::warn!(
                "CC_SKILLS_PAGE_PASSWORD is not set; the skills gate will refuse everyone"
            );
        }

        let catalog = CatalogConfig::per_minute(
            parse_env("TOOLS_RATE_LIMIT_PER_MINUTE", 60)?,
            parse_env("SEARCH_RATE_LIMIT_PER_MINUTE", 30)?,
        );
        let news = NewsConfig::per_minute(parse_env("NEWS_RATE_LIMIT_PER_MINUTE", 30)?);

        Ok(Self {
            bind_addr,
            allowed_origins,
            skills_path: path_env("SKILLS_DATA_PATH"),
            tools_path: path_env("TOOLS_DATA_PATH"),
            news_path: path_env("NEWS_DATA_PATH"),
            access,
            catalog,
            news,
        })
    }
}

/// `production` forces Secure cookies, `development` drops them, anything
/// else follows the build profile
fn secure_cookies(app_env: Option<&str>) -> bool {
    match app_env {
        Some("production") => true,
        Some("development") => false,
        _ => !cfg!(debug_assertions),
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn path_env(key: &str) -> Option<PathBuf> {
    env::var(key).ok().filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

fn parse_env<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_cookies() {
        assert!(secure_cookies(Some("production")));
        assert!(!secure_cookies(Some("development")));
        assert_eq!(secure_cookies(None), !cfg!(debug_assertions));
    }
}
