//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Any malformed value aborts startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::crypto::from_base64;

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 44044);
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:40922,http://127.0.0.1:40922";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Local,
    Dev,
    Prod,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => bail!("unknown APP_ENV {other:?} (expected local, dev or prod)"),
        }
    }
}

#[derive(Debug)]
pub struct ServerConfig {
    pub env: AppEnv,
    pub database_url: String,
    pub listen_addr: SocketAddr,
    pub request_timeout: Duration,
    pub db_max_connections: u32,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let env = match lookup("APP_ENV") {
            Some(v) => v.parse()?,
            None => AppEnv::Local,
        };

        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let listen_addr = parse_or(&lookup, "AUTH_LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?;
        let token_ttl = parse_or(&lookup, "AUTH_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let request_timeout =
            parse_or(&lookup, "AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let db_max_connections =
            parse_or(&lookup, "AUTH_DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        if token_ttl == 0 {
            bail!("AUTH_TOKEN_TTL_SECS must be greater than zero");
        }

        let mut auth = AuthConfig::default().with_token_ttl(Duration::from_secs(token_ttl));
        if let Some(pepper) = lookup("AUTH_PASSWORD_PEPPER").filter(|p| !p.trim().is_empty()) {
            let bytes = from_base64(&pepper).context("AUTH_PASSWORD_PEPPER must be standard base64")?;
            auth = auth.with_pepper(bytes);
        }

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            env,
            database_url,
            listen_addr,
            request_timeout: Duration::from_secs(request_timeout),
            db_max_connections,
            frontend_origins,
            auth,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
