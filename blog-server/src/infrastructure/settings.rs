use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) database_url: String,
    pub(crate) database_max_connections: u32,
    pub(crate) jwt: JwtSettings,
    pub(crate) http: HttpSettings,
    pub(crate) log_level: String,
}

/// Shared secret and token lifetime. Only the secret is needed to serve
/// requests; the TTL applies to tokens minted by `issue-token`.
#[derive(Debug, Clone)]
pub(crate) struct JwtSettings {
    pub(crate) secret: String,
    pub(crate) ttl_seconds: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpSettings {
    pub(crate) addr: String,
    pub(crate) cors_origins: Vec<String>,
    pub(crate) request_body_limit_bytes: usize,
    pub(crate) concurrency_limit: usize,
    pub(crate) request_timeout_secs: u64,
}

impl Settings {
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = get_required("DATABASE_URL").context("DATABASE_URL is required")?;
        let database_max_connections = parse_u32_env("DATABASE_MAX_CONNECTIONS", 10)?;
        let jwt = JwtSettings::from_env()?;

        let http = HttpSettings {
            addr: std::env::var("HTTP_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            cors_origins: parse_cors_origins(
                std::env::var("CORS_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string()),
            ),
            request_body_limit_bytes: parse_usize_env("HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024)?,
            concurrency_limit: parse_usize_env("HTTP_CONCURRENCY_LIMIT", 256)?,
            request_timeout_secs: parse_u64_env("HTTP_REQUEST_TIMEOUT_SECS", 10)?,
        };

        let log_level = std::env::var("LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            database_max_connections,
            jwt,
            http,
            log_level,
        })
    }
}

impl JwtSettings {
    pub(crate) fn from_env() -> Result<Self> {
        let secret = get_required("JWT_SECRET").context("JWT_SECRET is required")?;
        if secret.chars().count() < 32 {
            return Err(anyhow!("JWT_SECRET must be at least 32 characters"));
        }

        let ttl_seconds: i64 = std::env::var("JWT_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .context("Failed to parse JWT_TTL_SECONDS, expecting integer")?;

        Ok(Self {
            secret,
            ttl_seconds,
        })
    }
}

fn get_required(key: &str) -> Result<String> {
    let value = std::env::var(key)?;
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("{key} must not be empty"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_usize_env(key: &str, default: usize) -> Result<usize> {
    parse_positive(key, std::env::var(key).ok(), default)
}

fn parse_u64_env(key: &str, default: u64) -> Result<u64> {
    parse_positive(key, std::env::var(key).ok(), default)
}

fn parse_u32_env(key: &str, default: u32) -> Result<u32> {
    parse_positive(key, std::env::var(key).ok(), default)
}

fn parse_positive<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr + PartialEq + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = match raw {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?,
        None => default,
    };

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}
