use std::net::IpAddr;

use chrono::{DateTime, Utc};

use crate::db::KeySchema;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub domain_name: String,
    pub database_url: Option<String>,
    pub key_schema: KeySchema,
    pub strict_status: bool,
    pub extra_cors_origins: Vec<String>,
    pub max_body_size: usize,
    pub api_url: String,
    pub event_start: Option<DateTime<Utc>>,
    pub event_end: Option<DateTime<Utc>>,
    pub static_dir: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host: IpAddr = env_or("HACKFORM_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HACKFORM_HOST: {e}"))?;

        let port: u16 = env_or("HACKFORM_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid HACKFORM_PORT: {e}"))?;

        let domain_name = env_or("HACKFORM_DOMAIN", "2024.lincolnhack.org");
        if domain_name.trim().is_empty() {
            return Err("HACKFORM_DOMAIN must not be empty".to_string());
        }

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let key_schema = match env_or("HACKFORM_SORT_KEY", "email").as_str() {
            "email" | "" => KeySchema::Email,
            "created" => KeySchema::EmailCreated,
            other => return Err(format!("Invalid HACKFORM_SORT_KEY: {other}")),
        };

        let strict_status = parse_bool("HACKFORM_STRICT_STATUS", &env_or("HACKFORM_STRICT_STATUS", "false"))?;

        let extra_cors_origins: Vec<String> = env_or("HACKFORM_CORS_ORIGINS", "")
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect();

        let max_body_size: usize = env_or("HACKFORM_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid HACKFORM_MAX_BODY_SIZE: {e}"))?;

        let api_url = env_or("HACKFORM_API_URL", &format!("https://api.{domain_name}/contact"));

        let event_start = env_timestamp("HACKFORM_EVENT_START")?;
        let event_end = env_timestamp("HACKFORM_EVENT_END")?;

        let static_dir = env_or("HACKFORM_STATIC_DIR", "static");
        let log_level = env_or("HACKFORM_LOG_LEVEL", "info");

        Ok(Config {
            host,
            port,
            domain_name,
            database_url,
            key_schema,
            strict_status,
            extra_cors_origins,
            max_body_size,
            api_url,
            event_start,
            event_end,
            static_dir,
            log_level,
        })
    }

    /// Origins allowed to call the contact endpoint from a browser.
    pub fn cors_origins(&self) -> Vec<String> {
        let mut origins = vec![
            format!("https://{}", self.domain_name),
            format!("https://api.{}", self.domain_name),
        ];
        for origin in &self.extra_cors_origins {
            if !origins.contains(origin) {
                origins.push(origin.clone());
            }
        }
        origins
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(format!("Invalid {key}: {other}")),
    }
}

fn env_timestamp(key: &str) -> Result<Option<DateTime<Utc>>, String> {
    match std::env::var(key).ok() {
        Some(raw) if !raw.trim().is_empty() => DateTime::parse_from_rfc3339(raw.trim())
            .map(|t| Some(t.with_timezone(&Utc)))
            .map_err(|e| format!("Invalid {key}: {e}")),
        _ => Ok(None),
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
