//! Runtime settings read from `LEADDESK_*` environment variables.
//!
//! | Variable                | Default           |
//! |-------------------------|-------------------|
//! | `LEADDESK_HOST`         | `127.0.0.1`       |
//! | `LEADDESK_PORT`         | `8080`            |
//! | `LEADDESK_DATABASE`     | `leaddesk.sqlite` |
//! | `LEADDESK_STATIC_DIR`   | `static`          |
//! | `LEADDESK_OPEN_BROWSER` | `true`            |
//! | `LEADDESK_JSON_LIMIT`   | `10485760` bytes  |
//!
//! A value that does not parse is logged and replaced by its default.

use log::warn;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: PathBuf,
    pub static_dir: PathBuf,
    pub open_browser: bool,
    pub json_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database: PathBuf::from("leaddesk.sqlite"),
            static_dir: PathBuf::from("static"),
            open_browser: true,
            json_limit: 10 * 1024 * 1024, // 10 MB
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        Self {
            host: text("LEADDESK_HOST", defaults.host),
            port: parsed(&lookup, "LEADDESK_PORT", defaults.port),
            database: PathBuf::from(text(
                "LEADDESK_DATABASE",
                defaults.database.to_string_lossy().into_owned(),
            )),
            static_dir: PathBuf::from(text(
                "LEADDESK_STATIC_DIR",
                defaults.static_dir.to_string_lossy().into_owned(),
            )),
            open_browser: flag(&lookup, "LEADDESK_OPEN_BROWSER", defaults.open_browser),
            json_limit: parsed(&lookup, "LEADDESK_JSON_LIMIT", defaults.json_limit),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parsed<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("{}={:?} is invalid ({}), using {}", key, raw, e, default);
            default
        }),
        None => default,
    }
}

fn flag<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("{}={:?} is not a boolean, using {}", key, raw, default);
            default
        }
    }
}
