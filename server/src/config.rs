//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Page size used when a list request omits `pageSize`.
    pub default_page_size: u32,
    /// Upper bound applied to any requested `pageSize`.
    pub max_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, default_page_size: DEFAULT_PAGE_SIZE, max_page_size: DEFAULT_MAX_PAGE_SIZE }
    }
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8000
    /// - `RUNNER_DEFAULT_PAGE_SIZE`: default 10
    /// - `RUNNER_MAX_PAGE_SIZE`: default 100
    ///
    /// Unparseable values fall back to their defaults. The default page size
    /// is clamped to `1..=max_page_size`.
    #[must_use]
    pub fn from_env() -> Self {
        let port = env_parse("PORT", DEFAULT_PORT);
        let max_page_size = env_parse("RUNNER_MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE).max(1);
        let default_page_size = env_parse("RUNNER_DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE).clamp(1, max_page_size);
        Self { port, default_page_size, max_page_size }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
