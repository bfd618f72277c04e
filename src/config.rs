// src/config.rs
// =============================================================================
// Settings for the link checker.
//
// There is no config file: the CLI always runs with `CheckerConfig::default()`.
// The builder methods exist so tests can shrink the timeout.
//
// The request headers are a fixed table. Some servers reject clients that
// don't look like a browser, so every request carries the same set of
// browser-like headers.
//
// Rust concepts:
// - const and static: Values fixed at compile time, no global mutable state
// - Default trait: The standard way to say "the usual settings"
// - Struct update syntax: `..self` copies the fields we don't change
// =============================================================================

use std::time::Duration;

/// Total time allowed for a single request, redirects included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 30;

/// Headers sent with every HEAD and GET request.
///
/// Names are lowercase so they can be turned into `HeaderName`s without a
/// fallible parse.
pub static BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36",
    ),
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,\
         image/avif,image/webp,*/*;q=0.8",
    ),
    ("accept-language", "en-US,en;q=0.5"),
    ("accept-encoding", "gzip, deflate, br"),
    ("dnt", "1"),
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("cache-control", "max-age=0"),
];

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

// Only tests change the defaults
#[cfg(test)]
impl CheckerConfig {
    pub fn timeout(self, timeout: Duration) -> Self {
        Self { timeout, ..self }
    }

    pub fn max_redirects(self, max_redirects: usize) -> Self {
        Self {
            max_redirects,
            ..self
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. const vs static?
//    - const is copied into every place it's used
//    - static lives at one address for the whole program, good for tables
//
// 2. Why do the builder methods take `self` by value?
//    - They consume the old config and return a new one
//    - That lets calls chain: CheckerConfig::default().timeout(...)
// -----------------------------------------------------------------------------
