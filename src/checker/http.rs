// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Drops the #fragment, the server never sees it anyway
// - Skips anything that isn't http:// or https:// (mailto:, relative paths...)
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Falls back to GET when the server answers HEAD with 405
// - Sorts failures into timeout, SSL, connection and unknown errors
//
// `LinkChecker::check` never fails. Whatever happens to the request, the
// caller gets a `VerificationOutcome` back, so one bad URL can't stop the run.
//
// Rust concepts:
// - async/await: For network I/O without blocking the thread
// - Enums: To represent the different ways a check can end
// - Trait objects: `&dyn Error` to walk the chain of wrapped errors
// - Iterators: `iter::successors` to follow `source()` links
// =============================================================================

use crate::config::{CheckerConfig, BROWSER_HEADERS};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::error::Error as StdError;
use std::io;
use url::Url;

/// How a single check ended
///
/// `Ok` and `Skipped` count as success, everything else is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Server answered with a status below 400
    Ok,
    /// Not an HTTP(S) URL, nothing to check
    Skipped,
    /// Server answered with 400 or above
    HttpError,
    /// Request took longer than the timeout
    Timeout,
    /// TLS handshake or certificate failure
    SslError,
    /// DNS failure, refused, reset or unreachable
    ConnectionError,
    /// Anything else
    UnknownError,
}

impl Symbol {
    pub fn is_success(self) -> bool {
        matches!(self, Symbol::Ok | Symbol::Skipped)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Ok | Symbol::Skipped => "✅",
            Symbol::HttpError => "❌",
            Symbol::Timeout => "⌛",
            Symbol::SslError => "🔒",
            Symbol::ConnectionError => "🔌",
            Symbol::UnknownError => "❓",
        }
    }
}

/// The result of checking one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub symbol: Symbol,
    /// Human-readable status, e.g. "OK (200)" or "Error (404)"
    pub detail: String,
}

impl VerificationOutcome {
    fn new(symbol: Symbol, detail: impl Into<String>) -> Self {
        Self {
            symbol,
            detail: detail.into(),
        }
    }

    pub fn skipped() -> Self {
        Self::new(Symbol::Skipped, "Skipped (not HTTP/HTTPS)")
    }

    pub fn from_status(status: StatusCode) -> Self {
        let code = status.as_u16();
        if code < 400 {
            Self::new(Symbol::Ok, format!("OK ({code})"))
        } else {
            Self::new(Symbol::HttpError, format!("Error ({code})"))
        }
    }

    pub fn timeout() -> Self {
        Self::new(Symbol::Timeout, "Timeout")
    }

    pub fn ssl_error() -> Self {
        Self::new(Symbol::SslError, "SSL Error")
    }

    pub fn connection_error() -> Self {
        Self::new(Symbol::ConnectionError, "Connection Error")
    }

    pub fn unknown(message: impl std::fmt::Display) -> Self {
        Self::new(Symbol::UnknownError, format!("Unknown Error ({message})"))
    }

    pub fn is_success(&self) -> bool {
        self.symbol.is_success()
    }
}

/// Removes the `#fragment` part of a URL, if any
pub fn strip_fragment(url: &str) -> &str {
    match url.split_once('#') {
        Some((base, _)) => base,
        None => url,
    }
}

fn is_http_link(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Checks URLs one at a time with a shared HTTP client
///
/// The client carries the browser-like headers, the timeout and the redirect
/// policy, so every HEAD and GET goes out with the same settings.
#[derive(Debug)]
pub struct LinkChecker {
    client: Client,
}

impl LinkChecker {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        // One client for the whole run (connection pooling)
        let client = Client::builder()
            .default_headers(browser_headers()) // Sent with every request
            .timeout(config.timeout) // Covers connect, redirects and response
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client })
    }

    // Checks a single link
    //
    // Parameters:
    //   url: the URL exactly as written in the document
    //
    // Returns: VerificationOutcome with symbol and detail
    pub async fn check(&self, url: &str) -> VerificationOutcome {
        // "#section" is a client-side thing, the server never sees it
        let base_url = strip_fragment(url);

        // mailto:, relative paths, bare anchors... nothing to request
        if !is_http_link(base_url) {
            debug!("skipping non-HTTP link {url}");
            return VerificationOutcome::skipped();
        }

        // Parse up front so a malformed URL gets its own message
        let target = match Url::parse(base_url) {
            Ok(target) => target,
            Err(e) => {
                warn!("cannot parse {base_url}: {e}");
                return VerificationOutcome::unknown(e);
            }
        };

        // Both arms produce an outcome, so nothing escapes to the caller
        let outcome = match self.fetch_status(target).await {
            Ok(status) => VerificationOutcome::from_status(status),
            Err(e) => categorize_error(&e),
        };
        debug!("{base_url} -> {}", outcome.detail);
        outcome
    }

    // HEAD first, then GET if the server doesn't allow HEAD
    async fn fetch_status(&self, target: Url) -> Result<StatusCode, reqwest::Error> {
        debug!("HEAD {target}");
        // HEAD is faster, no body download. `?` hands transport errors back
        // to `check`, which turns them into an outcome
        let response: Response = self.client.head(target.clone()).send().await?;
        if response.status() != StatusCode::METHOD_NOT_ALLOWED {
            return Ok(response.status());
        }

        // 405 Method Not Allowed: some servers only answer GET
        info!("HEAD not allowed for {target}, retrying with GET");
        let response = self.client.get(target).send().await?;
        Ok(response.status())
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(BROWSER_HEADERS.len());
    for &(name, value) in BROWSER_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    headers
}

// Categorizes different error types from reqwest
//
// The order matters: a TLS failure during connect also reports is_connect(),
// so TLS has to be checked first. Only the wrapped errors are searched for
// TLS wording, the top-level message contains the URL.
fn categorize_error(error: &reqwest::Error) -> VerificationOutcome {
    if error.is_timeout() {
        VerificationOutcome::timeout()
    } else if error.source().is_some_and(is_tls_failure) {
        VerificationOutcome::ssl_error()
    } else if error.is_connect() || is_connection_failure(error) {
        VerificationOutcome::connection_error()
    } else {
        warn!("unexpected error: {error}");
        VerificationOutcome::unknown(error)
    }
}

// Words that show up in rustls and OpenSSL error messages
const TLS_MARKERS: &[&str] = &[
    "certificate",
    "tls",
    "ssl",
    "handshake",
    "received corrupt message",
    "peer is incompatible",
    "peer misbehaved",
];

// Walks the error and everything it wraps
fn error_chain<'a>(
    error: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    // The closure gets `&&dyn Error`, so copy the inner reference out first
    std::iter::successors(Some(error), |&e| e.source())
}

fn is_tls_failure(error: &(dyn StdError + 'static)) -> bool {
    error_chain(error).any(|e| {
        let message = e.to_string().to_lowercase();
        TLS_MARKERS.iter().any(|marker| message.contains(marker))
    })
}

fn is_connection_failure(error: &(dyn StdError + 'static)) -> bool {
    error_chain(error)
        .filter_map(|e| e.downcast_ref::<io::Error>())
        .any(|e| {
            matches!(
                e.kind(),
                io::ErrorKind::ConnectionRefused
                    | io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::NotConnected
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::AddrNotAvailable
                    | io::ErrorKind::UnexpectedEof
            )
        })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does check() return VerificationOutcome instead of Result?
//    - A broken link is a normal answer, not a failure of the program
//    - Returning a plain value means the caller can't forget to handle it
//    - Every error path is turned into an outcome inside this module
//
// 2. What is split_once?
//    - Splits a string at the first match and returns both halves
//    - Returns None when the separator isn't there
//    - Both halves borrow from the original, nothing is copied
//
// 3. What is source() on an error?
//    - Errors can wrap other errors (reqwest -> hyper -> io::Error)
//    - source() returns the wrapped error, or None at the bottom
//    - iter::successors keeps calling it until it hits None
//
// 4. What does downcast_ref do?
//    - Tries to view a `&dyn Error` as a concrete type like io::Error
//    - Returns Some(&io::Error) if it is one, None otherwise
//    - Needs the `'static` bound on the trait object
//
// 5. Why HeaderName::from_static?
//    - Builds a header name from a string known at compile time
//    - No Result to handle, but it panics on uppercase or invalid names
//    - That's why the header table uses lowercase names
// -----------------------------------------------------------------------------
