// src/report.rs
// =============================================================================
// Groups check results by category and prints them.
//
// What gets printed:
// 1. One line per link as it is checked
// 2. A summary with total, success and error counts
// 3. If anything failed, the failed links grouped by category
//
// Everything writes to a `Write` so tests can capture the output.
//
// Rust concepts:
// - Generics: `impl Write` accepts stdout or a Vec<u8>
// - From trait: To map a check outcome onto its summary bucket
// - Display trait: So categories can be used directly in format strings
// =============================================================================

use crate::checker::{Link, Symbol, VerificationOutcome};
use std::fmt;
use std::io::{self, Write};

/// Bucket a link ends up in for the summary
///
/// Skipped links count as `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Ok,
    Error,
    Timeout,
    SslError,
    ConnectionError,
    UnknownError,
}

impl StatusCategory {
    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Ok => "OK",
            StatusCategory::Error => "Error",
            StatusCategory::Timeout => "Timeout",
            StatusCategory::SslError => "SSL Error",
            StatusCategory::ConnectionError => "Connection Error",
            StatusCategory::UnknownError => "Unknown Error",
        }
    }
}

impl From<Symbol> for StatusCategory {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Ok | Symbol::Skipped => StatusCategory::Ok,
            Symbol::HttpError => StatusCategory::Error,
            Symbol::Timeout => StatusCategory::Timeout,
            Symbol::SslError => StatusCategory::SslError,
            Symbol::ConnectionError => StatusCategory::ConnectionError,
            Symbol::UnknownError => StatusCategory::UnknownError,
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Checked links grouped by category
///
/// Categories keep the order they were first seen in, links keep the order
/// they were checked in. Only ever appended to.
#[derive(Debug, Default)]
pub struct ResultSet {
    groups: Vec<(StatusCategory, Vec<Link>)>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, link: Link, outcome: &VerificationOutcome) {
        // Successes (skipped links included) all share the OK bucket
        let category = if outcome.is_success() {
            StatusCategory::Ok
        } else {
            StatusCategory::from(outcome.symbol)
        };

        // At most six groups, a linear search is plenty
        match self.groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, links)) => links.push(link),
            None => self.groups.push((category, vec![link])),
        }
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, links)| links.len()).sum()
    }

    pub fn success_count(&self) -> usize {
        self.total() - self.error_count()
    }

    pub fn error_count(&self) -> usize {
        self.failed().map(|(_, links)| links.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    #[cfg(test)]
    pub fn get(&self, category: StatusCategory) -> &[Link] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, links)| links.as_slice())
            .unwrap_or(&[])
    }

    /// Every group except `Ok`, in first-seen order
    pub fn failed(&self) -> impl Iterator<Item = (StatusCategory, &[Link])> + '_ {
        self.groups
            .iter()
            .filter(|(c, _)| *c != StatusCategory::Ok)
            .map(|(c, links)| (*c, links.as_slice()))
    }
}

pub fn print_no_links(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "No links found in the document!")
}

pub fn print_header(out: &mut impl Write, count: usize, path: &str) -> io::Result<()> {
    writeln!(out, "\nChecking {count} links in {path}...\n")
}

pub fn print_link_line(
    out: &mut impl Write,
    link: &Link,
    outcome: &VerificationOutcome,
) -> io::Result<()> {
    writeln!(
        out,
        "{} [{}]({}) - {}",
        outcome.symbol.glyph(),
        link.text,
        link.url,
        outcome.detail
    )
}

pub fn print_summary(out: &mut impl Write, results: &ResultSet) -> io::Result<()> {
    writeln!(out, "\n=== Summary ===")?;
    writeln!(out, "Total links checked: {}", results.total())?;
    writeln!(out, "Success: {}", results.success_count())?;
    writeln!(out, "Errors: {}", results.error_count())?;

    if results.has_errors() {
        writeln!(out, "\n=== Failed Links ===")?;
        for (category, links) in results.failed() {
            writeln!(out, "\n{category}:")?;
            for link in links {
                writeln!(out, "  • [{}]({})", link.text, link.url)?;
            }
        }
    }
    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is `impl Write` in a parameter?
//    - Shorthand for a generic: "any type that implements Write"
//    - main() passes a locked stdout, tests pass a Vec<u8>
//    - The compiler generates a version for each type used
//
// 2. Why a Vec of groups instead of a HashMap?
//    - A HashMap doesn't remember insertion order
//    - We want categories printed in the order they first showed up
//    - With six possible categories a linear search costs nothing
//
// 3. What does writeln! return?
//    - io::Result<()>, because writing can fail (closed pipe, full disk)
//    - The ? operator passes that error up to the caller
// -----------------------------------------------------------------------------
