// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - markdown: Finds links in markdown text
// - http: Checks whether a link is reachable
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod http;
mod markdown;

// Re-export public items so callers write `checker::LinkChecker`
// instead of `checker::http::LinkChecker`

pub use http::{LinkChecker, Symbol, VerificationOutcome};
pub use markdown::{extract_markdown_links, Link};

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is mod.rs?
//    - When a directory is a module (like src/checker/), mod.rs is its root
//    - It decides which items from the submodules the rest of the crate sees
//
// 2. Why are the submodules private?
//    - Callers only need the re-exported types and functions
//    - We can move code between http.rs and markdown.rs without breaking them
// -----------------------------------------------------------------------------
