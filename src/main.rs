// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read the markdown file and extract its links
// 3. Check the links one by one, printing a line for each
// 4. Print the summary
// 5. Exit with proper code (0 = all good, 1 = broken links, 2 = error)
//
// Rust concepts:
// - async/await: The HTTP client is async, so main runs on tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Generics: `impl Write` so tests can capture what gets printed
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - link extraction and checking
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - timeout, redirects, headers
mod error; // src/error.rs - input file errors
mod input; // src/input.rs - reading the markdown file
mod report; // src/report.rs - grouping and printing results

// anyhow::Result lets us return any error type with the ? operator
use anyhow::Result;
use checker::{Link, LinkChecker};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::CheckerConfig;
use log::debug;
use report::ResultSet;
use std::io::{self, Write};
use std::path::Path;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// main inside it
#[tokio::main]
async fn main() {
    // Logging goes to stderr, set RUST_LOG=debug to see every request
    env_logger::init();

    // Handles --help and --version for us
    let cli = Cli::parse();

    // Lock stdout once instead of on every println!
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let exit_code = match run(&cli.path, &CheckerConfig::default(), &mut out).await {
        Ok(code) => code,
        Err(e) => {
            // Input errors and anything else fatal end up here
            eprintln!("Error: {:#}", e);
            2
        }
    };

    // std::process::exit() terminates the program with the given code
    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every link is fine (or there were none)
//   Ok(1) = at least one link failed
//   Err = the file couldn't be read or the client couldn't be built
async fn run(path: &Path, config: &CheckerConfig, out: &mut impl Write) -> Result<i32> {
    // A missing or unreadable file stops us here, before any checking
    let content = input::load_document(path).await?;

    let links = checker::extract_markdown_links(&content);
    debug!("extracted {} link(s) from {}", links.len(), path.display());

    // No links is not an error
    if links.is_empty() {
        report::print_no_links(out)?;
        return Ok(0);
    }

    report::print_header(out, links.len(), &path.display().to_string())?;

    let checker = LinkChecker::new(config)?;
    let results = check_document(&checker, links, out).await?;

    report::print_summary(out, &results)?;

    if results.has_errors() {
        Ok(1) // Exit code 1 = broken links found
    } else {
        Ok(0) // Exit code 0 = all good
    }
}

// Checks links in document order, one at a time
//
// A progress line is printed as soon as each link is checked. A failing
// link never stops the loop, only a failed write to `out` does.
async fn check_document(
    checker: &LinkChecker,
    links: Vec<Link>,
    out: &mut impl Write,
) -> Result<ResultSet> {
    let mut results = ResultSet::new();

    // Strictly one at a time, in the order the links were found
    for link in links {
        let outcome = checker.check(&link.url).await;
        report::print_link_line(out, &link, &outcome)?;
        results.record(link, &outcome);
    }

    Ok(results)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does run() return Result<i32>?
//    - Ok(code) carries the exit code for a run that finished normally
//    - Err(e) means something stopped the run (bad input file)
//    - main() is the only place that turns either into a process exit
//
// 2. Why pass `out` around instead of using println!?
//    - println! always writes to the real stdout
//    - Taking `&mut impl Write` lets tests pass a Vec<u8> and read it back
//
// 3. What does {:#} do with an anyhow error?
//    - The alternate format prints the error and every cause after it
//    - e.g. "could not read 'x.md': Permission denied"
// -----------------------------------------------------------------------------
