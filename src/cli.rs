// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is exactly one argument: the markdown file to check. It is optional
// and defaults to README.md in the current directory.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate the parsing code
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "mdlinkcheck",
    version,
    about = "Check all links in a markdown file and report their status",
    long_about = "mdlinkcheck finds every [text](url) and <https://...> link in a markdown file \
                  and checks that each one is reachable. It exits with code 1 if any link is \
                  broken, which makes it easy to use in CI."
)]
pub struct Cli {
    /// Markdown file to check
    ///
    /// This is a positional argument (optional, no flag needed)
    #[arg(default_value = "README.md")]
    pub path: PathBuf,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf instead of String?
//    - PathBuf is the owned type for file system paths
//    - Paths aren't always valid UTF-8 on every OS, PathBuf handles that
//
// 2. What does default_value do?
//    - If the user doesn't pass a path, clap fills in "README.md"
//    - The field is never empty, so it doesn't need to be an Option
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let cli = Cli::parse_from(["mdlinkcheck"]);
        assert_eq!(cli.path, PathBuf::from("README.md"));
    }

    #[test]
    fn test_explicit_path() {
        let cli = Cli::parse_from(["mdlinkcheck", "docs/guide.md"]);
        assert_eq!(cli.path, PathBuf::from("docs/guide.md"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["mdlinkcheck", "--json"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
