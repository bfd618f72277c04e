// src/checker/markdown.rs
// =============================================================================
// This module extracts links from Markdown text.
//
// We don't parse the Markdown. Each line is scanned with two regexes:
// - Inline links:  [text](url)
// - Autolinks:     <https://...>
//
// A lexical pass means a broken table or an unclosed code fence elsewhere in
// the document can't hide links from us.
//
// Output order is document order: line by line, and within a line by the
// position where each match starts.
//
// Rust concepts:
// - Regex: Pattern matching with capture groups
// - OnceLock: Compile each regex once and reuse it
// - Sorting: A stable sort by match position
// =============================================================================

use regex::Regex;
use std::sync::OnceLock;

/// A link found in the document
///
/// For autolinks the display text is the URL itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

// [text](url) - text can't contain ']', url can't contain ')'
fn inline_link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid inline link regex"))
}

// <http://...> or <https://...>
fn autolink_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(https?://[^>]+)>").expect("valid autolink regex"))
}

// Extracts every link from Markdown text
//
// Parameters:
//   markdown: the markdown text to scan (borrowed as &str)
//
// Returns: Vec<Link> in the order the links appear in the document
//
// Example input:
//   "Check out [Rust](https://www.rust-lang.org) or <https://crates.io>!"
//
// Example output:
//   [Link { text: "Rust", url: "https://www.rust-lang.org" },
//    Link { text: "https://crates.io", url: "https://crates.io" }]
pub fn extract_markdown_links(markdown: &str) -> Vec<Link> {
    let mut links = Vec::new();

    // lines() also strips the '\r' of Windows line endings
    for line in markdown.lines() {
        // (start offset, link) for every match on this line
        let mut found: Vec<(usize, Link)> = Vec::new();

        for caps in inline_link_regex().captures_iter(line) {
            // Both groups are mandatory in the pattern, so they're always present
            if let (Some(whole), Some(text), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) {
                found.push((whole.start(), Link::new(text.as_str(), url.as_str())));
            }
        }

        for caps in autolink_regex().captures_iter(line) {
            if let (Some(whole), Some(url)) = (caps.get(0), caps.get(1)) {
                found.push((whole.start(), Link::new(url.as_str(), url.as_str())));
            }
        }

        // Stable sort: inline matches stay ahead of autolinks on a tie
        found.sort_by_key(|(start, _)| *start);
        // Drop the offsets, keep the links
        links.extend(found.into_iter().map(|(_, link)| link));
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why regexes instead of a Markdown parser?
//    - We only need two patterns, a full parser is a lot of machinery
//    - A parser can get confused by broken Markdown elsewhere in the file
//    - Scanning line by line keeps every link visible
//
// 2. What is OnceLock?
//    - A cell that is written exactly once, the first time it's needed
//    - get_or_init runs the closure on first use, then returns the stored value
//    - Compiling a regex is slow, so we don't want to do it per line
//
// 3. What are capture groups?
//    - The parts of a regex in parentheses: ([^\]]+) and ([^)]+)
//    - caps.get(1) is the first group, caps.get(0) is the whole match
//    - Each group knows where it starts in the line (.start())
//
// 4. Why sort_by_key is "stable"?
//    - Items with equal keys keep their original order
//    - Inline links were pushed first, so they win any tie
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_link() {
        let links = extract_markdown_links("[Example](https://example.com)");
        assert_eq!(links, vec![Link::new("Example", "https://example.com")]);
    }

    #[test]
    fn test_extract_autolink() {
        let links = extract_markdown_links("<https://example.com>");
        assert_eq!(
            links,
            vec![Link::new("https://example.com", "https://example.com")]
        );
    }

    #[test]
    fn test_no_links() {
        let markdown = "# Title\n\nJust some text with [brackets] and (parens).\n";
        assert!(extract_markdown_links(markdown).is_empty());
        assert!(extract_markdown_links("").is_empty());
    }

    #[test]
    fn test_line_order_beats_alphabetical_order() {
        let markdown = "\
intro
more intro
[Zebra](https://zzz.example.com)
line 4
line 5
line 6
line 7
line 8
line 9
[Apple](https://aaa.example.com)
";
        let links = extract_markdown_links(markdown);
        assert_eq!(
            links,
            vec![
                Link::new("Zebra", "https://zzz.example.com"),
                Link::new("Apple", "https://aaa.example.com"),
            ]
        );
    }

    #[test]
    fn test_same_line_in_position_order() {
        let markdown = "see <https://b.example.com> then [A](https://a.example.com) and <http://c.example.com>";
        let links = extract_markdown_links(markdown);
        let urls: Vec<&str> = links.iter().map(|l| l.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://b.example.com",
                "https://a.example.com",
                "http://c.example.com"
            ]
        );
    }

    #[test]
    fn test_keeps_non_http_targets() {
        // Filtering happens in the checker, not here
        let markdown = "- [email](mailto:test@example.com)\n- [docs](./docs/README.md)\n- [top](#top)";
        let links = extract_markdown_links(markdown);
        assert_eq!(
            links,
            vec![
                Link::new("email", "mailto:test@example.com"),
                Link::new("docs", "./docs/README.md"),
                Link::new("top", "#top"),
            ]
        );
    }

    #[test]
    fn test_url_taken_verbatim() {
        let links = extract_markdown_links("[q](https://example.com/a%20b?x=1&y=2#frag)");
        assert_eq!(links[0].url, "https://example.com/a%20b?x=1&y=2#frag");
    }

    #[test]
    fn test_brackets_without_url_are_not_links() {
        assert!(extract_markdown_links("[text] (https://example.com)").is_empty());
        assert!(extract_markdown_links("[text]").is_empty());
        assert!(extract_markdown_links("[](https://example.com)").is_empty());
        assert!(extract_markdown_links("[text]()").is_empty());
    }

    #[test]
    fn test_url_ends_at_first_paren() {
        let links = extract_markdown_links("[Wiki](https://en.wikipedia.org/wiki/Rust_(language))");
        assert_eq!(links[0].url, "https://en.wikipedia.org/wiki/Rust_(language");
    }

    #[test]
    fn test_autolink_requires_http_scheme() {
        assert!(extract_markdown_links("<ftp://example.com> <div> <mailto:a@b.c>").is_empty());
    }

    #[test]
    fn test_overlapping_patterns_both_reported() {
        let links = extract_markdown_links("[<https://a.example.com>](https://b.example.com)");
        assert_eq!(
            links,
            vec![
                Link::new("<https://a.example.com>", "https://b.example.com"),
                Link::new("https://a.example.com", "https://a.example.com"),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let links = extract_markdown_links("[A](https://a.example.com)\r\n<https://b.example.com>\r\n");
        assert_eq!(links.len(), 2);
        assert_eq!(links[1].url, "https://b.example.com");
    }

    #[test]
    fn test_link_inside_malformed_markdown() {
        let markdown = "```\nunclosed fence\n| broken | table\n[Still](https://found.example.com)";
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec![Link::new("Still", "https://found.example.com")]);
    }
}
