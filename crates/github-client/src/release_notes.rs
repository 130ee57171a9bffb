//! Conversion of generated release notes into chat-friendly text.

use regex::Regex;
use std::sync::LazyLock;

static VERSION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,2} \[?v?\d+\.\d+\.\d+").expect("valid regex"));
static SECTION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{3,6} +(.+?) *$").expect("valid regex"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)[*-] +").expect("valid regex"));
static REFERENCE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?\(\[[^\]]+\]\([^)]+\)\)").expect("valid regex"));
static CLOSES_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",? closes (\[[^\]]+\]\([^)]+\),? ?)+").expect("valid regex"));

/// Humanize changelog-style release notes.
///
/// The leading version heading is dropped, section headings become bold
/// lines, list bullets become `•`, and commit or issue link references are
/// removed.
pub fn humanize_release_notes(notes: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut seen_content = false;

    for line in notes.lines() {
        let line = line.trim_end();

        if !seen_content {
            if line.is_empty() {
                continue;
            }
            seen_content = true;
            if VERSION_HEADING.is_match(line) {
                continue;
            }
        }

        let line = CLOSES_LINK.replace_all(line, "");
        let line = REFERENCE_LINK.replace_all(&line, "");
        let line = SECTION_HEADING.replace(&line, "**$1**");
        let line = BULLET.replace(&line, "$1• ");

        lines.push(line.trim_end().to_string());
    }

    collapse_blank_lines(&lines).trim().to_string()
}

fn collapse_blank_lines(lines: &[String]) -> String {
    let mut result = String::new();
    let mut previous_blank = false;

    for line in lines {
        let blank = line.is_empty();
        if blank && previous_blank {
            continue;
        }
        result.push_str(line);
        result.push('\n');
        previous_blank = blank;
    }

    result
}
