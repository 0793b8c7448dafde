use once_cell::sync::Lazy;
use regex::Regex;

use crate::line::{Line, LineKind};

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,7})\s+(.*)").unwrap());
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([-*+])\s+(.*)").unwrap());

/// Spaces a tab stands for when measuring indentation.
const TAB_WIDTH: usize = 4;

/// Split markdown into lines and classify each one.
pub fn parse(markdown: &str, indent_width: usize) -> Vec<Line> {
    markdown
        .lines()
        .map(|raw| classify(raw, indent_width))
        .collect()
}

/// Classify a single line. Heading wins over bullet, bullet over anything else.
pub fn classify(raw: &str, indent_width: usize) -> Line {
    let expanded = raw.replace('\t', &" ".repeat(TAB_WIDTH));
    let leading_spaces = expanded.len() - expanded.trim_start_matches(' ').len();
    let indent = leading_spaces / indent_width.max(1);

    Line {
        raw: raw.to_string(),
        indent,
        kind: classify_stripped(expanded.trim()),
    }
}

fn classify_stripped(stripped: &str) -> LineKind {
    if let Some(caps) = HEADING.captures(stripped) {
        return LineKind::Heading {
            level: caps[1].len() as u8,
            content: caps[2].to_string(),
        };
    }

    if let Some(caps) = BULLET.captures(stripped) {
        // The marker group is a single ASCII character
        let marker = caps[1].chars().next().unwrap_or('-');
        return LineKind::Bullet {
            marker,
            content: caps[2].to_string(),
        };
    }

    LineKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kind(line: &str) -> LineKind {
        classify(line, 4).kind
    }

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("### Title", 3, "Title")]
    #[case("####### Seven", 7, "Seven")]
    #[case("   ##   Spaced out", 2, "Spaced out")]
    #[case("#\tTabbed", 1, "Tabbed")]
    fn headings(#[case] line: &str, #[case] level: u8, #[case] content: &str) {
        assert_eq!(
            kind(line),
            LineKind::Heading {
                level,
                content: content.to_string()
            }
        );
    }

    #[rstest]
    #[case("- dash", '-', "dash")]
    #[case("* star", '*', "star")]
    #[case("+ plus", '+', "plus")]
    #[case("        -   deep", '-', "deep")]
    #[case("\t- tabbed", '-', "tabbed")]
    #[case("- trailing   ", '-', "trailing")]
    fn bullets(#[case] line: &str, #[case] marker: char, #[case] content: &str) {
        assert_eq!(
            kind(line),
            LineKind::Bullet {
                marker,
                content: content.to_string()
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    #[case("\t")]
    #[case("Just a paragraph.")]
    #[case("########  Eight hashes")]
    #[case("#NoSpace")]
    #[case("# ")]
    #[case("-")]
    #[case("- ")]
    #[case("-dash without space")]
    #[case("1. ordered")]
    #[case("--- ")]
    fn other_lines(#[case] line: &str) {
        assert_eq!(kind(line), LineKind::Other);
    }

    #[rstest]
    #[case("- a", 0)]
    #[case("   - a", 0)]
    #[case("    - a", 1)]
    #[case("     - a", 1)]
    #[case("       - a", 1)]
    #[case("        - a", 2)]
    #[case("\t- a", 1)]
    #[case("\t\t- a", 2)]
    #[case("  \t- a", 1)]
    fn indent_is_leading_spaces_over_four(#[case] line: &str, #[case] indent: usize) {
        assert_eq!(classify(line, 4).indent, indent);
    }

    #[test]
    fn custom_indent_width() {
        assert_eq!(classify("    - a", 2).indent, 2);
        assert_eq!(classify("\t- a", 2).indent, 2);
    }

    #[test]
    fn raw_is_untouched() {
        let line = classify("\t- item  ", 4);
        assert_eq!(line.raw, "\t- item  ");
    }

    #[test]
    fn splits_on_newlines() {
        let lines = parse("# A\r\n- b\n\nc\n", 4);
        let raws: Vec<&str> = lines.iter().map(|l| l.raw.as_str()).collect();
        assert_eq!(raws, vec!["# A", "- b", "", "c"]);
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(parse("", 4).is_empty());
    }
}
