use regex::Regex;

use crate::models::{GitHubIssue, Label, SimplifiedIssue};

const BOLD_MARKER: &str = "**";
const BLANK_LINE_RUN: &str = r"\n\s*\n+";

pub struct Simplifier {
    blank_lines: Regex,
}

impl Simplifier {
    pub fn new() -> Self {
        Self {
            blank_lines: Regex::new(BLANK_LINE_RUN).expect("Invalid blank-line pattern"),
        }
    }

    pub fn simplify(&self, issue: &GitHubIssue) -> SimplifiedIssue {
        let title = strip_markup(issue.title.as_deref().unwrap_or_default());
        let body = strip_markup(issue.body.as_deref().unwrap_or_default());

        SimplifiedIssue {
            title,
            body: self.collapse_blank_lines(&body),
            labels: flatten_labels(&issue.labels),
        }
    }

    pub fn simplify_all(&self, issues: &[GitHubIssue]) -> Vec<SimplifiedIssue> {
        issues.iter().map(|issue| self.simplify(issue)).collect()
    }

    /// Replaces each run of blank (or whitespace-only) lines with a single
    /// newline and trims newlines from both ends.
    pub fn collapse_blank_lines(&self, text: &str) -> String {
        self.blank_lines
            .replace_all(text, "\n")
            .trim_matches('\n')
            .to_string()
    }
}

impl Default for Simplifier {
    fn default() -> Self {
        Self::new()
    }
}

pub fn strip_markup(text: &str) -> String {
    text.replace(BOLD_MARKER, "")
}

pub fn flatten_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(|l| l.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(title: Option<&str>, body: Option<&str>, labels: &[&str]) -> GitHubIssue {
        GitHubIssue {
            title: title.map(String::from),
            body: body.map(String::from),
            labels: labels.iter().map(|n| Label::new(*n)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_flatten_labels() {
        let labels: Vec<Label> =
            serde_json::from_str(r#"[{"name":"bug"},{"name":"ui"}]"#).unwrap();
        assert_eq!(flatten_labels(&labels), "bug, ui");
        assert_eq!(flatten_labels(&[]), "");
    }

    #[test]
    fn test_collapse_blank_lines() {
        let s = Simplifier::new();
        assert_eq!(s.collapse_blank_lines("a\n\n\nb"), "a\nb");
        assert_eq!(s.collapse_blank_lines("a\n   \n\t\nb"), "a\nb");
        assert_eq!(s.collapse_blank_lines("\n\na\nb\n\n"), "a\nb");
        assert_eq!(s.collapse_blank_lines("a\r\n\r\nb"), "a\r\nb");
        assert_eq!(s.collapse_blank_lines("  indented\nline"), "  indented\nline");
    }

    #[test]
    fn test_simplify_strips_bold_markers() {
        let s = Simplifier::new();
        let out = s.simplify(&issue(
            Some("**US-01** Login"),
            Some("**Como** usuario\n\n\nquiero entrar"),
            &["historia", "frontend"],
        ));
        assert_eq!(out.title, "US-01 Login");
        assert_eq!(out.body, "Como usuario\nquiero entrar");
        assert_eq!(out.labels, "historia, frontend");
    }

    #[test]
    fn test_simplify_null_fields() {
        let out = Simplifier::new().simplify(&issue(None, None, &[]));
        assert_eq!(out, SimplifiedIssue::default());
    }

    #[test]
    fn test_simplify_all_preserves_order() {
        let issues = vec![
            issue(Some("b"), None, &[]),
            issue(Some("a"), None, &[]),
        ];
        let titles: Vec<_> = Simplifier::new()
            .simplify_all(&issues)
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["b", "a"]);
    }
}
