use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitHubIssue {
    #[serde(default)]
    pub number: u64,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimplifiedIssue {
    pub title: String,
    pub body: String,
    pub labels: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Label>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Label>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_issue() {
        let json = r#"{
            "number": 7,
            "title": "**Login** page",
            "body": null,
            "state": "open",
            "html_url": "https://github.com/acme/board/issues/7",
            "labels": [{"id": 1, "name": "bug", "color": "d73a4a"}, {"name": "ui"}],
            "user": {"login": "someone"}
        }"#;
        let issue: GitHubIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.title.as_deref(), Some("**Login** page"));
        assert!(issue.body.is_none());
        assert_eq!(issue.labels, vec![Label::new("bug"), Label::new("ui")]);
    }

    #[test]
    fn test_missing_or_null_labels() {
        let issue: GitHubIssue = serde_json::from_str(r#"{"title": "a"}"#).unwrap();
        assert!(issue.labels.is_empty());
        let issue: GitHubIssue =
            serde_json::from_str(r#"{"title": "a", "labels": null}"#).unwrap();
        assert!(issue.labels.is_empty());
    }
}
