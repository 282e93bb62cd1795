use serde::Serialize;

use super::backlog::BacklogRecord;
use super::issue::SimplifiedIssue;

/// Header line of the product backlog file. Matches the field order of
/// [`MergedRecord`].
pub const MERGED_HEADER: [&str; 7] = [
    "Titulo",
    "Descripcion",
    "Estado",
    "Etiqueta",
    "Tamaño",
    "Asignados",
    "URL",
];

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MergedRecord {
    #[serde(rename = "Titulo")]
    pub title: String,
    #[serde(rename = "Descripcion")]
    pub description: String,
    #[serde(rename = "Estado")]
    pub status: String,
    #[serde(rename = "Etiqueta")]
    pub label: String,
    #[serde(rename = "Tamaño")]
    pub size: String,
    #[serde(rename = "Asignados")]
    pub assignees: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl MergedRecord {
    /// Builds the output row for one issue. Backlog-sourced fields stay empty
    /// when the issue has no backlog counterpart.
    pub fn new(issue: &SimplifiedIssue, backlog: Option<&BacklogRecord>) -> Self {
        let record = Self {
            title: issue.title.clone(),
            description: issue.body.clone(),
            label: issue.labels.clone(),
            ..Default::default()
        };

        match backlog {
            Some(row) => Self {
                status: row.status.clone(),
                size: row.size.clone(),
                assignees: row.assignees.clone(),
                url: row.url.clone(),
                ..record
            },
            None => record,
        }
    }
}
