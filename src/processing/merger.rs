use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{
    BacklogRecord, MergedRecord, SimplifiedIssue, ASSIGNEES_COLUMN, SIZE_COLUMN, STATUS_COLUMN,
    TITLE_COLUMN, URL_COLUMN,
};
use crate::storage::Table;

/// Backlog rows keyed by title. A title seen twice keeps the later row.
#[derive(Debug, Default)]
pub struct BacklogIndex {
    records: HashMap<String, BacklogRecord>,
}

impl BacklogIndex {
    pub fn from_table(table: &Table) -> Result<Self> {
        let title = table
            .column(TITLE_COLUMN)
            .ok_or_else(|| Error::MissingColumn(TITLE_COLUMN.to_string()))?;
        let status = table.column(STATUS_COLUMN);
        let size = table.column(SIZE_COLUMN);
        let assignees = table.column(ASSIGNEES_COLUMN);
        let url = table.column(URL_COLUMN);

        for (name, column) in [
            (STATUS_COLUMN, status),
            (SIZE_COLUMN, size),
            (ASSIGNEES_COLUMN, assignees),
            (URL_COLUMN, url),
        ] {
            if column.is_none() {
                tracing::warn!("Backlog has no '{}' column, it will be left empty", name);
            }
        }

        let mut index = Self::default();
        for row in &table.rows {
            let cell = |column: Option<usize>| {
                column
                    .map(|c| Table::cell(row, c).to_string())
                    .unwrap_or_default()
            };
            index.insert(BacklogRecord {
                title: Table::cell(row, title).to_string(),
                status: cell(status),
                size: cell(size),
                assignees: cell(assignees),
                url: cell(url),
            });
        }

        tracing::debug!(
            "Indexed {} backlog rows under {} titles",
            table.rows.len(),
            index.len()
        );
        Ok(index)
    }

    pub fn insert(&mut self, record: BacklogRecord) {
        if let Some(previous) = self.records.insert(record.title.clone(), record) {
            tracing::debug!("Duplicate backlog title, keeping last row: {}", previous.title);
        }
    }

    pub fn get(&self, title: &str) -> Option<&BacklogRecord> {
        self.records.get(title)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<BacklogRecord> for BacklogIndex {
    fn from_iter<I: IntoIterator<Item = BacklogRecord>>(iter: I) -> Self {
        let mut index = Self::default();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct MergeStats {
    pub matched: usize,
    pub unmatched: usize,
}

/// Left join of issues onto the backlog: one record per issue, in issue order.
pub fn merge(index: &BacklogIndex, issues: &[SimplifiedIssue]) -> Vec<MergedRecord> {
    issues
        .iter()
        .map(|issue| {
            let backlog = index.get(&issue.title);
            if backlog.is_none() {
                tracing::debug!("No backlog row for issue: {}", issue.title);
            }
            MergedRecord::new(issue, backlog)
        })
        .collect()
}

pub fn match_stats(index: &BacklogIndex, issues: &[SimplifiedIssue]) -> MergeStats {
    let matched = issues
        .iter()
        .filter(|issue| index.get(&issue.title).is_some())
        .count();
    MergeStats {
        matched,
        unmatched: issues.len() - matched,
    }
}
