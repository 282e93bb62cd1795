use serde::{Deserialize, Serialize};

pub const TITLE_COLUMN: &str = "Title";
pub const STATUS_COLUMN: &str = "Status";
pub const SIZE_COLUMN: &str = "Size";
pub const ASSIGNEES_COLUMN: &str = "Assignees";
pub const URL_COLUMN: &str = "URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BacklogRecord {
    pub title: String,
    pub status: String,
    pub size: String,
    pub assignees: String,
    pub url: String,
}
