//! Backup export / import
//!
//! Export file: `{ "projects": [...], "exportDate": "<RFC 3339>" }`,
//! named `backup-YYYY-MM-DD.json`. Import reads `projects` (or `entries`)
//! and ignores everything else.

use crate::error::{Error, Result};
use crate::types::PortfolioProject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub projects: Vec<PortfolioProject>,
    pub export_date: DateTime<Utc>,
}

impl BackupDocument {
    pub fn new(projects: Vec<PortfolioProject>, export_date: DateTime<Utc>) -> Self {
        Self {
            projects,
            export_date,
        }
    }

    /// Pretty-printed JSON, as offered for download
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn file_name(&self) -> String {
        backup_file_name(self.export_date.date_naive())
    }
}

pub fn backup_file_name(date: NaiveDate) -> String {
    format!("backup-{}.json", date.format("%Y-%m-%d"))
}

/// Extract the project list from an uploaded document
pub fn parse_backup(text: &str) -> Result<Vec<PortfolioProject>> {
    let mut value: serde_json::Value = serde_json::from_str(text)?;
    let projects = value
        .as_object_mut()
        .and_then(|object| object.remove("projects").or_else(|| object.remove("entries")))
        .filter(|projects| !projects.is_null())
        .ok_or(Error::MissingProjects)?;
    Ok(serde_json::from_value(projects)?)
}
