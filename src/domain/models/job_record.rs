// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Fixed output columns shared by every platform, in schema order.
pub const FIXED_COLUMNS: [&str; 5] = [
    "JobLink",
    "JobTitle",
    "CompanyName",
    "JobLocation",
    "TimePosted",
];

/// One extracted job posting. The link is mandatory and serves as the
/// record's identity; everything else is best effort. Extra keys come from
/// user-registered extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRecord {
    pub job_link: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub job_location: Option<String>,
    pub time_posted: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, Option<String>>,
}

impl JobRecord {
    pub fn new(job_link: String) -> Self {
        Self {
            job_link,
            job_title: None,
            company_name: None,
            job_location: None,
            time_posted: None,
            extras: BTreeMap::new(),
        }
    }

    /// Value for a named column, fixed or extra. Lookup style: absent
    /// columns and absent values both come back as `None`.
    pub fn value(&self, column: &str) -> Option<&str> {
        match column {
            "JobLink" => Some(self.job_link.as_str()),
            "JobTitle" => self.job_title.as_deref(),
            "CompanyName" => self.company_name.as_deref(),
            "JobLocation" => self.job_location.as_deref(),
            "TimePosted" => self.time_posted.as_deref(),
            _ => self.extras.get(column).and_then(|v| v.as_deref()),
        }
    }
}

/// Ordered collection of records produced by one batch call, together with
/// its column schema (fixed columns plus any requested extras) and the
/// number of page tasks that failed while producing it. The failure count
/// is what distinguishes a partial result from a genuine "no results".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultSet {
    columns: Vec<String>,
    records: Vec<JobRecord>,
    failed_tasks: usize,
}

impl Default for ResultSet {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl ResultSet {
    pub fn new(extra_columns: &[String]) -> Self {
        let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
        for extra in extra_columns {
            if !columns.iter().any(|c| c == extra) {
                columns.push(extra.clone());
            }
        }
        Self {
            columns,
            records: Vec::new(),
            failed_tasks: 0,
        }
    }

    pub fn from_records(extra_columns: &[String], records: Vec<JobRecord>) -> Self {
        let mut set = Self::new(extra_columns);
        set.records = records;
        set
    }

    pub fn is_fixed_column(name: &str) -> bool {
        FIXED_COLUMNS.contains(&name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: JobRecord) {
        self.records.push(record);
    }

    /// Absorb another result set: records are appended, extra columns are
    /// unioned, failure counts are summed.
    pub fn merge(&mut self, other: ResultSet) {
        for column in other.columns {
            if !self.columns.iter().any(|c| *c == column) {
                self.columns.push(column);
            }
        }
        self.records.extend(other.records);
        self.failed_tasks += other.failed_tasks;
    }

    pub fn record_failure(&mut self) {
        self.failed_tasks += 1;
    }

    pub fn failed_tasks(&self) -> usize {
        self.failed_tasks
    }

    /// One CSV-ready row per record, ordered by the schema; absent values
    /// render as empty cells.
    pub fn row(&self, record: &JobRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| record.value(column).unwrap_or_default().to_string())
            .collect()
    }
}

impl fmt::Display for ResultSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} record(s), {} failed task(s)",
            self.records.len(),
            self.failed_tasks
        )?;
        writeln!(f, "{}", self.columns.join(" | "))?;
        for record in &self.records {
            writeln!(f, "{}", self.row(record).join(" | "))?;
        }
        Ok(())
    }
}
