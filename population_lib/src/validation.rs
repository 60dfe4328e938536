//! Input validation and record sanity checks.
//!
//! The API is expected to send non-empty identifiers and non-negative
//! populations. [`check_records`] reports rows that break this; the client
//! never rejects a response because of it.

use std::fmt;

use datausa_api::types::PopulationRecord;

use crate::error::PopulationError;
use crate::table::SortColumn;

/// What is wrong with a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueKind {
    EmptyId,
    EmptyName,
    EmptySlug,
    NegativePopulation,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IssueKind::EmptyId => "empty id",
            IssueKind::EmptyName => "empty name",
            IssueKind::EmptySlug => "empty slug",
            IssueKind::NegativePopulation => "negative population",
        };
        f.write_str(text)
    }
}

/// A problem found in the record at `index` of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub kind: IssueKind,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}: {}", self.index, self.kind)
    }
}

/// Returns every invariant violation in `records`, in index order.
pub fn check_records<'a, R, I>(records: I) -> Vec<RecordIssue>
where
    R: PopulationRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut issues = Vec::new();
    for (index, record) in records.into_iter().enumerate() {
        let mut push = |kind| issues.push(RecordIssue { index, kind });
        if record.id().is_empty() {
            push(IssueKind::EmptyId);
        }
        if record.name().is_empty() {
            push(IssueKind::EmptyName);
        }
        if record.slug().is_empty() {
            push(IssueKind::EmptySlug);
        }
        if record.population() < 0 {
            push(IssueKind::NegativePopulation);
        }
    }
    issues
}

/// Like [`check_records`], logging each issue as a warning.
pub fn warn_on_issues<'a, R, I>(label: &str, records: I) -> usize
where
    R: PopulationRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let issues = check_records(records);
    for issue in &issues {
        tracing::warn!("{} {}", label, issue);
    }
    issues.len()
}

/// Validate a sort column name: case-insensitive, surrounding whitespace ignored.
pub fn validate_sort_column(input: &str) -> Result<SortColumn, PopulationError> {
    input.trim().to_lowercase().parse().map_err(|_| {
        PopulationError::InvalidInput(format!(
            "unknown sort column '{}'. Valid values: location, population, year",
            input
        ))
    })
}
