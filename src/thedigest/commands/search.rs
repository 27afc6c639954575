//! Archive search.
//!
//! A record is visible when the query is empty, or when the lowercased query is a
//! substring of the lowercased title, excerpt, or any single tag. The result keeps
//! catalog order: this is a stable filter, never a re-sort. No trimming, no
//! tokenizing, no fuzziness.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::IssueRecord;
use tracing::debug;

/// Returns the records of `issues` matching `query`, in their original order.
pub fn filter_issues(issues: &[IssueRecord], query: &str) -> Vec<IssueRecord> {
    if query.is_empty() {
        return issues.to_vec();
    }

    let needle = query.to_lowercase();
    issues
        .iter()
        .filter(|issue| matches(issue, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
fn matches(issue: &IssueRecord, needle: &str) -> bool {
    issue.title.to_lowercase().contains(needle)
        || issue.excerpt.to_lowercase().contains(needle)
        || issue
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// `3 results for "ai"`. Nothing is shown for an empty query.
pub fn result_summary(count: usize, query: &str) -> Option<String> {
    if query.is_empty() {
        return None;
    }
    let noun = if count == 1 { "result" } else { "results" };
    Some(format!("{} {} for \"{}\"", count, noun, query))
}

pub fn run(catalog: &Catalog, query: &str) -> Result<CmdResult> {
    let listed = filter_issues(catalog.issues(), query);
    debug!(query, hits = listed.len(), "archive search");

    let mut result = CmdResult::default();
    if !query.is_empty() {
        if listed.is_empty() {
            result.add_message(CmdMessage::info(format!(
                "No issues found matching \"{}\"",
                query
            )));
        }
        result = result.with_query(query);
    }
    Ok(result.with_listed_issues(listed))
}
