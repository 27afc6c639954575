//! Archive listing: the unfiltered, paginated view and single-issue lookup.
//!
//! The loaded catalog is only the newest slice of everything ever published, so the
//! footer counts against the advertised total when that is larger.

use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DigestError, Result};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchivePage {
    /// 1-based.
    pub number: usize,
    pub size: usize,
    /// 1-based position of the first shown issue; 0 when nothing is shown.
    pub first: usize,
    /// 1-based position of the last shown issue; 0 when nothing is shown.
    pub last: usize,
    pub total: usize,
    pub has_more: bool,
}

impl ArchivePage {
    /// "Showing latest 6 of 52 issues"
    pub fn summary(&self) -> String {
        if self.last == 0 {
            format!("No issues on page {} of the archive", self.number)
        } else if self.number == 1 {
            format!("Showing latest {} of {} issues", self.last, self.total)
        } else {
            format!(
                "Showing issues {}-{} of {}",
                self.first, self.last, self.total
            )
        }
    }
}

pub fn run(
    catalog: &Catalog,
    page: usize,
    page_size: usize,
    advertised_total: usize,
) -> Result<CmdResult> {
    if page == 0 {
        return Err(DigestError::Api("Archive pages start at 1".to_string()));
    }
    if page_size == 0 {
        return Err(DigestError::Config(
            "archive_page_size must be greater than zero".to_string(),
        ));
    }

    let issues = catalog.issues();
    let start = (page - 1).saturating_mul(page_size).min(issues.len());
    let end = start.saturating_add(page_size).min(issues.len());
    let listed = issues[start..end].to_vec();

    let info = ArchivePage {
        number: page,
        size: page_size,
        first: if listed.is_empty() { 0 } else { start + 1 },
        last: if listed.is_empty() { 0 } else { end },
        total: advertised_total.max(issues.len()),
        has_more: end < issues.len(),
    };
    debug!(page, shown = listed.len(), has_more = info.has_more, "archive page");

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Page {} is past the end of the archive",
            page
        )));
    }
    Ok(result.with_listed_issues(listed).with_page(info))
}

/// Resolves `/archive/{id}`.
pub fn view(catalog: &Catalog, id: u32) -> Result<CmdResult> {
    let issue = catalog
        .get(id)
        .cloned()
        .ok_or(DigestError::IssueNotFound(id))?;
    Ok(CmdResult::default().with_issue(issue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &CmdResult) -> Vec<u32> {
        result.listed_issues.iter().map(|i| i.id).collect()
    }

    #[test]
    fn first_page_shows_latest_issues() {
        let catalog = Catalog::builtin().unwrap();
        let result = run(&catalog, 1, 6, 52).unwrap();

        assert_eq!(ids(&result), vec![52, 51, 50, 49, 48, 47]);
        let page = result.page.unwrap();
        assert!(!page.has_more);
        assert_eq!(page.summary(), "Showing latest 6 of 52 issues");
    }

    #[test]
    fn smaller_pages_walk_the_catalog_in_order() {
        let catalog = Catalog::builtin().unwrap();

        let first = run(&catalog, 1, 4, 52).unwrap();
        assert_eq!(ids(&first), vec![52, 51, 50, 49]);
        assert!(first.page.as_ref().unwrap().has_more);

        let second = run(&catalog, 2, 4, 52).unwrap();
        assert_eq!(ids(&second), vec![48, 47]);
        let page = second.page.unwrap();
        assert!(!page.has_more);
        assert_eq!(page.summary(), "Showing issues 5-6 of 52");
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let result = run(&catalog, 9, 6, 52).unwrap();

        assert!(result.listed_issues.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.page.unwrap().first, 0);
    }

    #[test]
    fn total_never_undercounts_the_loaded_catalog() {
        let catalog = Catalog::builtin().unwrap();
        let result = run(&catalog, 1, 6, 3).unwrap();
        assert_eq!(result.page.unwrap().total, 6);
    }

    #[test]
    fn page_zero_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        assert!(matches!(run(&catalog, 0, 6, 52), Err(DigestError::Api(_))));
        assert!(matches!(run(&catalog, 1, 0, 52), Err(DigestError::Config(_))));
    }

    #[test]
    fn view_resolves_issue_or_reports_missing() {
        let catalog = Catalog::builtin().unwrap();
        let found = view(&catalog, 49).unwrap();
        assert_eq!(
            found.issue.unwrap().title,
            "The Data-Driven Decision Making Revolution"
        );

        assert!(matches!(
            view(&catalog, 3),
            Err(DigestError::IssueNotFound(3))
        ));
    }
}
