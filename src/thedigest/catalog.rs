//! # Issue Catalog
//!
//! The catalog is the single source of truth for the archive: an ordered list of
//! [`IssueRecord`]s, newest first. Source order **is** display order, so nothing
//! downstream sorts it.
//!
//! The built-in catalog ships embedded in the binary (`data/issues.json`). A JSON
//! file with the same shape can replace it through the `catalog_path` setting.
//! Either way the catalog is loaded once and never mutated afterwards.

use crate::error::{DigestError, Result};
use crate::model::IssueRecord;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const BUILTIN_ISSUES: &str = include_str!("data/issues.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    issues: Vec<IssueRecord>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_ISSUES)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let issues: Vec<IssueRecord> = serde_json::from_str(json)?;
        Self::from_issues(issues)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DigestError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Builds a catalog, rejecting records that break the catalog invariants.
    pub fn from_issues(issues: Vec<IssueRecord>) -> Result<Self> {
        validate(&issues)?;
        Ok(Self { issues })
    }

    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }

    pub fn get(&self, id: u32) -> Option<&IssueRecord> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    pub fn latest(&self) -> Option<&IssueRecord> {
        self.issues.first()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

fn validate(issues: &[IssueRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut featured = 0;

    for (pos, issue) in issues.iter().enumerate() {
        if issue.id == 0 {
            return Err(DigestError::Catalog(format!(
                "entry {} has id 0; ids must be positive",
                pos
            )));
        }
        if !seen.insert(issue.id) {
            return Err(DigestError::Catalog(format!(
                "duplicate issue id {}",
                issue.id
            )));
        }
        if issue.title.trim().is_empty() {
            return Err(DigestError::Catalog(format!(
                "issue #{} has an empty title",
                issue.id
            )));
        }
        if issue.read_time_minutes == 0 {
            return Err(DigestError::Catalog(format!(
                "issue #{} has a zero read time",
                issue.id
            )));
        }
        if issue.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(DigestError::Catalog(format!(
                "issue #{} has an empty tag",
                issue.id
            )));
        }
        if pos > 0 && issues[pos - 1].id <= issue.id {
            return Err(DigestError::Catalog(format!(
                "issue #{} is out of order; the catalog must be newest first",
                issue.id
            )));
        }
        if issue.featured {
            featured += 1;
        }
    }

    if featured > 1 {
        return Err(DigestError::Catalog(format!(
            "{} issues are marked featured; at most one is allowed",
            featured
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn issue(id: u32, title: &str) -> IssueRecord {
        IssueRecord::new(
            id,
            title,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            5,
            "excerpt",
            &["Tag"],
        )
    }

    #[test]
    fn builtin_catalog_is_newest_first_with_featured_latest() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.issues().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![52, 51, 50, 49, 48, 47]);

        let latest = catalog.latest().unwrap();
        assert!(latest.featured);
        assert_eq!(latest.title, "The Future of Remote Work: 2024 Trends");
        assert_eq!(catalog.issues().iter().filter(|i| i.featured).count(), 1);
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.get(51).unwrap().title,
            "AI in Business: Beyond the Hype"
        );
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_issues(vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.latest().is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_issues(vec![issue(3, "A"), issue(3, "B")]).unwrap_err();
        assert!(err.to_string().contains("duplicate issue id 3"));
    }

    #[test]
    fn rejects_oldest_first_order() {
        let err = Catalog::from_issues(vec![issue(1, "A"), issue(2, "B")]).unwrap_err();
        assert!(err.to_string().contains("newest first"));
    }

    #[test]
    fn rejects_zero_id_and_empty_title() {
        assert!(Catalog::from_issues(vec![issue(0, "A")]).is_err());
        assert!(Catalog::from_issues(vec![issue(4, "  ")]).is_err());
    }

    #[test]
    fn rejects_multiple_featured() {
        let err = Catalog::from_issues(vec![issue(2, "A").featured(), issue(1, "B").featured()])
            .unwrap_err();
        assert!(matches!(err, DigestError::Catalog(_)));
    }

    #[test]
    fn load_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("issues.json");
        let json = serde_json::to_string(&vec![issue(9, "Nine"), issue(8, "Eight")]).unwrap();
        fs::write(&path, json).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(8).unwrap().title, "Eight");
    }

    #[test]
    fn load_missing_file_is_catalog_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DigestError::Catalog(_)));
    }
}
