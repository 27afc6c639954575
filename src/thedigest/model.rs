use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One published newsletter issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: u32,
    pub title: String,
    pub publish_date: NaiveDate,
    pub read_time_minutes: u32,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Display hint for the newest issue. Never affects search.
    #[serde(default)]
    pub featured: bool,
}

impl IssueRecord {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        publish_date: NaiveDate,
        read_time_minutes: u32,
        excerpt: impl Into<String>,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            publish_date,
            read_time_minutes,
            excerpt: excerpt.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
        }
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// "6 min"
    pub fn read_time_label(&self) -> String {
        format!("{} min", self.read_time_minutes)
    }

    /// "January 16, 2024"
    pub fn publish_date_label(&self) -> String {
        self.publish_date.format("%B %-d, %Y").to_string()
    }

    /// Link target for the issue detail page.
    pub fn href(&self) -> String {
        format!("/archive/{}", self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Normal,
    Destructive,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IssueRecord {
        IssueRecord::new(
            52,
            "The Future of Remote Work: 2024 Trends",
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            6,
            "Exploring remote work.",
            &["Remote Work", "Productivity"],
        )
    }

    #[test]
    fn labels_follow_site_formatting() {
        let issue = sample();
        assert_eq!(issue.read_time_label(), "6 min");
        assert_eq!(issue.publish_date_label(), "January 16, 2024");
        assert_eq!(issue.href(), "/archive/52");
    }

    #[test]
    fn featured_defaults_to_false_when_missing_from_json() {
        let json = r#"{
            "id": 7,
            "title": "T",
            "publish_date": "2023-05-02",
            "read_time_minutes": 3,
            "excerpt": "E",
            "tags": ["A"]
        }"#;
        let issue: IssueRecord = serde_json::from_str(json).unwrap();
        assert!(!issue.featured);
        assert_eq!(issue.publish_date, NaiveDate::from_ymd_opt(2023, 5, 2).unwrap());
    }
}
