use crate::commands::archive::ArchivePage;
use crate::config::DigestConfig;
use crate::model::IssueRecord;

pub mod archive;
pub mod config;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_issues: Vec<IssueRecord>,
    /// Set when the listing came from a non-empty search.
    pub query: Option<String>,
    pub page: Option<ArchivePage>,
    pub issue: Option<IssueRecord>,
    pub config: Option<DigestConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_issues(mut self, issues: Vec<IssueRecord>) -> Self {
        self.listed_issues = issues;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_page(mut self, page: ArchivePage) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_issue(mut self, issue: IssueRecord) -> Self {
        self.issue = Some(issue);
        self
    }

    pub fn with_config(mut self, config: DigestConfig) -> Self {
        self.config = Some(config);
        self
    }
}
