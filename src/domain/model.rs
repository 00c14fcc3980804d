use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};

/// One `<entry>` of a release-notes feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: String,
    pub updated_at: DateTime<FixedOffset>,
    pub content: String,
}

impl FeedEntry {
    pub fn new(
        title: impl Into<String>,
        updated_at: DateTime<FixedOffset>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            updated_at,
            content: content.into(),
        }
    }

    /// RFC 3339 到秒，UTC 以 `Z` 表示，其餘保留原始時區偏移
    pub fn release_timestamp(&self) -> String {
        self.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub version: String,
    pub release_timestamp: String,
}

/// Renovate custom datasource document: `{"releases": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSet {
    pub releases: Vec<ReleaseRecord>,
}

impl ReleaseSet {
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.releases.iter().map(|r| r.version.as_str())
    }
}
