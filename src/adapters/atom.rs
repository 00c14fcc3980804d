use crate::domain::model::FeedEntry;
use crate::utils::error::{FeedError, Result};
use chrono::DateTime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    title: Option<AtomText>,
    updated: Option<String>,
    #[serde(default)]
    content: Option<AtomText>,
}

/// `<title>` / `<content>`：只取文字，CDATA 與轉義後的 HTML 都會被還原
#[derive(Debug, Default, Deserialize)]
struct AtomText {
    #[serde(rename = "$text", default)]
    value: String,
}

/// Parses an Atom document into feed entries, in document order.
pub fn parse_feed(body: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed: AtomFeed = quick_xml::de::from_reader(body)?;

    feed.entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_feed_entry(index))
        .collect()
}

impl AtomEntry {
    fn into_feed_entry(self, index: usize) -> Result<FeedEntry> {
        let title = self.title.unwrap_or_default().value;
        let updated = self.updated.ok_or_else(|| {
            FeedError::malformed(format!("entry #{} ('{}') has no <updated>", index, title))
        })?;
        let updated_at = DateTime::parse_from_rfc3339(updated.trim()).map_err(|e| {
            FeedError::malformed(format!(
                "entry #{} ('{}') has invalid <updated> '{}': {}",
                index, title, updated, e
            ))
        })?;

        Ok(FeedEntry {
            title,
            updated_at,
            content: self.content.unwrap_or_default().value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_cdata_and_escaped_content() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>tag:google.com,2016:gke-stable-channel-release-notes</id>
  <title>GKE stable channel - Release notes</title>
  <updated>2024-01-15T00:00:00-08:00</updated>
  <link rel="self" href="https://cloud.google.com/feeds/gke-stable-channel-release-notes.xml"/>
  <entry>
    <title>January 15, 2024</title>
    <id>tag:google.com,2016:gke-stable-channel-release-notes#January_15_2024</id>
    <updated>2024-01-15T00:00:00-08:00</updated>
    <link rel="alternate" href="https://cloud.google.com/kubernetes-engine/docs/release-notes-stable"/>
    <content type="html"><![CDATA[<p>The following versions are now available in the stable channel: <a href="x">1.27.8-gke.1067004</a></p>]]></content>
  </entry>
  <entry>
    <title type="text">January 08, 2024</title>
    <updated>2024-01-08T00:00:00Z</updated>
    <content type="html">&lt;a href="y"&gt;1.26.11-gke.1055000&lt;/a&gt;</content>
  </entry>
</feed>"#;

        let entries = parse_feed(xml.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title, "January 15, 2024");
        assert_eq!(entries[0].release_timestamp(), "2024-01-15T00:00:00-08:00");
        assert!(entries[0]
            .content
            .contains(r#"<a href="x">1.27.8-gke.1067004</a>"#));

        assert_eq!(entries[1].title, "January 08, 2024");
        assert_eq!(entries[1].release_timestamp(), "2024-01-08T00:00:00Z");
        assert_eq!(entries[1].content, r#"<a href="y">1.26.11-gke.1055000</a>"#);
    }

    #[test]
    fn test_feed_without_entries() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>empty</title></feed>"#;
        assert!(parse_feed(xml.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_updated_is_malformed() {
        let xml = r#"<feed><entry><title>x</title><updated>yesterday</updated><content>c</content></entry></feed>"#;
        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedError::MalformedFeedError { .. }));
    }

    #[test]
    fn test_missing_updated_is_malformed() {
        let xml = r#"<feed><entry><title>x</title><content>c</content></entry></feed>"#;
        let err = parse_feed(xml.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("<updated>"));
    }

    #[test]
    fn test_broken_xml_is_malformed() {
        let err = parse_feed(b"<feed><entry><title>x</title>").unwrap_err();
        assert!(matches!(err, FeedError::MalformedFeedError { .. }));
    }
}
