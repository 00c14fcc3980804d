use crate::core::dedup::dedup_first_seen;
use crate::core::matcher::match_versions;
use crate::core::segmenter::ContentSegmenter;
use crate::domain::model::{FeedEntry, ReleaseRecord, ReleaseSet};

/// Turns feed entries into release records: segment, match, dedup, then
/// stamp each surviving version with the entry's timestamp.
#[derive(Debug, Clone, Default)]
pub struct EntryProcessor {
    segmenter: ContentSegmenter,
}

impl EntryProcessor {
    pub fn new(segmenter: ContentSegmenter) -> Self {
        Self { segmenter }
    }

    /// 可用版本，依首次出現順序，已去重
    pub fn extract_versions<'a>(&self, content: &'a str) -> Vec<&'a str> {
        let region = self.segmenter.available_region(content);
        dedup_first_seen(match_versions(region))
    }

    pub fn process_entry(&self, entry: &FeedEntry) -> Vec<ReleaseRecord> {
        let versions = self.extract_versions(&entry.content);
        if versions.is_empty() {
            tracing::debug!("No available versions in entry '{}'", entry.title);
            return Vec::new();
        }

        let release_timestamp = entry.release_timestamp();
        tracing::debug!(
            "Entry '{}' ({}): {} version(s)",
            entry.title,
            release_timestamp,
            versions.len()
        );

        versions
            .into_iter()
            .map(|version| ReleaseRecord {
                version: version.to_string(),
                release_timestamp: release_timestamp.clone(),
            })
            .collect()
    }

    pub fn process(&self, entries: &[FeedEntry]) -> ReleaseSet {
        let releases = entries
            .iter()
            .flat_map(|entry| self.process_entry(entry))
            .collect();
        ReleaseSet { releases }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    const SCENARIO_A: &str = concat!(
        "<p>Release notes</p>",
        "The following versions are now available in the stable channel: ",
        r#"<a href="x">1.2.3-gke.4</a> <a href="y">1.2.3-gke.4</a> <a href="z">1.3.0-gke.1</a> "#,
        "The following versions are no longer available in the stable channel: ",
        r#"<a href="w">1.0.0-gke.0</a>"#,
    );

    fn entry(ts: &str, content: &str) -> FeedEntry {
        FeedEntry::new("entry", DateTime::parse_from_rfc3339(ts).unwrap(), content)
    }

    fn record(version: &str, ts: &str) -> ReleaseRecord {
        ReleaseRecord {
            version: version.to_string(),
            release_timestamp: ts.to_string(),
        }
    }

    #[test]
    fn test_scenario_available_list_deduped_and_removed_excluded() {
        let set = EntryProcessor::default().process(&[entry("2024-01-15T00:00:00Z", SCENARIO_A)]);
        assert_eq!(
            set.releases,
            vec![
                record("1.2.3-gke.4", "2024-01-15T00:00:00Z"),
                record("1.3.0-gke.1", "2024-01-15T00:00:00Z"),
            ]
        );
    }

    #[test]
    fn test_entry_without_available_marker_contributes_nothing() {
        let content = r#"Security bulletin. <a href="x">1.2.3-gke.4</a>"#;
        let set = EntryProcessor::default().process(&[entry("2024-01-15T00:00:00Z", content)]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_no_entries_yields_empty_set() {
        let set = EntryProcessor::default().process(&[]);
        assert_eq!(set, ReleaseSet::default());
    }

    #[test]
    fn test_entry_order_preserved_and_no_cross_entry_dedup() {
        let newer = entry(
            "2024-02-01T00:00:00Z",
            r#"The following versions are now available in the rapid channel: <a href="a">1.30.1-gke.2</a> <a href="b">1.29.0-gke.9</a>"#,
        );
        let older = entry(
            "2024-01-01T00:00:00Z",
            r#"The following versions are now available in the rapid channel: <a href="c">1.29.0-gke.9</a>"#,
        );

        let set = EntryProcessor::default().process(&[newer, older]);
        assert_eq!(
            set.releases,
            vec![
                record("1.30.1-gke.2", "2024-02-01T00:00:00Z"),
                record("1.29.0-gke.9", "2024-02-01T00:00:00Z"),
                record("1.29.0-gke.9", "2024-01-01T00:00:00Z"),
            ]
        );
    }

    #[test]
    fn test_n_distinct_tokens_give_n_records_in_order() {
        let versions = ["1.27.16-gke.1", "1.28.14-gke.2", "1.29.9-gke.3", "1.30.5-gke.4"];
        let links: String = versions
            .iter()
            .enumerate()
            .map(|(i, v)| format!(r#"<li><a href="r{}">{}</a></li>"#, i, v))
            .collect();
        let content = format!(
            "The following versions are now available in the regular channel:<ul>{}</ul>The following versions are no longer available in the regular channel:",
            links
        );

        let set = EntryProcessor::default().process(&[entry("2024-05-06T07:08:09+02:00", &content)]);
        assert_eq!(set.versions().collect::<Vec<_>>(), versions);
        assert!(set
            .releases
            .iter()
            .all(|r| r.release_timestamp == "2024-05-06T07:08:09+02:00"));
    }

    #[test]
    fn test_custom_segmenter() {
        let processor = EntryProcessor::new(ContentSegmenter::new("NEW:", "OLD:"));
        assert_eq!(
            processor.extract_versions(r#"NEW: <a href="n">2.0.0-gke.1</a> OLD: <a href="o">1.0.0-gke.1</a>"#),
            vec!["2.0.0-gke.1"]
        );
    }
}
