use crate::domain::ports::{AVAILABLE_MARKER, UNAVAILABLE_MARKER};

/// Cuts an entry's content down to the part that lists currently available
/// versions.
///
/// The unavailable marker is applied first: everything from its first
/// occurrence onward is discarded, and only then is the available marker
/// looked up in what remains. If a feed ever lists removed versions *before*
/// the available ones, this hides the available list for that entry. That
/// ordering is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSegmenter {
    available_marker: String,
    unavailable_marker: String,
}

impl ContentSegmenter {
    pub fn new(available_marker: impl Into<String>, unavailable_marker: impl Into<String>) -> Self {
        Self {
            available_marker: available_marker.into(),
            unavailable_marker: unavailable_marker.into(),
        }
    }

    /// Region after the first available marker and before the first
    /// unavailable marker. Empty when the available marker is missing.
    pub fn available_region<'a>(&self, content: &'a str) -> &'a str {
        let listed = match content.find(&self.unavailable_marker) {
            Some(end) => &content[..end],
            None => content,
        };

        match listed.find(&self.available_marker) {
            Some(start) => &listed[start + self.available_marker.len()..],
            None => "",
        }
    }
}

impl Default for ContentSegmenter {
    fn default() -> Self {
        Self::new(AVAILABLE_MARKER, UNAVAILABLE_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVAILABLE: &str = "The following versions are now available in the stable channel:";
    const UNAVAILABLE: &str = "The following versions are no longer available in the stable channel:";

    #[test]
    fn test_region_between_markers() {
        let content = format!("intro {} AAA {} BBB", AVAILABLE, UNAVAILABLE);
        let region = ContentSegmenter::default().available_region(&content);
        assert_eq!(region, " stable channel: AAA ");
    }

    #[test]
    fn test_region_runs_to_end_without_unavailable_marker() {
        let content = format!("{} AAA BBB", AVAILABLE);
        let region = ContentSegmenter::default().available_region(&content);
        assert_eq!(region, " stable channel: AAA BBB");
    }

    #[test]
    fn test_missing_available_marker_yields_empty_region() {
        let content = format!("nothing new here {} BBB", UNAVAILABLE);
        assert_eq!(ContentSegmenter::default().available_region(&content), "");
        assert_eq!(ContentSegmenter::default().available_region(""), "");
    }

    #[test]
    fn test_only_first_occurrence_of_each_marker_counts() {
        let content = format!("{} A {} B {} C {} D", AVAILABLE, AVAILABLE, UNAVAILABLE, UNAVAILABLE);
        let region = ContentSegmenter::default().available_region(&content);
        assert!(region.contains(" A "));
        assert!(region.contains(" B "));
        assert!(!region.contains(" C "));
        assert!(!region.contains(" D"));
    }

    #[test]
    fn test_unavailable_marker_before_available_hides_everything() {
        let content = format!("{} OLD {} NEW", UNAVAILABLE, AVAILABLE);
        assert_eq!(ContentSegmenter::default().available_region(&content), "");
    }

    #[test]
    fn test_custom_markers() {
        let segmenter = ContentSegmenter::new("[in]", "[out]");
        assert_eq!(segmenter.available_region("x [in] keep [out] drop"), " keep ");
    }
}
