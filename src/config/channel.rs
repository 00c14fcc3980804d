use crate::utils::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// GKE release channel; each one publishes its own release-notes feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Stable,
    Regular,
    Rapid,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Stable, Channel::Regular, Channel::Rapid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Regular => "regular",
            Channel::Rapid => "rapid",
        }
    }

    pub fn feed_url(&self) -> &'static str {
        match self {
            Channel::Stable => "https://cloud.google.com/feeds/gke-stable-channel-release-notes.xml",
            Channel::Regular => "https://cloud.google.com/feeds/gke-regular-channel-release-notes.xml",
            Channel::Rapid => "https://cloud.google.com/feeds/gke-rapid-channel-release-notes.xml",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| FeedError::InvalidConfigValueError {
                field: "channel".to_string(),
                value: s.to_string(),
                reason: "Must be one of: stable, regular, rapid".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_str() {
        assert_eq!("stable".parse::<Channel>().unwrap(), Channel::Stable);
        assert_eq!("regular".parse::<Channel>().unwrap(), Channel::Regular);
        assert_eq!("rapid".parse::<Channel>().unwrap(), Channel::Rapid);
        assert!("extended".parse::<Channel>().is_err());
        assert!("Stable".parse::<Channel>().is_err());
    }

    #[test]
    fn test_channel_feed_urls_are_distinct() {
        assert!(Channel::Rapid.feed_url().ends_with("gke-rapid-channel-release-notes.xml"));
        assert_ne!(Channel::Stable.feed_url(), Channel::Regular.feed_url());
    }
}
