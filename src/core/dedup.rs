use std::collections::HashSet;
use std::hash::Hash;

/// First-seen filter. Create one per entry; it remembers nothing beyond the
/// tokens it has been shown.
#[derive(Debug)]
pub struct Deduplicator<T> {
    seen: HashSet<T>,
}

impl<T: Eq + Hash + Clone> Deduplicator<T> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// `true` the first time a token is offered.
    pub fn admit(&mut self, token: &T) -> bool {
        if self.seen.contains(token) {
            return false;
        }
        self.seen.insert(token.clone());
        true
    }
}

impl<T: Eq + Hash + Clone> Default for Deduplicator<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the first occurrence of each token in original order.
pub fn dedup_first_seen<T, I>(tokens: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut dedup = Deduplicator::new();
    tokens.into_iter().filter(|t| dedup.admit(t)).collect()
}
