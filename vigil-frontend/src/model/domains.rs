use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Cumulative set of distinct domains observed on the feed. Grows
/// monotonically within a session and is never pruned; persisted as a plain
/// array of strings.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct KnownDomains {
    entries: BTreeSet<String>,
}

impl KnownDomains {
    /// Returns true when the domain was not known before.
    pub fn insert(&mut self, domain: String) -> bool {
        self.entries.insert(domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
