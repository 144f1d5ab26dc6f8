use lingo_domain::{BundleEntries, ResourceValue};

/// The loaded content currently backing one logical dictionary name.
///
/// Bundles are immutable: a culture change that resolves to a different path
/// produces a new bundle, and holders of the old `Arc` keep a consistent,
/// stale snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBundle {
    name: String,
    source_path: String,
    entries: BundleEntries,
}

impl ResolvedBundle {
    pub fn new(name: impl Into<String>, source_path: impl Into<String>, entries: BundleEntries) -> Self {
        Self { name: name.into(), source_path: source_path.into(), entries }
    }

    /// Logical dictionary name this bundle backs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Physical path the entries were loaded from.
    #[must_use]
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    #[must_use]
    pub const fn entries(&self) -> &BundleEntries {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ResourceValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by key.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&str, &ResourceValue)> {
        let mut entries: Vec<_> = self.entries.iter().map(|(key, value)| (key.as_str(), value)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_entries_are_ordered_by_key() {
        let entries: BundleEntries =
            [("b", 2_i64), ("a", 1), ("c", 3)].into_iter().map(|(k, v)| (k.to_owned(), v.into())).collect();
        let bundle = ResolvedBundle::new("nums", "nums.json", entries);

        let keys: Vec<_> = bundle.sorted_entries().into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(bundle.len(), 3);
        assert!(bundle.contains_key("a"));
        assert_eq!(bundle.get("z"), None);
    }
}
