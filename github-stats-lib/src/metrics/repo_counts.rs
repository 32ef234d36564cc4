use compact_str::CompactString;

/// How many of something (commits, stars) one repository holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCount {
    pub name: CompactString,
    pub count: u64,
}

impl RepoCount {
    #[must_use]
    pub fn new(name: impl Into<CompactString>, count: u64) -> Self {
        Self { name: name.into(), count }
    }
}

/// Per-repository counts, keyed by repository name and kept in insertion order.
///
/// Insertion order matters: when several repositories share the highest count,
/// the one inserted first is the top one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoCountMap {
    entries: Vec<RepoCount>,
}

impl RepoCountMap {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Record `count` for `name`. Returns `false` and keeps the existing entry when the name is already present.
    pub fn insert(&mut self, name: impl Into<CompactString>, count: u64) -> bool {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return false;
        }

        self.entries.push(RepoCount { name, count });
        true
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.count)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RepoCount> {
        self.entries.iter()
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0, |acc, e| acc.saturating_add(e.count))
    }

    /// The repository with the highest count, first one wins on ties. `None` when every count is zero.
    #[must_use]
    pub fn top(&self) -> Option<&RepoCount> {
        self.entries
            .iter()
            .filter(|e| e.count > 0)
            .reduce(|best, e| if e.count > best.count { e } else { best })
    }

    /// The `n` highest-count repositories, highest first, ties kept in insertion order.
    #[must_use]
    pub fn ranked(&self, n: usize) -> Vec<RepoCount> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.into_iter().take(n).cloned().collect()
    }

    /// Integer average count per repository, 0 for an empty map.
    #[must_use]
    pub fn average(&self) -> u64 {
        match u64::try_from(self.entries.len()) {
            Ok(0) | Err(_) => 0,
            Ok(len) => self.total() / len,
        }
    }
}

impl<N: Into<CompactString>> FromIterator<(N, u64)> for RepoCountMap {
    fn from_iter<I: IntoIterator<Item = (N, u64)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (name, count) in iter {
            let _ = map.insert(name, count);
        }
        map
    }
}
