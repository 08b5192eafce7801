use std::fmt::{self, Debug, Display};

use serde::Serialize;

/// One scored document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
}

/// Structure to store similarity results
/// Entries keep the order they were produced in; no ranking is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new() -> Self {
        Hits { list: Vec::new() }
    }

    pub fn push(&mut self, key: K, score: f64) {
        self.list.push(HitEntry { key, score });
    }

    /// Keep only entries strictly above `threshold`
    pub fn above(mut self, threshold: f64) -> Self {
        self.list.retain(|hit| hit.score > threshold);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HitEntry<K>> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K> Default for Hits<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<(K, f64)> for Hits<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Hits {
            list: iter
                .into_iter()
                .map(|(key, score)| HitEntry { key, score })
                .collect(),
        }
    }
}

/// `- key: 0.87` per line
impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "- {}: {:.2}", hit.key, hit.score)?;
        }
        Ok(())
    }
}
