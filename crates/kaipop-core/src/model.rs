// crates/kaipop-core/src/model.rs
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Substring a city name must contain (case-insensitively) to be counted.
pub const KAI: &str = "kai";

/// Group key used for matching cities without an island.
pub const UNKNOWN_ISLAND: &str = "Unknown";

/// A city record.
///
/// `island` is optional; `None` (and an empty string) both mean the island is
/// unknown and the city is grouped under [`UNKNOWN_ISLAND`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub island: Option<String>,
}

impl City {
    /// A city with no island.
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
            island: None,
        }
    }

    pub fn on_island(name: impl Into<String>, population: u64, island: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            population,
            island: Some(island.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    /// The island as given, including an empty string.
    pub fn island(&self) -> Option<&str> {
        self.island.as_deref()
    }

    /// The key this city is grouped under: its island, or `unknown` when the
    /// island is missing or empty.
    pub fn group_key<'a>(&'a self, unknown: &'a str) -> &'a str {
        match self.island.as_deref() {
            Some(island) if !island.is_empty() => island,
            _ => unknown,
        }
    }
}

/// Summed population per group key, in first-seen key order.
///
/// Only keys that received at least one contribution are present, so a
/// result with no matching cities is empty rather than a set of zeros.
///
/// Stored as a list of (Island, Population) pairs instead of a HashMap; the
/// number of islands is tiny, so lookups are a linear scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IslandTotals {
    entries: Vec<(String, u64)>,
}

impl IslandTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `population` to `key`, creating the entry at 0 first if needed.
    /// Sums saturate at `u64::MAX`.
    pub fn add(&mut self, key: &str, population: u64) {
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, total)) => *total = total.saturating_add(population),
            None => self.entries.push((key.to_owned(), population)),
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Sum over all groups.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, v)| acc.saturating_add(*v))
    }

    pub fn into_vec(self) -> Vec<(String, u64)> {
        self.entries
    }
}

impl IntoIterator for IslandTotals {
    type Item = (String, u64);
    type IntoIter = std::vec::IntoIter<(String, u64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: AsRef<str>> FromIterator<(K, u64)> for IslandTotals {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (k, v) in iter {
            totals.add(k.as_ref(), v);
        }
        totals
    }
}

// Serialized as a JSON object, keys in first-seen order.
impl Serialize for IslandTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl fmt::Display for IslandTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k:?}: {v}")?;
        }
        f.write_str("}")
    }
}

/// Simple aggregate statistics for one aggregation run.
///
/// Returned by [`crate::Aggregator::stats`] and
/// [`crate::CitySearch::kai_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KaiStats {
    /// Records inspected.
    pub cities: usize,
    /// Records whose name matched.
    pub matching: usize,
    /// Distinct group keys in the result.
    pub islands: usize,
    pub total_population: u64,
}
