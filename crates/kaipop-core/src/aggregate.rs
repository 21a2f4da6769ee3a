// crates/kaipop-core/src/aggregate.rs

//! # Aggregation
//!
//! Filter cities by a case-insensitive substring of their name, group the
//! survivors by island and sum their populations.
//!
//! [`population_cities_kai`] and [`has_kai`] are the fixed `"kai"` entry
//! points; [`Aggregator`] holds the needle and the fallback group key when
//! either needs to differ.

use crate::model::{City, IslandTotals, KaiStats, KAI, UNKNOWN_ISLAND};
use crate::text::{contains_folded, fold_key};
use tracing::{debug, trace};

/// Population of cities whose name contains `"kai"`, per island.
///
/// Cities without an island (or with an empty one) are grouped under
/// [`UNKNOWN_ISLAND`]. Islands without a matching city are absent from the
/// result.
///
/// ```rust
/// use kaipop_core::{population_cities_kai, City};
///
/// let cities = [
///     City::on_island("KAILUA", 1000, "Test"),
///     City::on_island("kaitest", 2000, "Test"),
/// ];
/// let totals = population_cities_kai(&cities);
/// assert_eq!(totals.get("Test"), Some(3000));
/// assert_eq!(totals.len(), 1);
/// ```
pub fn population_cities_kai(cities: &[City]) -> IslandTotals {
    Aggregator::default().aggregate(cities)
}

/// `true` if any city name contains `"kai"`, case-insensitive.
///
/// Equivalent to `!population_cities_kai(cities).is_empty()`.
pub fn has_kai(cities: &[City]) -> bool {
    !population_cities_kai(cities).is_empty()
}

/// Substring filter + island grouping, configurable.
///
/// The needle is folded once when the aggregator is built. An empty needle
/// matches every city.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aggregator {
    needle: String,
    unknown_key: String,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(KAI)
    }
}

impl Aggregator {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: fold_key(needle),
            unknown_key: UNKNOWN_ISLAND.to_owned(),
        }
    }

    /// Group key for cities with no island.
    pub fn with_unknown_key(mut self, key: impl Into<String>) -> Self {
        self.unknown_key = key.into();
        self
    }

    /// The folded needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn unknown_key(&self) -> &str {
        &self.unknown_key
    }

    /// Does this city's name contain the needle?
    #[inline]
    pub fn matches(&self, city: &City) -> bool {
        contains_folded(city.name(), &self.needle)
    }

    pub fn aggregate(&self, cities: &[City]) -> IslandTotals {
        self.run(cities).0
    }

    /// `true` if at least one city matches. Same answer as checking that
    /// [`Aggregator::aggregate`] is non-empty, without building the totals.
    pub fn any_match(&self, cities: &[City]) -> bool {
        cities.iter().any(|c| self.matches(c))
    }

    pub fn stats(&self, cities: &[City]) -> KaiStats {
        let (totals, matching) = self.run(cities);
        KaiStats {
            cities: cities.len(),
            matching,
            islands: totals.len(),
            total_population: totals.total(),
        }
    }

    fn run(&self, cities: &[City]) -> (IslandTotals, usize) {
        let mut totals = IslandTotals::new();
        let mut matching = 0usize;

        for city in cities.iter().filter(|c| self.matches(c)) {
            let key = city.group_key(&self.unknown_key);
            trace!(city = city.name(), island = key, population = city.population(), "match");
            totals.add(key, city.population());
            matching += 1;
        }

        debug!(
            needle = %self.needle,
            cities = cities.len(),
            matching,
            islands = totals.len(),
            "aggregated"
        );
        (totals, matching)
    }
}
