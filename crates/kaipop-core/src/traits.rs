// crates/kaipop-core/src/traits.rs
use crate::aggregate::{has_kai, population_cities_kai, Aggregator};
use crate::model::{City, IslandTotals, KaiStats};
use crate::text::{contains_folded, fold_key};

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`], and get [`NameMatch::name_contains`], a
/// substring match on the folded form.
///
/// Folding is [`fold_key`], a plain lowercase.
///
/// # Examples
/// ```rust
/// use kaipop_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(!Place("Kailua").name_contains("hilo"));
/// assert!(Place("Mokaiwaena").name_contains("KAI"));
/// ```
pub trait NameMatch {
    /// Returns the name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), &fold_key(q))
    }
}

impl NameMatch for City {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Queries over a collection of cities.
///
/// Implemented for `[City]`, so it is available on `Vec<City>`, arrays and
/// slices alike.
pub trait CitySearch {
    /// Population of "kai" cities per island. See [`population_cities_kai`].
    fn population_by_island(&self) -> IslandTotals;

    /// Whether any city name contains "kai". See [`has_kai`].
    fn has_kai(&self) -> bool;

    /// Counts for one "kai" aggregation over this collection.
    fn kai_stats(&self) -> KaiStats;

    /// Cities whose island equals `island` exactly (case-sensitive).
    ///
    /// Cities with no island never match.
    fn cities_on_island(&self, island: &str) -> Vec<City>;

    /// Cities whose name contains `substr`, case-insensitive.
    ///
    /// An empty query returns nothing.
    fn find_cities_by_substring(&self, substr: &str) -> Vec<&City>;
}

impl CitySearch for [City] {
    fn population_by_island(&self) -> IslandTotals {
        population_cities_kai(self)
    }

    fn has_kai(&self) -> bool {
        has_kai(self)
    }

    fn kai_stats(&self) -> KaiStats {
        Aggregator::default().stats(self)
    }

    fn cities_on_island(&self, island: &str) -> Vec<City> {
        self.iter()
            .filter(|c| c.island() == Some(island))
            .cloned()
            .collect()
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<&City> {
        if substr.is_empty() {
            return Vec::new();
        }
        self.iter().filter(|c| c.name_contains(substr)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<City> {
        vec![
            City::on_island("Kailua", 38_635, "Oahu"),
            City::on_island("Lanai City", 3_102, "Lanai"),
            City::on_island("Kaunakakai", 3_425, "Molokai"),
            City::new("Hilo", 45_703),
        ]
    }

    #[test]
    fn island_filter_is_exact() {
        let cities = sample();
        let lanai = cities.cities_on_island("Lanai");
        assert_eq!(lanai.len(), 1);
        assert_eq!(lanai[0].name(), "Lanai City");

        assert!(cities.cities_on_island("lanai").is_empty());
        assert!(cities.cities_on_island("").is_empty());
    }

    #[test]
    fn substring_search_ignores_case() {
        let cities = sample();
        let names: Vec<&str> = cities
            .find_cities_by_substring("KAI")
            .into_iter()
            .map(City::name)
            .collect();
        assert_eq!(names, ["Kailua", "Kaunakakai"]);
        assert!(cities.find_cities_by_substring("").is_empty());
    }

    #[test]
    fn trait_methods_agree_with_free_functions() {
        let cities = sample();
        assert_eq!(cities.population_by_island(), population_cities_kai(&cities));
        assert_eq!(CitySearch::has_kai(cities.as_slice()), has_kai(&cities));

        let stats = cities.kai_stats();
        assert_eq!(stats.cities, 4);
        assert_eq!(stats.matching, 2);
        assert_eq!(stats.islands, 2);
        assert_eq!(stats.total_population, 38_635 + 3_425);
    }

    #[test]
    fn city_name_match() {
        let city = City::new("KAILUA", 1);
        assert!(city.name_contains("ilu"));
        assert!(!city.name_contains("hilo"));
    }
}
