#![cfg(feature = "json")]

use kaipop_core::prelude::*;
use pretty_assertions::assert_eq;

static HAWAII: &str = include_str!("../data/hawaii_cities.json");

fn hawaii() -> Vec<City> {
    cities_from_json(HAWAII).expect("bundled dataset decodes")
}

#[test]
fn dataset_decodes_completely() {
    let cities = hawaii();
    assert_eq!(cities.len(), 27);
    assert!(cities.iter().all(|c| c.island().is_some()));
}

#[test]
fn full_collection_totals_per_island() {
    let totals = population_cities_kai(&hawaii());
    assert_eq!(
        totals.clone().into_vec(),
        vec![
            ("Oahu".to_string(), 40_514),
            ("Hawaii".to_string(), 19_713),
            ("Molokai".to_string(), 3_419),
        ]
    );
    assert_eq!(totals.total(), 63_646);
}

#[test]
fn prefixes_of_the_collection() {
    let cities = hawaii();
    assert_eq!(
        population_cities_kai(&cities[..10]).into_vec(),
        vec![("Oahu".to_string(), 40_514)]
    );
    assert!(population_cities_kai(&cities[..5]).is_empty());
    assert!(!has_kai(&cities[..5]));
}

#[test]
fn kailua_makes_the_collection_match() {
    let cities = hawaii();
    assert!(cities
        .iter()
        .any(|c| c.name() == "Kailua" && c.island() == Some("Oahu")));
    assert!(has_kai(&cities));
}

#[test]
fn lanai_alone_has_no_kai() {
    let lanai = hawaii().cities_on_island("Lanai");
    assert!(!lanai.is_empty());
    assert!(!has_kai(&lanai));
    assert!(population_cities_kai(&lanai).is_empty());
}

#[test]
fn islands_without_kai_names_are_false() {
    let cities = hawaii();
    for island in ["Maui", "Kauai", "Lanai"] {
        assert!(!cities.cities_on_island(island).has_kai(), "{island}");
    }
    for island in ["Oahu", "Hawaii", "Molokai"] {
        assert!(cities.cities_on_island(island).has_kai(), "{island}");
    }
}

#[test]
fn stats_over_the_collection() {
    assert_eq!(
        hawaii().kai_stats(),
        KaiStats {
            cities: 27,
            matching: 3,
            islands: 3,
            total_population: 63_646,
        }
    );
}

#[test]
fn empty_collection() {
    let none: Vec<City> = Vec::new();
    assert_eq!(population_cities_kai(&none).to_string(), "{}");
    assert!(!has_kai(&none));
}

#[test]
fn totals_render_as_an_object() {
    let cities = cities_from_json(
        r#"[{"name": "KAILUA", "population": 1000, "island": "Test"},
            {"name": "kaitest", "population": 2000, "island": "Test"}]"#,
    )
    .unwrap();
    assert_eq!(population_cities_kai(&cities).to_string(), r#"{"Test": 3000}"#);
    assert_eq!(
        serde_json::to_value(population_cities_kai(&cities)).unwrap(),
        serde_json::json!({ "Test": 3000 })
    );
}
