//! "kai" population report
//!
//! Runs the aggregation over the bundled Hawaii dataset and a few hand-built
//! edge cases, printing each result.
//!
//! Set `RUST_LOG=kaipop_core=debug` to see the aggregation logs.

use kaipop_core::prelude::*;
use tracing_subscriber::EnvFilter;

static HAWAII: &str = include_str!("../crates/kaipop-core/data/hawaii_cities.json");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cities = cities_from_json(HAWAII)?;

    println!("=== population_cities_kai ===");
    println!("Full cities array:");
    println!("  {}", population_cities_kai(&cities));
    println!("Total population of cities with \"kai\":");
    println!("  {}", population_cities_kai(&cities).total());
    println!("First 10 cities:");
    println!("  {}", population_cities_kai(&cities[..10.min(cities.len())]));
    println!("First 5 cities:");
    println!("  {}", population_cities_kai(&cities[..5.min(cities.len())]));
    println!("Empty array:");
    println!("  {}", population_cities_kai(&[]));

    println!("\n=== has_kai ===");
    println!("Full cities array: {}", has_kai(&cities));
    println!("Lanai cities only: {}", has_kai(&cities.cities_on_island("Lanai")));
    println!("First 5 cities: {}", has_kai(&cities[..5.min(cities.len())]));
    println!("Empty array: {}", has_kai(&[]));

    println!("\n=== Edge cases ===");
    let without_island = vec![City::new("Kailua Test", 1000), City::new("Test City", 2000)];
    println!("No island data (grouped as \"{UNKNOWN_ISLAND}\"):");
    println!("  {}", population_cities_kai(&without_island));

    let mixed_case = vec![
        City::on_island("KAILUA", 1000, "Test"),
        City::on_island("kaitest", 2000, "Test"),
    ];
    println!("Case insensitivity:");
    println!("  {}", population_cities_kai(&mixed_case));

    let no_kai = vec![
        City::on_island("Honolulu", 1000, "Oahu"),
        City::on_island("Hilo", 2000, "Hawaii"),
    ];
    println!("No \"kai\" cities:");
    println!("  {}", population_cities_kai(&no_kai));

    let stats = cities.kai_stats();
    println!("\n=== Stats ===");
    println!("  Cities: {}", stats.cities);
    println!("  Matching: {}", stats.matching);
    println!("  Islands: {}", stats.islands);
    println!("  Population: {}", stats.total_population);

    Ok(())
}
