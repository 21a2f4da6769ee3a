// crates/kaipop-core/src/lib.rs

//! kaipop-core
//! ===========
//!
//! Population totals per island for cities whose names contain `"kai"`.
//!
//! The crate works on an in-memory slice of [`City`] records supplied by the
//! caller. Matching is a plain case-insensitive substring test on the city
//! name; matching cities are grouped by island (or [`UNKNOWN_ISLAND`] when the
//! island is absent) and their populations summed.
//!
//! ```rust
//! use kaipop_core::prelude::*;
//!
//! let cities = vec![
//!     City::on_island("Kailua", 38_635, "Oahu"),
//!     City::on_island("Kailua-Kona", 19_713, "Hawaii"),
//!     City::on_island("Honolulu", 350_964, "Oahu"),
//!     City::new("Kaitest", 1_000),
//! ];
//!
//! let totals = population_cities_kai(&cities);
//! assert_eq!(totals.get("Oahu"), Some(38_635));
//! assert_eq!(totals.get("Unknown"), Some(1_000));
//! assert!(has_kai(&cities));
//! assert!(!has_kai(&cities.cities_on_island("Lanai")));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod aggregate;
pub mod error;
pub mod model;
pub mod prelude;
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub mod raw;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::aggregate::{has_kai, population_cities_kai, Aggregator};
pub use crate::error::{KaiError, Result};
pub use crate::model::{City, IslandTotals, KaiStats, KAI, UNKNOWN_ISLAND};
#[cfg(feature = "json")]
pub use crate::raw::cities_from_json;
pub use crate::text::fold_key;
pub use crate::traits::{CitySearch, NameMatch};
