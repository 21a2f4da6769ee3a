//! kaipop prelude: bring common types and traits into scope for demos and tests.

#![allow(unused_imports)]

pub use crate::aggregate::{has_kai, population_cities_kai, Aggregator};
pub use crate::error::{KaiError, Result};
pub use crate::model::{City, IslandTotals, KaiStats, KAI, UNKNOWN_ISLAND};
#[cfg(feature = "json")]
pub use crate::raw::{build_cities, cities_from_json, CityRaw};
pub use crate::text::fold_key;
pub use crate::traits::{CitySearch, NameMatch};
