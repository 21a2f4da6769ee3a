// crates/kaipop-core/src/raw.rs
#![cfg(feature = "json")]

//! Lenient decoding of the external record shape
//! `{ name: text, population: number, island?: text }`.
//!
//! Rules for malformed records:
//! - array element that is not an object: [`KaiError::InvalidData`]
//! - missing or non-string `name`: the record is dropped (it can never match),
//!   whatever its other fields hold
//! - missing or `null` `population`: counts as 0
//! - `population` that is not a non-negative integer: [`KaiError::InvalidPopulation`]
//! - non-string `island`: treated as absent

use crate::error::{KaiError, Result};
use crate::model::City;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Raw city record as it comes from JSON.
///
/// Every field is optional and untyped so that malformed records reach
/// [`build_cities`] instead of failing the whole document in serde.
#[derive(Debug, Default, Deserialize)]
pub struct CityRaw {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub population: Option<Value>,
    #[serde(default)]
    pub island: Option<Value>,
}

pub type CitiesRaw = Vec<CityRaw>;

fn parse_population(index: usize, v: Option<Value>) -> Result<u64> {
    match v {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(p) = n.as_u64() {
                return Ok(p);
            }
            // Whole floats such as 1000.0 are accepted.
            match n.as_f64() {
                Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
                _ => Err(KaiError::InvalidPopulation {
                    index,
                    value: n.to_string(),
                }),
            }
        }
        Some(other) => Err(KaiError::InvalidPopulation {
            index,
            value: other.to_string(),
        }),
    }
}

/// Convert raw records into [`City`] values.
pub fn build_cities(raw: CitiesRaw) -> Result<Vec<City>> {
    let mut out = Vec::with_capacity(raw.len());

    for (index, r) in raw.into_iter().enumerate() {
        let name = match r.name {
            Some(Value::String(s)) => s,
            other => {
                debug!(index, name = ?other, "dropping record without a string name");
                continue;
            }
        };

        let population = parse_population(index, r.population)?;

        let island = match r.island {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };

        out.push(City {
            name,
            population,
            island,
        });
    }

    Ok(out)
}

/// Decode a JSON array of city records.
///
/// ```rust
/// use kaipop_core::{cities_from_json, population_cities_kai};
///
/// let cities = cities_from_json(
///     r#"[{"name": "Kailua Test", "population": 1000},
///         {"name": "Test City", "population": 2000}]"#,
/// )?;
/// assert_eq!(population_cities_kai(&cities).get("Unknown"), Some(1000));
/// # Ok::<(), kaipop_core::KaiError>(())
/// ```
pub fn cities_from_json(json: &str) -> Result<Vec<City>> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    let raw = values
        .into_iter()
        .enumerate()
        .map(|(index, v)| {
            if !v.is_object() {
                return Err(KaiError::InvalidData(format!(
                    "record {index}: expected an object, got {v}"
                )));
            }
            Ok(serde_json::from_value::<CityRaw>(v)?)
        })
        .collect::<Result<CitiesRaw>>()?;
    build_cities(raw)
}
