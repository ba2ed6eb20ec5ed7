// crates/citydb-core/src/model.rs
use crate::common::CatalogStats;
use crate::error::{CityDbError, Result};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The nine quality-of-life sub-indices attached to every city.
///
/// Field names on the wire follow the dataset (`qualityOfLifeIndex`, ...).
/// All nine are mandatory: a dataset entry missing one fails to parse.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubIndices {
    pub quality_of_life_index: f64,
    pub purchasing_power_index: f64,
    pub safety_index: f64,
    pub health_care_index: f64,
    pub cost_of_living_index: f64,
    pub property_price_to_income_ratio: f64,
    pub traffic_commute_time_index: f64,
    pub pollution_index: f64,
    pub climate_index: f64,
}

impl SubIndices {
    /// Returns `(field name, value)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("qualityOfLifeIndex", self.quality_of_life_index),
            ("purchasingPowerIndex", self.purchasing_power_index),
            ("safetyIndex", self.safety_index),
            ("healthCareIndex", self.health_care_index),
            ("costOfLivingIndex", self.cost_of_living_index),
            ("propertyPriceToIncomeRatio", self.property_price_to_income_ratio),
            ("trafficCommuteTimeIndex", self.traffic_commute_time_index),
            ("pollutionIndex", self.pollution_index),
            ("climateIndex", self.climate_index),
        ]
        .into_iter()
    }
}

/// Raw city entry as it comes from JSON. The country is implied by the
/// enclosing [`CountryRaw`]; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub city: String,
    #[serde(flatten)]
    pub indices: SubIndices,
}

/// Raw country group from JSON: `{ "country": "...", "cities": [...] }`.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub country: String,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// One city with its country and sub-indices.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub city: String,
    pub country: String,
    #[serde(flatten)]
    pub indices: SubIndices,
}

impl CityRecord {
    /// The composite key `"<city>, <country>"`.
    pub fn key(&self) -> String {
        composite_key(&self.city, &self.country)
    }
}

impl NameMatch for CityRecord {
    fn name_str(&self) -> &str {
        &self.city
    }
}

/// Builds the `"<city>, <country>"` key identifying a record.
pub fn composite_key(city: &str, country: &str) -> String {
    format!("{city}, {country}")
}

/// A country and the city names registered under it, in load order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryEntry {
    pub name: String,
    pub cities: Vec<String>,
}

/// The read-only city catalog.
///
/// Records keep the position of the first occurrence of their key; a later
/// entry with the same key replaces the record in place. Countries behave the
/// same way, except that re-registering a country resets its city-name list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<CityRecord>,
    by_key: HashMap<String, usize>,
    countries: Vec<CountryEntry>,
    by_country: HashMap<String, usize>,
}

impl Catalog {
    /// An empty catalog. Every query against it reports
    /// [`CityDbError::ServiceUnavailable`].
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            countries: self.countries.len(),
            cities: self.records.len(),
        }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[CityRecord] {
        &self.records
    }

    /// All countries with their city names, in registration order.
    pub fn countries(&self) -> &[CountryEntry] {
        &self.countries
    }

    pub fn get(&self, key: &str) -> Option<&CityRecord> {
        self.by_key.get(key).map(|&i| &self.records[i])
    }

    /// Fails with [`CityDbError::EmptyDataset`] when there is nothing to serve.
    pub fn ensure_servable(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CityDbError::EmptyDataset);
        }
        Ok(())
    }

    fn register_country(&mut self, name: &str) -> usize {
        match self.by_country.get(name) {
            Some(&i) => {
                self.countries[i].cities.clear();
                i
            }
            None => {
                let i = self.countries.len();
                self.countries.push(CountryEntry {
                    name: name.to_string(),
                    cities: Vec::new(),
                });
                self.by_country.insert(name.to_string(), i);
                i
            }
        }
    }

    fn upsert(&mut self, record: CityRecord) {
        let key = record.key();
        match self.by_key.get(&key) {
            Some(&i) => self.records[i] = record,
            None => {
                self.by_key.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }
}

/// Convert raw JSON data into a [`Catalog`].
///
/// Validation happens before anything is inserted, so a failure never leaves
/// a partially built catalog behind.
pub fn build_catalog(raw: CountriesRaw) -> Result<Catalog> {
    for (pos, group) in raw.iter().enumerate() {
        if group.country.trim().is_empty() {
            return Err(CityDbError::InvalidData(format!(
                "country group #{pos} has an empty country name"
            )));
        }
        if let Some(bad) = group.cities.iter().position(|c| c.city.trim().is_empty()) {
            return Err(CityDbError::InvalidData(format!(
                "city #{bad} in '{}' has an empty name",
                group.country
            )));
        }
    }

    let mut catalog = Catalog::empty();
    for group in raw {
        let slot = catalog.register_country(&group.country);
        for city_raw in group.cities {
            catalog.countries[slot].cities.push(city_raw.city.clone());
            catalog.upsert(CityRecord {
                city: city_raw.city,
                country: group.country.clone(),
                indices: city_raw.indices,
            });
        }
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(quality: f64) -> SubIndices {
        SubIndices {
            quality_of_life_index: quality,
            purchasing_power_index: 70.0,
            safety_index: 85.0,
            health_care_index: 80.0,
            cost_of_living_index: 60.0,
            property_price_to_income_ratio: 9.0,
            traffic_commute_time_index: 30.0,
            pollution_index: 30.0,
            climate_index: 65.0,
        }
    }

    fn group(country: &str, cities: &[(&str, f64)]) -> CountryRaw {
        CountryRaw {
            country: country.to_string(),
            cities: cities
                .iter()
                .map(|(name, q)| CityRaw {
                    city: name.to_string(),
                    indices: indices(*q),
                })
                .collect(),
        }
    }

    #[test]
    fn registers_countries_and_keys() {
        let catalog = build_catalog(vec![
            group("Germany", &[("Berlin", 180.0), ("Munich", 190.0)]),
            group("Iceland", &[]),
        ])
        .unwrap();

        assert_eq!(
            catalog.stats(),
            CatalogStats {
                countries: 2,
                cities: 2
            }
        );
        assert!(catalog.get("Berlin, Germany").is_some());
        assert_eq!(catalog.countries()[1].name, "Iceland");
        assert!(catalog.countries()[1].cities.is_empty());
        assert_eq!(catalog.countries()[0].cities, vec!["Berlin", "Munich"]);
    }

    #[test]
    fn duplicate_key_overwrites_in_place() {
        let catalog = build_catalog(vec![group(
            "USA",
            &[("Columbus", 100.0), ("Austin", 150.0), ("Columbus", 120.0)],
        )])
        .unwrap();

        assert_eq!(catalog.list_all().len(), 2);
        assert_eq!(catalog.list_all()[0].city, "Columbus");
        assert_eq!(catalog.list_all()[0].indices.quality_of_life_index, 120.0);
        // City-name lists are not deduplicated.
        assert_eq!(catalog.countries()[0].cities.len(), 3);
    }

    #[test]
    fn same_city_name_in_two_countries_is_two_records() {
        let catalog = build_catalog(vec![
            group("USA", &[("Columbus", 100.0)]),
            group("Colombia", &[("Columbus", 90.0)]),
        ])
        .unwrap();
        assert_eq!(catalog.stats().cities, 2);
        assert!(catalog.get("Columbus, Colombia").is_some());
    }

    #[test]
    fn repeated_country_group_resets_city_list() {
        let catalog = build_catalog(vec![
            group("France", &[("Paris", 150.0)]),
            group("Spain", &[("Madrid", 160.0)]),
            group("France", &[("Lyon", 170.0)]),
        ])
        .unwrap();

        assert_eq!(catalog.countries()[0].name, "France");
        assert_eq!(catalog.countries()[0].cities, vec!["Lyon"]);
        assert_eq!(catalog.stats().cities, 3);
    }

    #[test]
    fn rejects_empty_names_without_partial_state() {
        let err = build_catalog(vec![
            group("Germany", &[("Berlin", 180.0)]),
            group("", &[("Nowhere", 1.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, CityDbError::InvalidData(_)));

        let err = build_catalog(vec![group("Germany", &[(" ", 1.0)])]).unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn empty_catalog_is_not_servable() {
        let catalog = build_catalog(vec![group("Iceland", &[])]).unwrap();
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.ensure_servable(),
            Err(CityDbError::EmptyDataset)
        ));
    }
}
