// crates/citydb-core/src/search.rs
use crate::model::{Catalog, CityRecord};
use crate::text::contains_folded;
use crate::traits::NameMatch;

/// A search hit: the composite key and the record it points to.
pub type CityMatch<'a> = (String, &'a CityRecord);

/// Read-side operations on a loaded catalog.
pub trait CatalogSearch {
    /// Case-insensitive substring search on the city name only.
    ///
    /// Hits come back in catalog insertion order, so the first hit is the
    /// earliest-loaded matching record. An empty query yields no hits.
    ///
    /// ```rust
    /// use citydb_core::{Catalog, CatalogSearch};
    ///
    /// let catalog = Catalog::from_json_str(r#"[{"country": "Germany", "cities": [{
    ///     "city": "Berlin", "qualityOfLifeIndex": 180, "purchasingPowerIndex": 70,
    ///     "safetyIndex": 85, "healthCareIndex": 80, "costOfLivingIndex": 60,
    ///     "propertyPriceToIncomeRatio": 9, "trafficCommuteTimeIndex": 30,
    ///     "pollutionIndex": 30, "climateIndex": 65 }]}]"#).unwrap();
    ///
    /// let hits = catalog.find_by_name("ERL");
    /// assert_eq!(hits[0].0, "Berlin, Germany");
    /// ```
    fn find_by_name(&self, query: &str) -> Vec<CityMatch<'_>>;
}

impl CatalogSearch for Catalog {
    fn find_by_name(&self, query: &str) -> Vec<CityMatch<'_>> {
        if query.is_empty() {
            return Vec::new();
        }

        self.list_all()
            .iter()
            .filter(|record| record.name_contains(query))
            .map(|record| (record.key(), record))
            .collect()
    }
}

/// Keep only hits whose country contains `country`, case-insensitively.
pub fn filter_by_country_substring<'a>(
    matches: Vec<CityMatch<'a>>,
    country: &str,
) -> Vec<CityMatch<'a>> {
    matches
        .into_iter()
        .filter(|(_, record)| contains_folded(&record.country, country))
        .collect()
}
