// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, optional Gzip) and hands the parsed
//! country groups to [`build_catalog`].

use crate::error::{CityDbError, Result};
use crate::model::{build_catalog, Catalog, CountriesRaw};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

mod common_io;

impl Catalog {
    /// Directory holding the bundled dataset (`<crate root>/data`).
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities_data.json"
    }

    /// Full path of the bundled dataset.
    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Load a catalog from a `.json` or (with `compact`) `.json.gz` file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening dataset");
        let reader = common_io::open_stream(path)?;
        let catalog = Self::from_reader(reader)?;
        let stats = catalog.stats();
        info!(
            path = %path.display(),
            cities = stats.cities,
            countries = stats.countries,
            "dataset loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader).map_err(CityDbError::Json)?;
        build_catalog(raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json).map_err(CityDbError::Json)?;
        build_catalog(raw)
    }
}
