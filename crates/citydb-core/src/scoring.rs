// crates/citydb-core/src/scoring.rs

//! Composite internship-suitability score and its recommendation tiers.

use crate::error::{CityDbError, Result};
use crate::model::{CityRecord, SubIndices};
use serde::{Deserialize, Serialize};

/// Reference value the cost-of-living and pollution indices are inverted against.
const INVERSION_BASE: f64 = 100.0;

const W_QUALITY_OF_LIFE: f64 = 0.25;
const W_SAFETY: f64 = 0.20;
const W_PURCHASING_POWER: f64 = 0.15;
const W_COST_OF_LIVING: f64 = 0.15;
const W_HEALTH_CARE: f64 = 0.10;
const W_POLLUTION: f64 = 0.10;
const W_CLIMATE: f64 = 0.05;

/// Recommendation tier derived from the unrounded composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Tier {
    pub const EXCELLENT_MIN: f64 = 120.0;
    pub const GOOD_MIN: f64 = 100.0;
    pub const AVERAGE_MIN: f64 = 80.0;

    /// Lower bounds are inclusive: exactly `120.0` is `Excellent`.
    pub fn classify(score: f64) -> Self {
        if score >= Self::EXCELLENT_MIN {
            Tier::Excellent
        } else if score >= Self::GOOD_MIN {
            Tier::Good
        } else if score >= Self::AVERAGE_MIN {
            Tier::Average
        } else {
            Tier::Poor
        }
    }

    /// Machine-readable key (`recommendationLevel`).
    pub fn key(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Average => "average",
            Tier::Poor => "poor",
        }
    }

    /// Human-readable label (`recommendation`).
    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent choix",
            Tier::Good => "Bon choix",
            Tier::Average => "Choix correct",
            Tier::Poor => "À considérer avec précaution",
        }
    }
}

/// Weighted sum of the scoring sub-indices.
///
/// `propertyPriceToIncomeRatio` and `trafficCommuteTimeIndex` are displayed
/// but do not contribute.
pub fn composite_score(ix: &SubIndices) -> f64 {
    W_QUALITY_OF_LIFE * ix.quality_of_life_index
        + W_SAFETY * ix.safety_index
        + W_PURCHASING_POWER * ix.purchasing_power_index
        + W_COST_OF_LIVING * (INVERSION_BASE - ix.cost_of_living_index)
        + W_HEALTH_CARE * ix.health_care_index
        + W_POLLUTION * (INVERSION_BASE - ix.pollution_index)
        + W_CLIMATE * ix.climate_index
}

/// Scores a record, refusing to produce a number from non-finite inputs.
///
/// The weights sum to one, so the score stays within the magnitude of its
/// inputs; the result check only guards that invariant.
pub fn score_record(record: &CityRecord) -> Result<f64> {
    if let Some((field, value)) = record.indices.iter().find(|(_, v)| !v.is_finite()) {
        return Err(CityDbError::DataIntegrity(format!(
            "{} has non-finite {field} ({value})",
            record.key()
        )));
    }

    let score = composite_score(&record.indices);
    if !score.is_finite() {
        return Err(CityDbError::DataIntegrity(format!(
            "score for {} is not finite",
            record.key()
        )));
    }
    Ok(score)
}

/// Rounds to one decimal place, half away from zero.
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
