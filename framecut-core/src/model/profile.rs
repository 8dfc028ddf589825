//! Standard stock profile and packed profile results.

use crate::config::{
    round_to, Unit, DEFAULT_BLADE_SIZE, DEFAULT_STOCK_LENGTH_MM, PERCENT_DECIMALS,
};
use crate::model::CutPiece;
use serde::{Deserialize, Serialize};

fn default_blade_size() -> f64 {
    DEFAULT_BLADE_SIZE
}

/// Raw stock length available for cutting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardProfileSpec {
    /// Caller-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Stock length.
    pub length: f64,
    /// Unit of `length` and `blade_size`.
    #[serde(default)]
    pub unit: Unit,
    /// Kerf: material removed by the saw blade per cut.
    #[serde(default = "default_blade_size")]
    pub blade_size: f64,
    /// Whether the kerf is deducted between cuts.
    #[serde(default)]
    pub include_blade_size: bool,
}

impl Default for StandardProfileSpec {
    fn default() -> Self {
        Self {
            id: String::new(),
            length: DEFAULT_STOCK_LENGTH_MM,
            unit: Unit::Millimeter,
            blade_size: DEFAULT_BLADE_SIZE,
            include_blade_size: false,
        }
    }
}

impl StandardProfileSpec {
    /// Create a new profile without kerf accounting.
    pub fn new(length: f64, unit: Unit) -> Self {
        Self {
            length,
            unit,
            ..Default::default()
        }
    }

    /// Enable kerf accounting with the given blade size.
    pub fn with_kerf(mut self, blade_size: f64) -> Self {
        self.blade_size = blade_size;
        self.include_blade_size = true;
        self
    }

    /// Kerf actually applied between cuts, in the profile's unit.
    pub fn effective_kerf(&self) -> f64 {
        if self.include_blade_size {
            self.blade_size
        } else {
            0.0
        }
    }
}

/// One instantiated stock profile and the pieces assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackedProfile {
    /// Stock length.
    pub original_length: f64,
    /// Unit of all lengths on this profile.
    pub unit: Unit,
    /// Pieces in placement order.
    pub cuts: Vec<CutPiece>,
    /// Length left over after cuts and kerf.
    pub waste_length: f64,
    /// Length consumed by the blade between cuts.
    #[serde(default)]
    pub kerf_length: f64,
}

impl PackedProfile {
    /// Create an empty profile.
    pub fn new(original_length: f64, unit: Unit) -> Self {
        Self {
            original_length,
            unit,
            cuts: Vec::new(),
            waste_length: original_length,
            kerf_length: 0.0,
        }
    }

    /// Sum of the cut piece lengths.
    pub fn cut_length(&self) -> f64 {
        self.cuts.iter().map(|c| c.length).sum()
    }

    /// Length consumed by cuts and kerf.
    pub fn used_length(&self) -> f64 {
        self.original_length - self.waste_length
    }

    /// Percentage of the stock put to use, rounded to one decimal.
    pub fn utilization(&self) -> f64 {
        if self.original_length <= 0.0 {
            return 0.0;
        }
        round_to(
            self.used_length() / self.original_length * 100.0,
            PERCENT_DECIMALS,
        )
    }

    /// Check that cuts, kerf and waste add up to the stock length.
    pub fn is_conserved(&self, tolerance: f64) -> bool {
        crate::config::float_cmp::approx_eq_tol(
            self.cut_length() + self.kerf_length + self.waste_length,
            self.original_length,
            tolerance,
        )
    }
}
