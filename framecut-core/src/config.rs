//! Configuration constants and settings for the optimizer.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Conversion factor: millimeters per foot.
pub const MM_PER_FOOT: f64 = 304.8;

/// Decimal places kept on every waste deduction while packing.
pub const PACKING_DECIMALS: u32 = 3;

/// Decimal places for millimeter results.
pub const MM_DISPLAY_DECIMALS: u32 = 1;

/// Decimal places for foot results.
pub const FT_DISPLAY_DECIMALS: u32 = 2;

/// Decimal places for waste and utilization percentages.
pub const PERCENT_DECIMALS: u32 = 1;

/// Default blade width, in the profile's unit.
pub const DEFAULT_BLADE_SIZE: f64 = 3.0;

/// Default stock length in millimeters.
pub const DEFAULT_STOCK_LENGTH_MM: f64 = 6000.0;

/// Unit of measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Unit {
    #[default]
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "ft")]
    Foot,
}

impl Unit {
    /// Parse unit from a user-supplied name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Some(Unit::Millimeter),
            "ft" | "foot" | "feet" => Some(Unit::Foot),
            _ => None,
        }
    }

    /// Get the conversion factor to convert from this unit to millimeters.
    pub fn to_mm_factor(&self) -> f64 {
        match self {
            Unit::Millimeter => 1.0,
            Unit::Foot => MM_PER_FOOT,
        }
    }

    /// Decimal places used when presenting lengths in this unit.
    pub fn display_decimals(&self) -> u32 {
        match self {
            Unit::Millimeter => MM_DISPLAY_DECIMALS,
            Unit::Foot => FT_DISPLAY_DECIMALS,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Millimeter => write!(f, "mm"),
            Unit::Foot => write!(f, "ft"),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Unit::from_name(&s).ok_or_else(|| format!("unknown unit '{}' (expected mm or ft)", s))
    }
}

/// Round `value` to `decimals` places, halves away from zero.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if two floats are equal within a caller-supplied tolerance.
    #[inline]
    pub fn approx_eq_tol(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_name() {
        assert_eq!(Unit::from_name("mm"), Some(Unit::Millimeter));
        assert_eq!(Unit::from_name(" FT "), Some(Unit::Foot));
        assert_eq!(Unit::from_name("feet"), Some(Unit::Foot));
        assert_eq!(Unit::from_name("inch"), None);
    }

    #[test]
    fn test_unit_serde_names() {
        assert_eq!(serde_json::to_string(&Unit::Foot).unwrap(), "\"ft\"");
        let unit: Unit = serde_json::from_str("\"mm\"").unwrap();
        assert_eq!(unit, Unit::Millimeter);
        let unit: Unit = serde_json::from_str("\"Feet\"").unwrap();
        assert_eq!(unit, Unit::Foot);
        assert!(serde_json::from_str::<Unit>("\"inch\"").is_err());
    }

    #[test]
    fn test_round_to_half_away_from_zero() {
        assert_eq!(round_to(12.3456, 3), 12.346);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1591.04, 1), 1591.0);
        assert_eq!(round_to(3.28084, 2), 3.28);
    }

    #[test]
    fn test_display_decimals() {
        assert_eq!(Unit::Millimeter.display_decimals(), 1);
        assert_eq!(Unit::Foot.display_decimals(), 2);
    }
}
