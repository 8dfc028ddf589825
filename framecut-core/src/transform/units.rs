//! Millimeter/foot conversion.
//!
//! All packing happens in millimeters; frames and profiles are copied into
//! millimeters up front and results are converted back by the formatter.

use crate::config::Unit;
use crate::model::{FrameSpec, StandardProfileSpec, SubComponentSpec};

/// Convert a length in `unit` to millimeters.
#[inline]
pub fn to_millimeters(value: f64, unit: Unit) -> f64 {
    value * unit.to_mm_factor()
}

/// Convert a length in millimeters to `unit`.
#[inline]
pub fn from_millimeters(value: f64, unit: Unit) -> f64 {
    value / unit.to_mm_factor()
}

/// Express a length given in `from` in the `to` unit.
#[inline]
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        value
    } else {
        from_millimeters(to_millimeters(value, from), to)
    }
}

/// Copy frames into millimeters.
pub fn normalize_frames(frames: &[FrameSpec]) -> Vec<FrameSpec> {
    frames
        .iter()
        .map(|frame| FrameSpec {
            width: to_millimeters(frame.width, frame.unit),
            height: to_millimeters(frame.height, frame.unit),
            unit: Unit::Millimeter,
            sub_components: frame
                .sub_components
                .iter()
                .map(|sub| SubComponentSpec {
                    length: to_millimeters(sub.length, frame.unit),
                    ..sub.clone()
                })
                .collect(),
            ..frame.clone()
        })
        .collect()
}

/// Copy a profile into millimeters, blade size included.
pub fn normalize_profile(profile: &StandardProfileSpec) -> StandardProfileSpec {
    StandardProfileSpec {
        length: to_millimeters(profile.length, profile.unit),
        blade_size: to_millimeters(profile.blade_size, profile.unit),
        unit: Unit::Millimeter,
        ..profile.clone()
    }
}
