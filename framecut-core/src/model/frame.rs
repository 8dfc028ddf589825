//! Frame specifications supplied by the caller.

use crate::config::Unit;
use serde::{Deserialize, Serialize};

/// A rectangular window frame to be cut from stock profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Caller-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Reference label carried onto every cut piece.
    pub ref_no: String,
    /// Outer width (top and bottom pieces).
    pub width: f64,
    /// Outer height (left and right pieces).
    pub height: f64,
    /// Unit of width, height and sub-component lengths.
    #[serde(default)]
    pub unit: Unit,
    /// Extra linear material such as mullions or sash bars.
    #[serde(default)]
    pub sub_components: Vec<SubComponentSpec>,
}

impl FrameSpec {
    /// Create a new frame without sub-components.
    pub fn new(ref_no: impl Into<String>, width: f64, height: f64, unit: Unit) -> Self {
        let ref_no = ref_no.into();
        Self {
            id: ref_no.clone(),
            ref_no,
            width,
            height,
            unit,
            sub_components: Vec::new(),
        }
    }

    /// Append a sub-component, builder style.
    pub fn with_sub_component(mut self, sub: SubComponentSpec) -> Self {
        self.sub_components.push(sub);
        self
    }

    /// Number of pieces this frame expands to.
    pub fn piece_count(&self) -> usize {
        4 + self
            .sub_components
            .iter()
            .map(|s| s.quantity as usize)
            .sum::<usize>()
    }

    /// Total linear length required by this frame, in the frame's unit.
    pub fn required_length(&self) -> f64 {
        2.0 * self.width
            + 2.0 * self.height
            + self
                .sub_components
                .iter()
                .map(|s| s.length * s.quantity as f64)
                .sum::<f64>()
    }
}

/// Additional linear material a frame needs beyond its four edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubComponentSpec {
    /// Caller-assigned identifier.
    #[serde(default)]
    pub id: String,
    /// Display name, e.g. "Mullion".
    pub name: String,
    /// Length of one piece.
    pub length: f64,
    /// How many pieces of this length the frame needs.
    pub quantity: u32,
}

impl SubComponentSpec {
    /// Create a new sub-component.
    pub fn new(name: impl Into<String>, length: f64, quantity: u32) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            length,
            quantity,
        }
    }
}
