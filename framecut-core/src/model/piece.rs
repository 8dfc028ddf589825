//! Cut piece definition: one linear segment cut from a profile.

use crate::config::Unit;
use serde::{Deserialize, Serialize};

/// Which part of a frame a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PiecePosition {
    Top,
    Bottom,
    Left,
    Right,
    /// Sub-component piece.
    Additional,
}

impl PiecePosition {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PiecePosition::Top => "Top",
            PiecePosition::Bottom => "Bottom",
            PiecePosition::Left => "Left",
            PiecePosition::Right => "Right",
            PiecePosition::Additional => "Additional",
        }
    }
}

impl std::fmt::Display for PiecePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single piece to be cut, traced back to its frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutPiece {
    /// Piece length.
    pub length: f64,
    /// Unit of `length`.
    pub unit: Unit,
    /// Owning frame identifier.
    pub frame_id: String,
    /// Owning frame reference label.
    pub ref_no: String,
    /// Position within the frame.
    pub position: PiecePosition,
    /// Sub-component name (only for additional pieces).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_component_name: Option<String>,
}

impl CutPiece {
    /// Check if this piece comes from a sub-component.
    pub fn is_additional(&self) -> bool {
        self.position == PiecePosition::Additional
    }

    /// Label used in cut lists: the edge name, or the sub-component name.
    pub fn label(&self) -> &str {
        match &self.sub_component_name {
            Some(name) if self.is_additional() => name,
            _ => self.position.label(),
        }
    }
}
