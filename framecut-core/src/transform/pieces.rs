//! Expansion of frames into individual cut pieces.

use crate::config::Unit;
use crate::model::{CutPiece, FrameSpec, PiecePosition};

use super::units::convert;

/// Expand frames into the pieces they require.
///
/// Order is deterministic: frames in the given order, and within a frame
/// top, bottom, left, right, then each sub-component repeated by quantity.
pub fn build_pieces(frames: &[FrameSpec]) -> Vec<CutPiece> {
    let mut pieces = Vec::with_capacity(piece_count(frames));

    for frame in frames {
        let edge = |length: f64, position: PiecePosition| CutPiece {
            length,
            unit: frame.unit,
            frame_id: frame.id.clone(),
            ref_no: frame.ref_no.clone(),
            position,
            sub_component_name: None,
        };

        // Horizontal pieces
        pieces.push(edge(frame.width, PiecePosition::Top));
        pieces.push(edge(frame.width, PiecePosition::Bottom));

        // Vertical pieces
        pieces.push(edge(frame.height, PiecePosition::Left));
        pieces.push(edge(frame.height, PiecePosition::Right));

        for sub in &frame.sub_components {
            for _ in 0..sub.quantity {
                pieces.push(CutPiece {
                    sub_component_name: Some(sub.name.clone()),
                    ..edge(sub.length, PiecePosition::Additional)
                });
            }
        }
    }

    tracing::debug!("Built {} piece(s) from {} frame(s)", pieces.len(), frames.len());
    pieces
}

/// Number of pieces `build_pieces` produces for these frames.
pub fn piece_count(frames: &[FrameSpec]) -> usize {
    frames.iter().map(FrameSpec::piece_count).sum()
}

/// Total length of every required piece, expressed in `unit`.
pub fn total_required_length(frames: &[FrameSpec], unit: Unit) -> f64 {
    frames
        .iter()
        .map(|frame| convert(frame.required_length(), frame.unit, unit))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;
    use crate::model::SubComponentSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_four_edges_per_frame() {
        let frame = FrameSpec::new("W1", 1000.0, 1200.0, Unit::Millimeter);
        let pieces = build_pieces(&[frame]);

        let summary: Vec<(f64, PiecePosition)> =
            pieces.iter().map(|p| (p.length, p.position)).collect();
        assert_eq!(
            summary,
            vec![
                (1000.0, PiecePosition::Top),
                (1000.0, PiecePosition::Bottom),
                (1200.0, PiecePosition::Left),
                (1200.0, PiecePosition::Right),
            ]
        );
        assert!(pieces.iter().all(|p| p.ref_no == "W1"));
        assert!(pieces.iter().all(|p| p.sub_component_name.is_none()));
    }

    #[test]
    fn test_sub_components_follow_edges_in_order() {
        let frame = FrameSpec::new("W1", 800.0, 900.0, Unit::Millimeter)
            .with_sub_component(SubComponentSpec::new("Mullion", 850.0, 2))
            .with_sub_component(SubComponentSpec::new("Sash", 400.0, 1));
        let pieces = build_pieces(&[frame]);

        assert_eq!(pieces.len(), 7);
        let names: Vec<Option<&str>> = pieces[4..]
            .iter()
            .map(|p| p.sub_component_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Mullion"), Some("Mullion"), Some("Sash")]);
        assert!(pieces[4..].iter().all(|p| p.is_additional()));
        assert_eq!(pieces[6].length, 400.0);
    }

    #[test]
    fn test_frames_keep_input_order() {
        let frames = vec![
            FrameSpec::new("A", 100.0, 200.0, Unit::Millimeter),
            FrameSpec::new("B", 300.0, 400.0, Unit::Millimeter),
        ];
        let pieces = build_pieces(&frames);
        let refs: Vec<&str> = pieces.iter().map(|p| p.ref_no.as_str()).collect();
        assert_eq!(refs, vec!["A", "A", "A", "A", "B", "B", "B", "B"]);
    }

    #[test]
    fn test_piece_count_law() {
        let frames = vec![
            FrameSpec::new("A", 100.0, 200.0, Unit::Millimeter)
                .with_sub_component(SubComponentSpec::new("Bar", 50.0, 3)),
            FrameSpec::new("B", 300.0, 400.0, Unit::Millimeter),
        ];
        assert_eq!(piece_count(&frames), 4 * 2 + 3);
        assert_eq!(build_pieces(&frames).len(), piece_count(&frames));
    }

    #[test]
    fn test_zero_quantity_emits_nothing() {
        let frame = FrameSpec::new("A", 100.0, 200.0, Unit::Millimeter)
            .with_sub_component(SubComponentSpec::new("Bar", 50.0, 0));
        assert_eq!(build_pieces(&[frame]).len(), 4);
    }

    #[test]
    fn test_total_required_length_mixed_units() {
        let frames = vec![
            FrameSpec::new("A", 1000.0, 1200.0, Unit::Millimeter),
            FrameSpec::new("B", 1.0, 1.0, Unit::Foot),
        ];
        let total = total_required_length(&frames, Unit::Millimeter);
        assert!(approx_eq(total, 4400.0 + 4.0 * 304.8));
    }
}
