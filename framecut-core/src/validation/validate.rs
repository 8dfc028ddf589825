//! Validation logic for frames and the standard profile.

use crate::config::EPS;
use crate::error::ValidationError;
use crate::model::{FrameSpec, StandardProfileSpec};
use crate::transform::{convert, to_millimeters};

type Result<T> = std::result::Result<T, ValidationError>;

/// Validate a full optimization request.
///
/// Checks run in a fixed order and the first failure is returned:
/// 1. At least one frame
/// 2. Positive profile length
/// 3. Non-negative blade size (when kerf is enabled)
/// 4. Frame dimensions and reference numbers
/// 5. Sub-components
/// 6. No single piece longer than the stock
pub fn validate(frames: &[FrameSpec], profile: &StandardProfileSpec) -> Result<()> {
    if frames.is_empty() {
        return Err(ValidationError::NoFramesProvided);
    }

    validate_profile(profile)?;

    for frame in frames {
        check_dimensions(frame)?;
    }

    for frame in frames {
        check_sub_components(frame)?;
    }

    for frame in frames {
        check_fits_stock(frame, profile)?;
    }

    Ok(())
}

fn validate_profile(profile: &StandardProfileSpec) -> Result<()> {
    if !is_positive(profile.length) {
        return Err(ValidationError::InvalidProfileLength {
            length: profile.length,
        });
    }

    if profile.include_blade_size && !(profile.blade_size.is_finite() && profile.blade_size >= 0.0)
    {
        return Err(ValidationError::InvalidBladeSize {
            blade_size: profile.blade_size,
        });
    }

    Ok(())
}

fn check_dimensions(frame: &FrameSpec) -> Result<()> {
    if !is_positive(frame.width) || !is_positive(frame.height) || frame.ref_no.trim().is_empty() {
        return Err(ValidationError::InvalidFrameDimensions {
            ref_no: frame.ref_no.clone(),
            width: frame.width,
            height: frame.height,
        });
    }
    Ok(())
}

fn check_sub_components(frame: &FrameSpec) -> Result<()> {
    for sub in &frame.sub_components {
        if sub.name.trim().is_empty() || !is_positive(sub.length) || sub.quantity == 0 {
            return Err(ValidationError::InvalidSubComponent {
                ref_no: frame.ref_no.clone(),
                name: sub.name.clone(),
                length: sub.length,
                quantity: sub.quantity,
            });
        }
    }
    Ok(())
}

fn check_fits_stock(frame: &FrameSpec, profile: &StandardProfileSpec) -> Result<()> {
    // Compared in millimeters with the packer's tolerance; reported in the frame's unit
    let stock_mm = to_millimeters(profile.length, profile.unit);
    let max_length = convert(profile.length, profile.unit, frame.unit);

    let exceeds = |piece: &str, length: f64| -> Result<()> {
        if to_millimeters(length, frame.unit) > stock_mm + EPS {
            return Err(ValidationError::PieceExceedsStockLength {
                ref_no: frame.ref_no.clone(),
                piece: piece.to_string(),
                length,
                stock_length: max_length,
                unit: frame.unit,
            });
        }
        Ok(())
    };

    exceeds("width", frame.width)?;
    exceeds("height", frame.height)?;
    for sub in &frame.sub_components {
        exceeds(&sub.name, sub.length)?;
    }

    Ok(())
}

/// Finite and strictly positive; NaN fails.
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Unit;
    use crate::model::SubComponentSpec;

    fn profile_mm(length: f64) -> StandardProfileSpec {
        StandardProfileSpec::new(length, Unit::Millimeter)
    }

    fn frame(ref_no: &str, width: f64, height: f64) -> FrameSpec {
        FrameSpec::new(ref_no, width, height, Unit::Millimeter)
    }

    // ==================== Request-level checks ====================

    #[test]
    fn test_no_frames() {
        let result = validate(&[], &profile_mm(6000.0));
        assert_eq!(result, Err(ValidationError::NoFramesProvided));
    }

    #[test]
    fn test_no_frames_checked_before_profile() {
        let result = validate(&[], &profile_mm(0.0));
        assert_eq!(result, Err(ValidationError::NoFramesProvided));
    }

    #[test]
    fn test_invalid_profile_length() {
        let frames = [frame("W1", 1000.0, 1200.0)];
        for length in [0.0, -10.0, f64::NAN] {
            let result = validate(&frames, &profile_mm(length));
            assert!(matches!(
                result,
                Err(ValidationError::InvalidProfileLength { .. })
            ));
        }
    }

    #[test]
    fn test_negative_blade_size_only_when_enabled() {
        let frames = [frame("W1", 1000.0, 1200.0)];
        let mut profile = profile_mm(6000.0);
        profile.blade_size = -1.0;
        assert!(validate(&frames, &profile).is_ok());

        profile.include_blade_size = true;
        assert_eq!(
            validate(&frames, &profile),
            Err(ValidationError::InvalidBladeSize { blade_size: -1.0 })
        );
    }

    #[test]
    fn test_profile_length_checked_before_frames() {
        let frames = [frame("W1", 0.0, 1200.0)];
        assert_eq!(
            validate(&frames, &profile_mm(0.0)),
            Err(ValidationError::InvalidProfileLength { length: 0.0 })
        );
    }

    #[test]
    fn test_zero_blade_size_is_valid() {
        let frames = [frame("W1", 1000.0, 1200.0)];
        assert!(validate(&frames, &profile_mm(6000.0).with_kerf(0.0)).is_ok());
    }

    // ==================== Frame checks ====================

    #[test]
    fn test_invalid_frame_dimensions() {
        let frames = [frame("W1", 1000.0, 1200.0), frame("W2", 0.0, 1200.0)];
        match validate(&frames, &profile_mm(6000.0)) {
            Err(ValidationError::InvalidFrameDimensions { ref_no, .. }) => assert_eq!(ref_no, "W2"),
            other => panic!("Expected InvalidFrameDimensions, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_ref_no() {
        let frames = [frame("  ", 1000.0, 1200.0)];
        assert!(matches!(
            validate(&frames, &profile_mm(6000.0)),
            Err(ValidationError::InvalidFrameDimensions { .. })
        ));
    }

    #[test]
    fn test_invalid_sub_component() {
        let cases = [
            SubComponentSpec::new("", 100.0, 1),
            SubComponentSpec::new("Mullion", 0.0, 1),
            SubComponentSpec::new("Mullion", 100.0, 0),
        ];
        for sub in cases {
            let frames = [frame("W1", 1000.0, 1200.0).with_sub_component(sub.clone())];
            match validate(&frames, &profile_mm(6000.0)) {
                Err(ValidationError::InvalidSubComponent { ref_no, name, .. }) => {
                    assert_eq!(ref_no, "W1");
                    assert_eq!(name, sub.name);
                }
                other => panic!("Expected InvalidSubComponent, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_dimensions_checked_before_sub_components() {
        let frames = [
            frame("W1", 1000.0, 1200.0).with_sub_component(SubComponentSpec::new("", 1.0, 1)),
            frame("W2", -1.0, 1200.0),
        ];
        assert!(matches!(
            validate(&frames, &profile_mm(6000.0)),
            Err(ValidationError::InvalidFrameDimensions { .. })
        ));
    }

    #[test]
    fn test_sub_components_checked_before_stock_fit() {
        let frames =
            [frame("W1", 7000.0, 1200.0).with_sub_component(SubComponentSpec::new("", 100.0, 1))];
        match validate(&frames, &profile_mm(6000.0)) {
            Err(ValidationError::InvalidSubComponent { ref_no, .. }) => assert_eq!(ref_no, "W1"),
            other => panic!("Expected InvalidSubComponent, got {:?}", other),
        }
    }

    // ==================== Stock length checks ====================

    #[test]
    fn test_width_exceeds_stock() {
        let frames = [frame("W1", 7000.0, 1200.0)];
        match validate(&frames, &profile_mm(6000.0)) {
            Err(ValidationError::PieceExceedsStockLength {
                ref_no,
                piece,
                stock_length,
                ..
            }) => {
                assert_eq!(ref_no, "W1");
                assert_eq!(piece, "width");
                assert_eq!(stock_length, 6000.0);
            }
            other => panic!("Expected PieceExceedsStockLength, got {:?}", other),
        }
    }

    #[test]
    fn test_sub_component_exceeds_stock() {
        let frames =
            [frame("W1", 1000.0, 1200.0).with_sub_component(SubComponentSpec::new("Bar", 6500.0, 1))];
        match validate(&frames, &profile_mm(6000.0)) {
            Err(ValidationError::PieceExceedsStockLength { piece, .. }) => assert_eq!(piece, "Bar"),
            other => panic!("Expected PieceExceedsStockLength, got {:?}", other),
        }
    }

    #[test]
    fn test_piece_equal_to_stock_fits() {
        let frames = [frame("W1", 6000.0, 6000.0)];
        assert!(validate(&frames, &profile_mm(6000.0)).is_ok());
    }

    #[test]
    fn test_stock_converted_to_frame_unit() {
        // 20 ft of stock is 6096 mm
        let profile = StandardProfileSpec::new(20.0, Unit::Foot);
        assert!(validate(&[frame("W1", 6096.0, 100.0)], &profile).is_ok());
        assert!(matches!(
            validate(&[frame("W1", 6100.0, 100.0)], &profile),
            Err(ValidationError::PieceExceedsStockLength { .. })
        ));

        let feet_frame = FrameSpec::new("W2", 21.0, 3.0, Unit::Foot);
        let mm_profile = profile_mm(6096.0);
        assert!(matches!(
            validate(&[feet_frame], &mm_profile),
            Err(ValidationError::PieceExceedsStockLength { unit: Unit::Foot, .. })
        ));
    }

    #[test]
    fn test_feet_frame_just_over_mm_stock() {
        // 0.00009 ft is about 0.027 mm, well past the millimeter tolerance
        let frames = [FrameSpec::new("W1", 6000.0 / 304.8 + 0.00009, 3.0, Unit::Foot)];
        match validate(&frames, &profile_mm(6000.0)) {
            Err(ValidationError::PieceExceedsStockLength {
                ref_no, piece, unit, ..
            }) => {
                assert_eq!(ref_no, "W1");
                assert_eq!(piece, "width");
                assert_eq!(unit, Unit::Foot);
            }
            other => panic!("Expected PieceExceedsStockLength, got {:?}", other),
        }
    }

    #[test]
    fn test_feet_frame_equal_to_mm_stock_fits() {
        let frames = [FrameSpec::new("W1", 6000.0 / 304.8, 3.0, Unit::Foot)];
        assert!(validate(&frames, &profile_mm(6000.0)).is_ok());
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let frames = vec![frame("W1", 1000.0, 1200.0)];
        let profile = profile_mm(6000.0);
        let before = frames.clone();
        validate(&frames, &profile).unwrap();
        assert_eq!(frames, before);
    }
}
