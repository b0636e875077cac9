//! Canvas bounds and per-axis boundary rules.

use serde::{Deserialize, Serialize};

/// The visible canvas, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Wrap a coordinate that left `[-padding, extent + padding]` to the
/// opposite edge.
///
/// Crossing past `extent + padding` lands on `-padding` and vice versa. The
/// edges themselves are inside the band.
#[must_use]
pub fn wrap_axis(value: f32, extent: f32, padding: f32) -> f32 {
    if value > extent + padding {
        -padding
    } else if value < -padding {
        extent + padding
    } else {
        value
    }
}

/// Clamp a coordinate to `[margin, extent - margin]`.
#[must_use]
pub fn clamp_axis(value: f32, extent: f32, margin: f32) -> f32 {
    value.min(extent - margin).max(margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_past_far_edge() {
        assert_eq!(wrap_axis(901.0, 800.0, 100.0), -100.0);
    }

    #[test]
    fn test_wrap_past_near_edge() {
        assert_eq!(wrap_axis(-101.0, 800.0, 100.0), 900.0);
    }

    #[test]
    fn test_wrap_edges_are_inside() {
        assert_eq!(wrap_axis(900.0, 800.0, 100.0), 900.0);
        assert_eq!(wrap_axis(-100.0, 800.0, 100.0), -100.0);
        assert_eq!(wrap_axis(400.0, 800.0, 100.0), 400.0);
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-20.0, 600.0, 15.0), 15.0);
        assert_eq!(clamp_axis(700.0, 600.0, 15.0), 585.0);
        assert_eq!(clamp_axis(300.0, 600.0, 15.0), 300.0);
    }

    #[test]
    fn test_bounds_from_json() {
        let b: Bounds = serde_json::from_str(r#"{"width": 800, "height": 600}"#).unwrap();
        assert_eq!(b, Bounds::new(800.0, 600.0));
    }
}
