//! Nail position type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A nail position in real-world units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point2D {
    /// Create a point from its coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Compare two points allowing `tolerance` difference on each axis
    pub fn approx_eq(&self, other: &Point2D, tolerance: f32) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {:.6}\nY: {:.6}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        let a = Point2D::new(0.05, 0.1);
        let b = Point2D::new(0.050_000_4, 0.099_999_6);
        assert!(a.approx_eq(&b, 1e-6));
        assert!(!a.approx_eq(&Point2D::new(0.06, 0.1), 1e-6));
    }

    #[test]
    fn test_display_matches_driver_output() {
        let p = Point2D::new(0.05, -1.5);
        assert_eq!(p.to_string(), "X: 0.050000\nY: -1.500000");
    }

    #[test]
    fn test_json_shape() {
        let p: Point2D = serde_json::from_str(r#"{"x": 1.5, "y": -2.0}"#).unwrap();
        assert_eq!(p, Point2D::new(1.5, -2.0));
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":1.5,"y":-2.0}"#);
    }
}
