//! Distance and direction primitives shared by all movement and targeting code.

use glam::Vec2;

use crate::types::Position;

/// Euclidean distance between two positions.
pub fn distance(a: Position, b: Position) -> f32 {
    a.to_vec2().distance(b.to_vec2())
}

/// Unit vector in direction (dx, dy).
///
/// A zero-length input yields the zero vector, so an entity sitting exactly
/// on its target simply does not move this tick.
pub fn normalize(dx: f32, dy: f32) -> Vec2 {
    Vec2::new(dx, dy).normalize_or_zero()
}

/// Unit vector pointing from `from` toward `to`.
pub fn direction(from: Position, to: Position) -> Vec2 {
    normalize(to.x - from.x, to.y - from.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_3_4_5() {
        let d = distance(Position::new(0.0, 0.0), Position::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_unit_length() {
        let n = normalize(10.0, -10.0);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(n.x > 0.0 && n.y < 0.0);
    }

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        let n = normalize(0.0, 0.0);
        assert_eq!(n, Vec2::ZERO);
        assert!(!n.x.is_nan() && !n.y.is_nan());
    }

    #[test]
    fn test_direction_points_at_target() {
        let d = direction(Position::new(150.0, 150.0), Position::new(150.0, 50.0));
        assert!((d.x).abs() < 1e-6);
        assert!((d.y + 1.0).abs() < 1e-6);
    }
}
