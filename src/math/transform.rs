use super::vec2::Vec2;
use std::f64::consts::FRAC_PI_2;

/// World pose of a body: translation, component-wise scale and rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f64, // Angle in radians
}

impl Transform {
    /// Creates a new transform.
    pub fn new(position: Vec2, scale: Vec2, rotation: f64) -> Self {
        Self { position, scale, rotation }
    }

    /// Creates an identity transform (no translation, unit scale, no rotation).
    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }

    /// A pure translation.
    pub fn from_position(position: Vec2) -> Self {
        Self { position, ..Self::identity() }
    }

    /// Applies the transform (scale, then rotation, then translation) to a point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        point.component_mul(self.scale).rotate(self.rotation) + self.position
    }

    /// Applies only the linear part (scale then rotation) to a direction.
    pub fn apply_vector(&self, vector: Vec2) -> Vec2 {
        vector.component_mul(self.scale).rotate(self.rotation)
    }

    /// Rotation snapped to a whole number of quarter turns.
    ///
    /// The residual angle always lies in [-45°, 45°]; an exact ±45° residual
    /// rounds toward zero turns.
    pub fn quarter_turns(&self) -> i32 {
        let q = self.rotation / FRAC_PI_2;
        let turns = if q > 0.0 { (q - 0.5).ceil() } else { (q + 0.5).floor() };
        // Only the class mod 4 matters.
        turns.rem_euclid(4.0) as i32
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
