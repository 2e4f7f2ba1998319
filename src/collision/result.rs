use std::ops::Neg;

use crate::math::vec2::Vec2;

/// Outcome of a narrow-phase test between two shapes.
///
/// `penetration` is the translation to apply to the first shape to separate it
/// from the second. A zero penetration is never reported as overlapping.
/// Serialize-only: results are built through the constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollisionResult {
    overlapping: bool,
    penetration: Vec2,
    distance: f64,
}

impl CollisionResult {
    /// Overlap resolved by `penetration`; a zero vector degrades to a touching contact.
    pub fn overlap(penetration: Vec2) -> Self {
        Self {
            overlapping: !penetration.is_zero(),
            penetration,
            distance: penetration.magnitude(),
        }
    }

    /// Disjoint (or touching, when `distance` is zero) shapes.
    pub fn separated(distance: f64) -> Self {
        Self {
            overlapping: false,
            penetration: Vec2::ZERO,
            distance: if distance.is_nan() { f64::INFINITY } else { distance.max(0.0) },
        }
    }

    /// Result for degenerate inputs: no collision, infinitely far apart.
    pub fn none() -> Self {
        Self::separated(f64::INFINITY)
    }

    pub fn overlapping(&self) -> bool {
        self.overlapping
    }

    pub fn penetration(&self) -> Vec2 {
        self.penetration
    }

    /// Penetration depth when overlapping, separation gap otherwise.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Shapes share a boundary without overlapping.
    pub fn is_touching(&self) -> bool {
        !self.overlapping && self.distance == 0.0
    }

    /// Of two results, the overlapping one with the smaller penetration.
    pub fn better(self, other: Self) -> Self {
        let own = self.penetration.magnitude_squared();
        let theirs = other.penetration.magnitude_squared();
        match (self.overlapping, other.overlapping) {
            (false, _) => other,
            (_, false) => self,
            _ if own < theirs => self,
            _ => other,
        }
    }

    /// Of two results, the overlapping one with the larger penetration.
    pub fn worse(self, other: Self) -> Self {
        let own = self.penetration.magnitude_squared();
        let theirs = other.penetration.magnitude_squared();
        match (self.overlapping, other.overlapping) {
            (false, _) => other,
            (_, false) => self,
            _ if own > theirs => self,
            _ => other,
        }
    }
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::none()
    }
}

impl Neg for CollisionResult {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            overlapping: self.overlapping,
            penetration: -self.penetration,
            distance: self.distance,
        }
    }
}
