//! One-dimensional helpers shared by the closed-form tests and the separating axis test.

use std::ops::Neg;

/// Whether touching boundaries count as contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    /// Strict comparisons: shared edges do not overlap.
    #[default]
    Exclusive,
    /// Non-strict comparisons: shared edges overlap.
    Inclusive,
}

impl Boundary {
    fn accepts(self, distance_to_lower: f64, distance_to_upper: f64) -> bool {
        match self {
            Boundary::Exclusive => distance_to_lower > 0.0 && distance_to_upper > 0.0,
            Boundary::Inclusive => distance_to_lower >= 0.0 && distance_to_upper >= 0.0,
        }
    }
}

/// A closed scalar range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Creates an interval from two bounds given in any order.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// A zero-width interval.
    pub fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, value: f64, boundary: Boundary) -> bool {
        boundary.accepts(value - self.min, self.max - value)
    }

    /// Grows the interval by `amount` on both sides.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(self.min - amount, self.max + amount)
    }

    pub fn overlaps(&self, other: &Interval, boundary: Boundary) -> bool {
        boundary.accepts(self.max - other.min, other.max - self.min)
    }

    /// Empty space between the two intervals; zero when they touch or overlap.
    pub fn gap(&self, other: &Interval) -> f64 {
        (other.min - self.max).max(self.min - other.max).max(0.0)
    }
}

/// Signed one-dimensional translation produced by the interval helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub overlapping: bool,
    /// Shift to apply to the first argument to bring it to the nearest edge.
    pub translation: f64,
}

impl Overlap {
    /// The translation when overlapping, zero otherwise.
    pub fn value(&self) -> f64 {
        if self.overlapping {
            self.translation
        } else {
            0.0
        }
    }
}

impl Neg for Overlap {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            overlapping: self.overlapping,
            translation: -self.translation,
        }
    }
}

/// Signed translation moving `value` out of `interval` through the nearest edge.
///
/// Equal distances resolve toward the lower edge.
pub fn value_in_interval(value: f64, interval: Interval, boundary: Boundary) -> Overlap {
    let to_lower = value - interval.min;
    let to_upper = interval.max - value;
    Overlap {
        overlapping: boundary.accepts(to_lower, to_upper),
        translation: if to_lower > to_upper { to_upper } else { -to_lower },
    }
}

/// Signed translation moving `a` clear of `b` along their common axis.
///
/// Equal distances resolve toward the negative direction.
pub fn interval_intersection(a: Interval, b: Interval, boundary: Boundary) -> Overlap {
    let to_lower = a.max - b.min;
    let to_upper = b.max - a.min;
    Overlap {
        overlapping: boundary.accepts(to_lower, to_upper),
        translation: if to_lower > to_upper { to_upper } else { -to_lower },
    }
}
