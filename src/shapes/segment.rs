use crate::collision::interval::Interval;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::line::Line;
use super::rect::Rect;

/// Axis-aligned static wall piece: an anchor, a signed length and an orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub position: Vec2,
    pub length: f64,
    pub vertical: bool,
}

impl Segment {
    pub fn new(position: Vec2, length: f64, vertical: bool) -> Self {
        Self { position, length, vertical }
    }

    pub fn new_horizontal(position: Vec2, length: f64) -> Self {
        Self::new(position, length, false)
    }

    pub fn new_vertical(position: Vec2, length: f64) -> Self {
        Self::new(position, length, true)
    }

    /// Sorted extent along the segment's own axis.
    pub fn range(&self) -> Interval {
        Interval::new(self.start_value(), self.end_value())
    }

    /// Vector from the anchor to the far end.
    pub fn direction(&self) -> Vec2 {
        if self.vertical {
            Vec2::new(0.0, self.length)
        } else {
            Vec2::new(self.length, 0.0)
        }
    }

    pub fn end(&self) -> Vec2 {
        self.position + self.direction()
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.direction() * 0.5
    }

    pub fn start_value(&self) -> f64 {
        if self.vertical {
            self.position.y
        } else {
            self.position.x
        }
    }

    /// Moves the anchor along the axis while keeping the far end in place.
    pub fn set_start_value(&mut self, value: f64) {
        self.length -= value - self.start_value();
        if self.vertical {
            self.position.y = value;
        } else {
            self.position.x = value;
        }
    }

    pub fn end_value(&self) -> f64 {
        self.start_value() + self.length
    }

    /// Moves the far end along the axis while keeping the anchor in place.
    pub fn set_end_value(&mut self, value: f64) {
        self.length = value - self.start_value();
    }

    /// Coordinate on the perpendicular axis.
    pub fn offset(&self) -> f64 {
        if self.vertical {
            self.position.x
        } else {
            self.position.y
        }
    }

    pub fn set_offset(&mut self, value: f64) {
        if self.vertical {
            self.position.x = value;
        } else {
            self.position.y = value;
        }
    }

    /// Same points with a non-negative length.
    pub fn normalized(&self) -> Self {
        if self.length >= 0.0 {
            *self
        } else {
            Self::new(self.end(), -self.length, self.vertical)
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0 || !self.length.is_finite()
    }

    /// Extent along the world x axis (a single value for vertical segments).
    pub fn extent_x(&self) -> Interval {
        if self.vertical {
            Interval::point(self.position.x)
        } else {
            self.range()
        }
    }

    /// Extent along the world y axis (a single value for horizontal segments).
    pub fn extent_y(&self) -> Interval {
        if self.vertical {
            self.range()
        } else {
            Interval::point(self.position.y)
        }
    }

    pub fn project(&self, axis: Vec2) -> Interval {
        Interval::new(self.position.dot(axis), self.end().dot(axis))
    }

    /// Nearest point of the segment to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let range = self.range();
        if self.vertical {
            Vec2::new(self.position.x, point.y.clamp(range.min, range.max))
        } else {
            Vec2::new(point.x.clamp(range.min, range.max), self.position.y)
        }
    }

    pub fn to_line(&self) -> Line {
        Line::new(self.position, self.end())
    }

    /// One unit thick rectangle starting at the anchor.
    pub fn to_rect(&self) -> Rect {
        let size = if self.vertical {
            Vec2::new(1.0, self.length)
        } else {
            Vec2::new(self.length, 1.0)
        };
        Rect::from_position_size(self.position, size).normalized()
    }

    /// Zero-thickness bounding box.
    pub fn bounds(&self) -> Rect {
        let x = self.extent_x();
        let y = self.extent_y();
        Rect::new(x.min, y.min, x.length(), y.length())
    }

    /// Scaled, snapped to quarter turns (each turn swaps the orientation), then translated.
    pub fn positioned(&self, transform: &Transform) -> Self {
        let axis_scale = if self.vertical { transform.scale.y } else { transform.scale.x };
        let mut segment = Self::new(
            self.position.component_mul(transform.scale),
            self.length * axis_scale,
            self.vertical,
        );
        for _ in 0..transform.quarter_turns() {
            // A vertical segment turns into a horizontal one running toward -x.
            if segment.vertical {
                segment.length = -segment.length;
            }
            segment.position = segment.position.rotate_quarter_turns(1);
            segment.vertical = !segment.vertical;
        }
        segment.position += transform.position;
        segment
    }
}
