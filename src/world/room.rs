use crate::collision::Boundary;
use crate::math::vec2::Vec2;
use crate::shapes::{Rect, Segment};

/// A rectangular room whose four edges become static walls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub rect: Rect,
}

impl Room {
    pub fn new(rect: Rect) -> Self {
        Self { rect: rect.normalized() }
    }

    /// Top, bottom, left and right edges, in that order.
    pub fn boundary_segments(&self) -> [Segment; 4] {
        let rect = self.rect;
        [
            Segment::new_horizontal(rect.upper_left(), rect.size.x),
            Segment::new_horizontal(rect.bottom_left(), rect.size.x),
            Segment::new_vertical(rect.upper_left(), rect.size.y),
            Segment::new_vertical(rect.upper_right(), rect.size.y),
        ]
    }

    /// Points on the edge count as inside.
    pub fn is_point_inside(&self, point: Vec2) -> bool {
        self.rect.contains_point(point, Boundary::Inclusive)
    }
}

impl From<Rect> for Room {
    fn from(rect: Rect) -> Self {
        Room::new(rect)
    }
}
