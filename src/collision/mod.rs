pub mod detection;
pub mod intersection;
pub mod interval;
pub mod result;
pub mod sat;

// Re-export key types
pub use detection::{intersects, test};
pub use intersection::{intersect_lines, point_in_polygon, LineIntersection};
pub use interval::{interval_intersection, value_in_interval, Boundary, Interval, Overlap};
pub use result::CollisionResult;
