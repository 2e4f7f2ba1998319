//! Load-time clean-up of the static wall table.
//!
//! Adjacent rooms each contribute an edge along their shared wall. Where two
//! walls coincide the shared stretch is an opening between the rooms, so it is
//! cut out of both segments.

use tracing::debug;

use crate::shapes::Segment;

/// True when the two segments lie on the same line (within `tolerance`) and
/// their ranges overlap or touch (within `tolerance`).
pub fn are_mergeable(a: &Segment, b: &Segment, tolerance: f64) -> bool {
    if a.vertical != b.vertical || (a.offset() - b.offset()).abs() > tolerance {
        return false;
    }
    let (ra, rb) = (a.range(), b.range());
    ra.min <= rb.max + tolerance && rb.min <= ra.max + tolerance
}

/// Removes the stretch shared by two collinear segments from both.
///
/// Both segments must be normalized. When one lies inside the other, the outer
/// one keeps its leading piece and the inner one becomes the trailing piece.
/// Returns whether anything changed.
pub fn merge_pair(a: &mut Segment, b: &mut Segment, tolerance: f64) -> bool {
    if a.length <= tolerance || b.length <= tolerance || !are_mergeable(a, b, tolerance) {
        return false;
    }
    let (first, second) = if a.start_value() <= b.start_value() { (a, b) } else { (b, a) };

    let shared_start = second.start_value();
    let shared_end = first.end_value().min(second.end_value());
    if shared_end <= shared_start {
        return false;
    }

    let first_end = first.end_value();
    first.set_end_value(shared_start);
    second.set_start_value(shared_end);
    if first_end > shared_end {
        second.set_end_value(first_end);
    }
    true
}

/// Cuts every shared stretch out of the wall table and drops what is left too
/// short to matter. Running it on its own output changes nothing.
pub fn merge_static_segments(segments: &mut Vec<Segment>, tolerance: f64) {
    let before = segments.len();
    for segment in segments.iter_mut() {
        *segment = segment.normalized();
    }

    let mut passes = 0;
    loop {
        let mut changed = false;
        for i in 0..segments.len() {
            let (head, tail) = segments.split_at_mut(i + 1);
            let current = &mut head[i];
            for other in tail.iter_mut() {
                changed |= merge_pair(current, other, tolerance);
            }
        }
        passes += 1;
        if !changed || passes > before {
            break;
        }
    }

    segments.retain(|segment| segment.length > tolerance);
    debug!(before, after = segments.len(), passes, "merged static segments");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    const EPSILON: f64 = 1e-9;
    const TOLERANCE: f64 = 1e-3;

    fn horizontal(x: f64, y: f64, length: f64) -> Segment {
        Segment::new_horizontal(Vec2::new(x, y), length)
    }

    fn assert_range(segment: &Segment, start: f64, end: f64) {
        let (actual_start, actual_end) = (segment.start_value(), segment.end_value());
        assert!((actual_start - start).abs() < EPSILON, "start {} != {}", actual_start, start);
        assert!((actual_end - end).abs() < EPSILON, "end {} != {}", actual_end, end);
    }

    #[test]
    fn test_are_mergeable() {
        let base = horizontal(0.0, 0.0, 10.0);
        assert!(are_mergeable(&base, &horizontal(5.0, 0.0, 10.0), TOLERANCE));
        assert!(are_mergeable(&base, &horizontal(10.0, 0.0, 10.0), TOLERANCE));
        assert!(are_mergeable(&base, &horizontal(5.0, 0.0005, 10.0), TOLERANCE));
        assert!(!are_mergeable(&base, &horizontal(5.0, 1.0, 10.0), TOLERANCE));
        assert!(!are_mergeable(&base, &horizontal(11.0, 0.0, 10.0), TOLERANCE));
        assert!(!are_mergeable(&base, &Segment::new_vertical(Vec2::ZERO, 10.0), TOLERANCE));
    }

    #[test]
    fn test_merge_partial_overlap() {
        let mut a = horizontal(0.0, 0.0, 10.0);
        let mut b = horizontal(6.0, 0.0, 10.0);
        assert!(merge_pair(&mut a, &mut b, TOLERANCE));
        assert_range(&a, 0.0, 6.0);
        assert_range(&b, 10.0, 16.0);
    }

    #[test]
    fn test_merge_contained_splits_outer() {
        let mut outer = horizontal(0.0, 0.0, 10.0);
        let mut inner = horizontal(3.0, 0.0, 4.0);
        assert!(merge_pair(&mut inner, &mut outer, TOLERANCE));
        assert_range(&outer, 0.0, 3.0);
        assert_range(&inner, 7.0, 10.0);
    }

    #[test]
    fn test_touching_segments_unchanged() {
        let mut a = horizontal(0.0, 0.0, 10.0);
        let mut b = horizontal(10.0, 0.0, 5.0);
        assert!(!merge_pair(&mut a, &mut b, TOLERANCE));
        assert_range(&a, 0.0, 10.0);
        assert_range(&b, 10.0, 15.0);
    }

    #[test]
    fn test_identical_segments_vanish() {
        let mut segments = vec![horizontal(0.0, 5.0, 10.0), horizontal(0.0, 5.0, 10.0)];
        merge_static_segments(&mut segments, TOLERANCE);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_negative_lengths_normalized() {
        let mut segments = vec![horizontal(10.0, 0.0, -10.0), horizontal(5.0, 0.0, 10.0)];
        merge_static_segments(&mut segments, TOLERANCE);
        assert_eq!(segments.len(), 2);
        assert_range(&segments[0], 0.0, 5.0);
        assert_range(&segments[1], 10.0, 15.0);
    }

    #[test]
    fn test_disjoint_set_is_noop() {
        let original = vec![
            horizontal(0.0, 0.0, 10.0),
            horizontal(20.0, 0.0, 10.0),
            Segment::new_vertical(Vec2::new(0.0, 0.0), 10.0),
        ];
        let mut segments = original.clone();
        merge_static_segments(&mut segments, TOLERANCE);
        assert_eq!(segments, original);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut segments = vec![
            horizontal(0.0, 0.0, 10.0),
            horizontal(2.0, 0.0, 3.0),
            horizontal(4.0, 0.0, 10.0),
            horizontal(8.0, 0.0, -6.0),
        ];
        merge_static_segments(&mut segments, TOLERANCE);
        let once = segments.clone();
        merge_static_segments(&mut segments, TOLERANCE);
        assert_eq!(segments, once);
    }
}
