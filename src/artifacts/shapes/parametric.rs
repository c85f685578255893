use std::f64::consts::{PI, TAU};

use crate::artifacts::geometry::{Path, Point};

pub const CIRCLE_SEGMENTS: usize = 36;
pub const HEART_SAMPLES: usize = 50;
pub const STAR_POINTS: usize = 5;
pub const SPIRAL_TURNS: f64 = 3.0;
const SPIRAL_STEPS_PER_TURN: f64 = 40.0;

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::from_f64(
        f64::from(center.x) + radius * angle.cos(),
        f64::from(center.y) + radius * angle.sin(),
    )
}

/// `segments + 1` points, the last one back at angle zero.
pub fn circle(center: Point, radius: i32, segments: usize) -> Path {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| polar(center, f64::from(radius), TAU * i as f64 / segments as f64))
        .collect()
}

/// The classic `16 sin^3 t` heart, closed.
pub fn heart(center: Point, size: i32) -> Path {
    let scale = f64::from(size) / 16.0;
    let mut points: Path = (0..HEART_SAMPLES)
        .map(|i| {
            let t = i as f64 * TAU / HEART_SAMPLES as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point::from_f64(
                f64::from(center.x) + x * scale,
                f64::from(center.y) + y * scale,
            )
        })
        .collect();
    points.push(points[0]);
    points
}

/// Alternating outer and inner vertices, starting straight up. `inner`
/// defaults to half of `outer`.
pub fn star(center: Point, outer: i32, inner: Option<i32>, points: usize) -> Path {
    let inner = inner.unwrap_or(outer / 2);
    let points = points.max(1);
    (0..=points * 2)
        .map(|i| {
            let angle = PI * i as f64 / points as f64 - PI / 2.0;
            let radius = if i % 2 == 0 { outer } else { inner };
            polar(center, f64::from(radius), angle)
        })
        .collect()
}

/// Archimedean spiral growing from the centre to `max_radius`.
pub fn spiral(center: Point, max_radius: i32, turns: f64) -> Path {
    let steps = (turns * SPIRAL_STEPS_PER_TURN) as usize;
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            polar(center, f64::from(max_radius) * t, turns * TAU * t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const CENTER: Point = Point { x: 400, y: 800 };

    #[rstest]
    #[case(36)]
    #[case(8)]
    #[case(100)]
    fn circle_has_one_extra_point(#[case] segments: usize) {
        let path = circle(CENTER, 50, segments);

        assert_eq!(path.len(), segments + 1);
        assert_eq!(path[0], Point::new(450, 800));
        assert!(path.iter().all(|p| (p.distance(&CENTER) - 50.0).abs() < 1.5));
    }

    #[test]
    fn heart_is_closed_with_fifty_samples() {
        let path = heart(CENTER, 60);

        assert_eq!(path.len(), HEART_SAMPLES + 1);
        assert_eq!(path.first(), path.last());
        // t = 0 is the notch at the top, five units above the centre
        assert_eq!(path[0], Point::new(400, 781));
    }

    #[rstest]
    #[case(5)]
    #[case(6)]
    fn star_alternates_radii(#[case] n: usize) {
        let path = star(CENTER, 40, None, n);

        assert_eq!(path.len(), 2 * n + 1);
        assert_eq!(path[0], Point::new(400, 760));
        assert!((path[1].distance(&CENTER) - 20.0).abs() < 1.5);
        assert_eq!(path.first(), path.last());
    }

    #[test]
    fn spiral_samples_forty_per_turn() {
        let path = spiral(CENTER, 30, 2.0);

        assert_eq!(path.len(), 80);
        assert_eq!(path[0], CENTER);
        assert!(path.iter().all(|p| p.distance(&CENTER) <= 31.5));
    }
}
