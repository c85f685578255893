use crate::artifacts::geometry::Path;

/// Axis-aligned extent of a set of paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    /// `None` when there are no points at all.
    pub fn of(paths: &[Path]) -> Option<Self> {
        let mut points = paths.iter().flatten();
        let first = points.next()?;

        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };

        Some(points.fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Zero extents count as 1 so that scale ratios stay finite.
    pub fn width(&self) -> f64 {
        match self.max_x - self.min_x {
            0 => 1.0,
            w => f64::from(w),
        }
    }

    pub fn height(&self) -> f64 {
        match self.max_y - self.min_y {
            0 => 1.0,
            h => f64::from(h),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (
            f64::from(self.min_x) + self.width() / 2.0,
            f64::from(self.min_y) + self.height() / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::geometry::Point;

    #[test]
    fn empty_paths_have_no_bounds() {
        assert!(Bounds::of(&[]).is_none());
        assert!(Bounds::of(&[vec![]]).is_none());
    }

    #[test]
    fn bounds_span_every_path() {
        let paths = vec![
            vec![Point::new(5, 10), Point::new(20, 4)],
            vec![Point::new(-3, 7)],
        ];
        let bounds = Bounds::of(&paths).unwrap();

        assert_eq!((bounds.min_x, bounds.min_y), (-3, 4));
        assert_eq!((bounds.max_x, bounds.max_y), (20, 10));
        assert_eq!(bounds.width(), 23.0);
        assert_eq!(bounds.center(), (8.5, 7.0));
    }

    #[test]
    fn degenerate_extent_counts_as_one() {
        let bounds = Bounds::of(&[vec![Point::new(4, 4), Point::new(4, 9)]]).unwrap();

        assert_eq!(bounds.width(), 1.0);
        assert_eq!(bounds.height(), 5.0);
    }
}
