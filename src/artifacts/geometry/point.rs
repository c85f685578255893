use derive_new::new;
use serde::{Deserialize, Serialize};

/// Pixel coordinate, either in source-image space or on the device screen.
///
/// Serialised as a `[x, y]` pair so path lists stay compact on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, new, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Truncates toward zero, the way screen coordinates are produced everywhere.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Point::new(x as i32, y as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
