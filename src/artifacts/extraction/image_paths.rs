use serde::Serialize;

use crate::ExtractMethod;
use crate::artifacts::geometry::{Path, point_count};

/// Rough time the device needs per point.
const SECONDS_PER_POINT: f64 = 0.03;

/// Paths in source-image pixel space, plus the size of that image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImagePaths {
    pub paths: Vec<Path>,
    pub width: u32,
    pub height: u32,
}

impl ImagePaths {
    pub fn new(paths: Vec<Path>, width: u32, height: u32) -> Self {
        ImagePaths {
            paths,
            width,
            height,
        }
    }

    pub fn stats(&self) -> ExtractionStats {
        let points = point_count(&self.paths);
        ExtractionStats {
            path_count: self.paths.len(),
            point_count: points,
            est_time: points as f64 * SECONDS_PER_POINT,
        }
    }

    pub fn into_report(self, method: ExtractMethod) -> ExtractionReport {
        ExtractionReport {
            method,
            stats: self.stats(),
            width: self.width,
            height: self.height,
            paths: self.paths,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExtractionStats {
    pub path_count: usize,
    pub point_count: usize,
    /// Seconds
    pub est_time: f64,
}

/// Paths plus everything a client needs to place them.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub method: ExtractMethod,
    pub paths: Vec<Path>,
    #[serde(flatten)]
    pub stats: ExtractionStats,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::geometry::Point;

    #[test]
    fn stats_count_paths_and_points() {
        let paths = vec![
            vec![Point::new(0, 0), Point::new(1, 1)],
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)],
        ];

        let stats = ImagePaths::new(paths, 10, 10).stats();

        assert_eq!(stats.path_count, 2);
        assert_eq!(stats.point_count, 5);
        assert!((stats.est_time - 0.15).abs() < 1e-9);
    }

    #[test]
    fn report_flattens_stats_next_to_paths() {
        let paths = vec![vec![Point::new(1, 2), Point::new(3, 4)]];

        let report = ImagePaths::new(paths, 40, 30).into_report(ExtractMethod::Edges);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["method"], "edges");
        assert_eq!(json["paths"], serde_json::json!([[[1, 2], [3, 4]]]));
        assert_eq!(json["path_count"], 1);
        assert_eq!(json["point_count"], 2);
        assert_eq!(json["width"], 40);
    }
}
