//! Dotted boundary line finding
//!
//! The boundary is drawn as short white dashes. After dilating the bright
//! mask the dashes nearly touch, so a boundary line shows up as a run of set
//! pixels along a row (horizontal) or column (vertical) with small gaps.
//! Runs that are long enough become line candidates; candidates close to each
//! other are then clustered into one line per boundary edge.

use image::GrayImage;
use imageproc::distance_transform::Norm;
use imageproc::morphology::dilate;

use crate::artifacts::core::SET;

/// Shortest span accepted as a line.
pub const MIN_LINE_LENGTH: u32 = 50;
/// Longest gap bridged inside one line.
pub const MAX_LINE_GAP: u32 = 30;
const DILATE_ITERATIONS: usize = 2;

macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_detection")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

/// A detected line: row (horizontal) or column (vertical) and its span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCandidate {
    pub position: i32,
    pub length: f64,
}

impl LineCandidate {
    pub fn new(position: i32, length: f64) -> Self {
        LineCandidate { position, length }
    }
}

#[derive(Debug, Default)]
pub struct DetectedLines {
    pub horizontal: Vec<LineCandidate>,
    pub vertical: Vec<LineCandidate>,
}

/// Find horizontal and vertical line candidates in a bright-pixel mask.
pub fn detect_lines(bright: &GrayImage) -> DetectedLines {
    let mut dilated = bright.clone();
    for _ in 0..DILATE_ITERATIONS {
        dilated = dilate(&dilated, Norm::LInf, 1);
    }

    let (width, height) = dilated.dimensions();
    let is_set = |x: u32, y: u32| dilated.get_pixel(x, y)[0] == SET;

    let horizontal = (0..height)
        .flat_map(|y| runs(width, |x| is_set(x, y)).into_iter().map(move |len| (y, len)))
        .map(|(y, len)| LineCandidate::new(y as i32, len))
        .collect::<Vec<_>>();

    let vertical = (0..width)
        .flat_map(|x| runs(height, |y| is_set(x, y)).into_iter().map(move |len| (x, len)))
        .map(|(x, len)| LineCandidate::new(x as i32, len))
        .collect::<Vec<_>>();

    debug_log!(
        "raw candidates: {} horizontal, {} vertical",
        horizontal.len(),
        vertical.len()
    );

    DetectedLines {
        horizontal,
        vertical,
    }
}

/// Spans of every gap-tolerant run along one scanline that are long enough.
fn runs(len: u32, is_set: impl Fn(u32) -> bool) -> Vec<f64> {
    let mut spans = Vec::new();
    let mut current: Option<(u32, u32)> = None;

    for i in (0..len).filter(|&i| is_set(i)) {
        current = match current {
            Some((start, last)) if i - last - 1 <= MAX_LINE_GAP => Some((start, i)),
            Some((start, last)) => {
                push_span(&mut spans, start, last);
                Some((i, i))
            }
            None => Some((i, i)),
        };
    }
    if let Some((start, last)) = current {
        push_span(&mut spans, start, last);
    }

    spans
}

fn push_span(spans: &mut Vec<f64>, start: u32, last: u32) {
    let span = last - start;
    if span > MIN_LINE_LENGTH {
        spans.push(f64::from(span));
    }
}

/// Merge candidates whose positions are closer than `min_gap` to the previous
/// candidate. Each cluster reports its mean position and total length.
pub fn cluster_lines(lines: &[LineCandidate], min_gap: i32) -> Vec<LineCandidate> {
    let mut sorted = lines.to_vec();
    sorted.sort_by_key(|line| line.position);

    let mut clusters: Vec<Vec<LineCandidate>> = Vec::new();
    for line in sorted {
        let joins_previous = clusters
            .last()
            .and_then(|cluster| cluster.last())
            .is_some_and(|prev| line.position - prev.position < min_gap);

        if let Some(cluster) = clusters.last_mut().filter(|_| joins_previous) {
            cluster.push(line);
        } else {
            clusters.push(vec![line]);
        }
    }

    clusters
        .into_iter()
        .map(|cluster| {
            let count = cluster.len() as f64;
            let mean = cluster.iter().map(|l| f64::from(l.position)).sum::<f64>() / count;
            let total = cluster.iter().map(|l| l.length).sum();
            LineCandidate::new(mean as i32, total)
        })
        .collect()
}

/// Position of the longest cluster lying within `[start, end]` fractions of `dim`.
pub fn find_boundary_line(
    clusters: &[LineCandidate],
    start: f64,
    end: f64,
    dim: u32,
) -> Option<i32> {
    let dim = f64::from(dim);
    clusters
        .iter()
        .filter(|c| {
            let p = f64::from(c.position);
            start * dim <= p && p <= end * dim
        })
        .max_by(|a, b| a.length.total_cmp(&b.length))
        .map(|c| c.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn dashed_row(width: u32, height: u32, row: u32, from: u32, to: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            let on_dash = (x - from.min(x)) % 20 < 12;
            Luma([if y == row && (from..=to).contains(&x) && on_dash {
                SET
            } else {
                0
            }])
        })
    }

    #[test]
    fn runs_bridge_small_gaps_and_split_large_ones() {
        let set = |i: u32| (0..=60).contains(&i) || (75..=80).contains(&i) || (200..=300).contains(&i);
        assert_eq!(runs(400, set), vec![80.0, 100.0]);
    }

    #[test]
    fn short_runs_are_ignored() {
        assert_eq!(runs(100, |i| i < 50), Vec::<f64>::new());
    }

    #[test]
    fn dashed_horizontal_line_is_found() {
        let mask = dashed_row(300, 80, 40, 20, 260);
        let lines = detect_lines(&mask);
        let clusters = cluster_lines(&lines.horizontal, 40);

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].position, 40);
        assert!(lines.vertical.is_empty());
    }

    #[test]
    fn clustering_merges_close_lines() {
        let lines = vec![
            LineCandidate::new(100, 10.0),
            LineCandidate::new(10, 5.0),
            LineCandidate::new(12, 7.0),
            LineCandidate::new(125, 1.0),
        ];

        let clusters = cluster_lines(&lines, 30);

        assert_eq!(
            clusters,
            vec![LineCandidate::new(11, 12.0), LineCandidate::new(112, 11.0)]
        );
    }

    #[test]
    fn clustering_empty_input_is_empty() {
        assert!(cluster_lines(&[], 40).is_empty());
    }

    #[test]
    fn boundary_line_is_the_longest_in_region() {
        let clusters = vec![
            LineCandidate::new(10, 100.0),
            LineCandidate::new(40, 300.0),
            LineCandidate::new(90, 900.0),
        ];

        assert_eq!(find_boundary_line(&clusters, 0.0, 0.5, 100), Some(40));
        assert_eq!(find_boundary_line(&clusters, 0.6, 0.8, 100), None);
    }

    proptest! {
        #[test]
        fn clusters_never_outnumber_lines(positions in proptest::collection::vec(0i32..2000, 0..40)) {
            let lines = positions
                .iter()
                .map(|&p| LineCandidate::new(p, 1.0))
                .collect::<Vec<_>>();
            let clusters = cluster_lines(&lines, 40);

            prop_assert!(clusters.len() <= lines.len());
            let total: f64 = clusters.iter().map(|c| c.length).sum();
            prop_assert_eq!(total, lines.len() as f64);
        }
    }
}
