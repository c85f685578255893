use std::collections::VecDeque;

use crate::artifacts::area::DrawingArea;
use crate::artifacts::geometry::{Path, Point, is_drawable};
use crate::artifacts::layout::{FRAME_MARGIN, Frame, Transform, place_paths};

/// Undo depth for the eraser.
pub const MAX_HISTORY: usize = 20;

/// An independently transformed set of paths in source space.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub paths: Vec<Path>,
    pub transform: Transform,
    pub visible: bool,
    history: VecDeque<Vec<Path>>,
}

impl Layer {
    pub fn new(name: impl Into<String>, paths: Vec<Path>) -> Self {
        Layer {
            name: name.into(),
            paths,
            transform: Transform::default(),
            visible: true,
            history: VecDeque::new(),
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Screen-space paths of this layer, clipped to `area`.
    pub fn screen_paths(&self, area: &DrawingArea) -> Vec<Path> {
        place_paths(
            &self.paths,
            &self.transform,
            &Frame::for_area(area, FRAME_MARGIN),
            area,
        )
    }

    /// Remove every point whose on-screen position lies within `radius` of
    /// `at`. Paths left with fewer than two points disappear. Returns the
    /// number of points removed.
    pub fn erase_at(&mut self, at: Point, radius: f64, area: &DrawingArea) -> usize {
        let frame = Frame::for_area(area, FRAME_MARGIN);
        let Some(placement) = self.transform.placement(&self.paths, &frame) else {
            return 0;
        };

        self.snapshot();

        let before: usize = self.paths.iter().map(Vec::len).sum();
        self.paths = std::mem::take(&mut self.paths)
            .into_iter()
            .map(|path| {
                path.into_iter()
                    .filter(|p| placement.apply(*p).distance(&at) > radius)
                    .collect::<Path>()
            })
            .filter(is_drawable)
            .collect();
        let after: usize = self.paths.iter().map(Vec::len).sum();

        before - after
    }

    /// Restore the paths as they were before the last erase. `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(paths) => {
                self.paths = paths;
                true
            }
            None => false,
        }
    }

    fn snapshot(&mut self) {
        if self.history.back() == Some(&self.paths) {
            return;
        }
        self.history.push_back(self.paths.clone());
        if self.history.len() > MAX_HISTORY {
            self.history.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn area() -> DrawingArea {
        DrawingArea {
            top: 100,
            left: 50,
            right: 700,
            bottom: 600,
            cutout_left: 500,
            cutout_top: 450,
            top_excl_right: 150,
            top_excl_bottom: 180,
        }
    }

    /// Three horizontal lines, 31 px apart point to point once fitted.
    fn layer() -> Layer {
        let line = |y: i32| (0..=10).map(|x| Point::new(x * 10, y)).collect::<Path>();
        Layer::new("test", vec![line(0), line(50), line(100)])
    }

    #[test]
    fn erasing_far_away_removes_nothing() {
        let mut layer = layer();

        assert_eq!(layer.erase_at(Point::new(0, 0), 10.0, &area()), 0);
        assert_eq!(layer.paths.len(), 3);
    }

    #[test]
    fn erasing_removes_nearby_points_only() {
        let mut layer = layer();
        let middle = layer.screen_paths(&area())[1][5];

        let removed = layer.erase_at(middle, 5.0, &area());

        assert_eq!(removed, 1);
        assert_eq!(layer.paths[1].len(), 10);
        assert_eq!(layer.paths[0].len(), 11);
    }

    #[test]
    fn paths_left_too_short_are_dropped() {
        let mut layer = Layer::new("pair", vec![vec![Point::new(0, 0), Point::new(10, 10)]]);
        let first = layer.screen_paths(&area())[0][0];

        layer.erase_at(first, 3.0, &area());

        assert!(layer.paths.is_empty());
    }

    #[test]
    fn undo_restores_previous_paths() {
        let mut layer = layer();
        let original = layer.paths.clone();
        let middle = layer.screen_paths(&area())[1][5];

        layer.erase_at(middle, 50.0, &area());
        assert_ne!(layer.paths, original);

        assert!(layer.undo());
        assert_eq!(layer.paths, original);
        assert!(!layer.undo());
    }

    #[test]
    fn history_is_capped() {
        let mut layer = layer();

        // erase one point at a time, always the first one still on screen
        for _ in 0..MAX_HISTORY + 5 {
            let first = layer.screen_paths(&area())[0][0];
            assert!(layer.erase_at(first, 1.0, &area()) > 0);
        }

        assert_eq!(layer.history_len(), MAX_HISTORY);
    }

    #[test]
    fn repeated_erase_without_change_does_not_grow_history() {
        let mut layer = layer();

        layer.erase_at(Point::new(0, 0), 5.0, &area());
        layer.erase_at(Point::new(0, 0), 5.0, &area());

        assert_eq!(layer.history_len(), 1);
    }
}
