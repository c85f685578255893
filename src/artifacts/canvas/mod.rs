//! Layers stacked onto one drawing
//!
//! A [`Canvas`] is an ordered list of [`Layer`]s with one of them active.
//! Composition walks the visible layers in order and concatenates their
//! screen-space paths, so earlier layers are drawn first.

pub mod layer;

pub use layer::{Layer, MAX_HISTORY};

use crate::artifacts::area::DrawingArea;
use crate::artifacts::geometry::Path;

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    layers: Vec<Layer>,
    active: Option<usize>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Append a layer and make it active.
    pub fn add_layer(&mut self, layer: Layer) -> usize {
        self.layers.push(layer);
        let index = self.layers.len() - 1;
        self.active = Some(index);
        index
    }

    pub fn select(&mut self, index: usize) -> bool {
        if index < self.layers.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<Layer> {
        if index >= self.layers.len() {
            return None;
        }
        let removed = self.layers.remove(index);

        self.active = match self.active {
            _ if self.layers.is_empty() => None,
            Some(active) if active > index => Some(active - 1),
            Some(active) if active == index => Some(index.min(self.layers.len() - 1)),
            other => other,
        };
        Some(removed)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// The layer eraser and undo act on.
    pub fn active_layer_mut(&mut self) -> Option<&mut Layer> {
        self.active.and_then(|i| self.layers.get_mut(i))
    }

    /// Screen paths of every visible layer, in layer order.
    pub fn compose(&self, area: &DrawingArea) -> Vec<Path> {
        self.layers
            .iter()
            .filter(|layer| layer.visible && !layer.paths.is_empty())
            .flat_map(|layer| layer.screen_paths(area))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::geometry::Point;
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

    fn stroke(name: &str) -> Layer {
        Layer::new(name, vec![vec![Point::new(0, 0), Point::new(10, 10)]])
    }

    #[test]
    fn adding_a_layer_makes_it_active() {
        let mut canvas = Canvas::new();
        canvas.add_layer(stroke("a"));
        canvas.add_layer(stroke("b"));

        assert_eq!(canvas.active_layer_mut().map(|l| l.name.as_str()), Some("b"));
        assert!(canvas.select(0));
        assert!(!canvas.select(5));
        assert_eq!(canvas.active_index(), Some(0));
    }

    #[test]
    fn removing_layers_keeps_active_index_valid() {
        let mut canvas = Canvas::new();
        canvas.add_layer(stroke("a"));
        canvas.add_layer(stroke("b"));
        canvas.add_layer(stroke("c"));

        canvas.remove(2);
        assert_eq!(canvas.active_index(), Some(1));

        canvas.select(1);
        canvas.remove(0);
        assert_eq!(canvas.active_layer_mut().map(|l| l.name.as_str()), Some("b"));

        canvas.remove(0);
        assert_eq!(canvas.active_index(), None);
        assert!(canvas.remove(0).is_none());
    }

    #[test]
    fn compose_skips_hidden_layers() {
        let mut canvas = Canvas::new();
        canvas.add_layer(stroke("a"));
        let hidden = canvas.add_layer(stroke("b"));
        assert!(!canvas.layer_mut(hidden).unwrap().toggle_visibility());

        let paths = canvas.compose(&area());

        assert_eq!(paths.len(), 1);
        assert!(paths[0].iter().all(|p| area().is_inside(p.x, p.y)));
    }
}
