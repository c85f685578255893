use bitflags::bitflags;
use std::fmt;

use crate::artifacts::area::DrawingArea;
use crate::artifacts::geometry::{Bounds, Path, Point};

/// Distance kept from the usable rectangle when fitting a layer.
pub const FRAME_MARGIN: i32 = 20;

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct Flip: u8 {
        const NONE = 0b00;
        const HORIZONTAL = 0b01;
        const VERTICAL = 0b10;
    }
}

impl fmt::Debug for Flip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(Flip::HORIZONTAL) {
            flags.push("H");
        }
        if self.contains(Flip::VERTICAL) {
            flags.push("V");
        }
        write!(f, "Flip({})", flags.join("|"))
    }
}

impl Flip {
    pub fn from_axes(horizontal: bool, vertical: bool) -> Self {
        let mut flip = Flip::NONE;
        flip.set(Flip::HORIZONTAL, horizontal);
        flip.set(Flip::VERTICAL, vertical);
        flip
    }
}

/// The rectangle a layer is fitted into: the part of the drawing area clear
/// of both exclusions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn for_area(area: &DrawingArea, margin: i32) -> Self {
        let (x1, y1, x2, y2) = area.usable_rect(margin);
        Frame {
            left: f64::from(x1),
            top: f64::from(y1),
            width: f64::from(x2 - x1),
            height: f64::from(y2 - y1),
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// User adjustments on top of the automatic fit. The identity transform
/// fits the layer's paths into the frame, centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Screen pixels added after fitting
    pub offset_x: f64,
    pub offset_y: f64,
    /// Multipliers of the fitted scale
    pub scale_x: f64,
    pub scale_y: f64,
    /// Degrees, clockwise on screen
    pub rotation: f64,
    pub flip: Flip,
}

impl Default for Transform {
    fn default() -> Self {
        Transform {
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            flip: Flip::NONE,
        }
    }
}

impl Transform {
    /// Resolve this transform against concrete paths and a frame. `None` when
    /// the paths have no points.
    pub fn placement(&self, paths: &[Path], frame: &Frame) -> Option<Placement> {
        let bounds = Bounds::of(paths)?;
        let base_scale = (frame.width / bounds.width()).min(frame.height / bounds.height());

        Some(Placement {
            transform: *self,
            source_center: bounds.center(),
            base_scale,
            target_center: frame.center(),
        })
    }
}

/// A [`Transform`] bound to the extent of one layer, ready to map points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    transform: Transform,
    source_center: (f64, f64),
    base_scale: f64,
    target_center: (f64, f64),
}

impl Placement {
    pub fn apply(&self, point: Point) -> Point {
        let t = &self.transform;
        let mut x = f64::from(point.x) - self.source_center.0;
        let mut y = f64::from(point.y) - self.source_center.1;

        if t.flip.contains(Flip::HORIZONTAL) {
            x = -x;
        }
        if t.flip.contains(Flip::VERTICAL) {
            y = -y;
        }

        if t.rotation != 0.0 {
            let (sin, cos) = t.rotation.to_radians().sin_cos();
            (x, y) = (x * cos - y * sin, x * sin + y * cos);
        }

        x *= self.base_scale * t.scale_x;
        y *= self.base_scale * t.scale_y;

        Point::from_f64(
            x + self.target_center.0 + t.offset_x,
            y + self.target_center.1 + t.offset_y,
        )
    }
}
