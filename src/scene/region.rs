//! Interactive regions and their hit geometry.
//!
//! Geometry lives in normalised device coordinates: `x` and `y` in `[-1, 1]`,
//! `y` pointing up, the same space a picking ray is cast in. Regions are
//! therefore independent of the terminal size.

use ratatui::layout::Rect;
use std::fmt;
use std::sync::Arc;

/// String key naming a clickable region, e.g. `sign_features`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A point in normalised device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ndc {
    pub x: f32,
    pub y: f32,
}

impl Ndc {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Centre of cell `index` of `len` cells along one axis, mapped to `[-1, 1]`.
pub fn cell_centre(index: u16, len: u16) -> f32 {
    (index as f32 + 0.5) / len.max(1) as f32 * 2.0 - 1.0
}

/// Geometry that can be intersected by a picking ray.
pub trait HitShape: Send + Sync + fmt::Debug {
    /// Distance from the viewpoint to the surface under `ray`, or `None`
    /// if the ray misses.
    fn intersect(&self, ray: Ndc) -> Option<f32>;
}

/// Flat axis-aligned quad facing the viewer at a fixed depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignFace {
    pub min: Ndc,
    pub max: Ndc,
    pub depth: f32,
}

impl SignFace {
    pub const fn new(min: Ndc, max: Ndc, depth: f32) -> Self {
        Self { min, max, depth }
    }

    /// Terminal cells whose centres fall inside the quad.
    ///
    /// Uses the same cell-centre projection as the pointer, so a click on
    /// any drawn cell hits the quad.
    pub fn to_rect(&self, area: Rect) -> Rect {
        let span = |lo: f32, hi: f32, len: u16| -> (u16, u16) {
            let mut inside = (0..len).filter(|&i| {
                let centre = cell_centre(i, len);
                centre >= lo && centre <= hi
            });
            match inside.next() {
                Some(first) => {
                    let last = inside.last().unwrap_or(first);
                    (first, last - first + 1)
                }
                None => (0, 0),
            }
        };

        let (x, width) = span(self.min.x, self.max.x, area.width);
        // Rows grow downwards while NDC y points up
        let (y, height) = span(-self.max.y, -self.min.y, area.height);
        Rect::new(area.x + x, area.y + y, width, height)
    }
}

impl HitShape for SignFace {
    fn intersect(&self, ray: Ndc) -> Option<f32> {
        let inside = ray.x >= self.min.x
            && ray.x <= self.max.x
            && ray.y >= self.min.y
            && ray.y <= self.max.y;
        inside.then_some(self.depth)
    }
}

/// A named region registered with the scene.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    pub id: RegionId,
    pub shape: Arc<dyn HitShape>,
}

/// One intersection produced by a ray cast.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub region: RegionId,
    pub distance: f32,
}
