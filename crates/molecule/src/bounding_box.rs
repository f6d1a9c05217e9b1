// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use ultraviolet::Vec2;

/// An axis-aligned rectangle defined by two opposite corners (`min` and `max`).
/// `min.x <= max.x`, `min.y <= max.y` once anything has been enclosed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for BoundingBox {
    /// An empty box: enclosing the first point collapses it onto that point.
    fn default() -> Self {
        Self {
            min: Vec2::broadcast(f32::INFINITY),
            max: Vec2::broadcast(f32::NEG_INFINITY),
        }
    }
}

impl BoundingBox {
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }

    pub fn height(&self) -> f32 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Returns true if the provided `point` is inside this `BoundingBox`.
    pub fn contains(&self, point: Vec2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Grows this `BoundingBox` in-place to ensure that it will contain a given `point`.
    pub fn enclose_point(&mut self, point: Vec2) {
        self.min = self.min.min_by_component(point);
        self.max = self.max.max_by_component(point);
    }
}

// End of File
