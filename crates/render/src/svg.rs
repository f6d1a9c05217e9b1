// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use molecule::{BondKind, Evaluation};
use ::svg::{
    node::{
        element::{Circle, Element, Group, Line},
        Node as _, Text,
    },
    Document,
};
use ultraviolet::Vec2;

use crate::{RenderError, Renderer};

/// Margin around the drawing, in layout units.
const PADDING: f32 = 0.35;
/// Height of atom labels, in layout units.
const LABEL_SIZE: f32 = 0.22;
/// Radius of a lone-electron dot, in layout units.
const DOT_RADIUS: f32 = 0.022;
/// Distance between the two lines of a double bond, in layout units.
const DOUBLE_BOND_GAP: f32 = 0.06;
/// Offset of the formal-charge annotation from its atom, in layout units.
const CHARGE_OFFSET: Vec2 = Vec2 { x: 0.14, y: 0.14 };

/// Draws the Lewis structure as an SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgRenderer {
    /// Pixels per layout unit.  The unit circle of outer atoms is `2 × scale` pixels wide.
    pub scale: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self { scale: 100.0 }
    }
}

impl SvgRenderer {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Maps a layout point to SVG user space, where y grows downwards.
    fn project(&self, point: Vec2) -> (f32, f32) {
        (point.x * self.scale, -point.y * self.scale)
    }

    fn line(&self, start: Vec2, end: Vec2) -> Line {
        let (x1, y1) = self.project(start);
        let (x2, y2) = self.project(end);
        Line::new()
            .set("x1", x1)
            .set("y1", y1)
            .set("x2", x2)
            .set("y2", y2)
    }

    fn text(&self, at: Vec2, content: &str, size: f32) -> Element {
        let (x, y) = self.project(at);
        let mut text = Element::new("text");
        text.assign("x", x);
        text.assign("y", y);
        text.assign("font-size", size * self.scale);
        text.assign("text-anchor", "middle");
        text.assign("dominant-baseline", "central");
        text.append(Text::new(content));
        text
    }
}

fn charge_label(formal_charge: i32) -> String {
    match formal_charge {
        1 => "+".to_owned(),
        -1 => "\u{2212}".to_owned(),
        n if n > 0 => format!("{n}+"),
        n => format!("{}\u{2212}", -n),
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, evaluation: &Evaluation) -> Result<String, RenderError> {
        let layout = evaluation.layout();

        let mut bonds = Group::new()
            .set("class", "bonds")
            .set("stroke", "black")
            .set("stroke-width", 0.02 * self.scale)
            .set("stroke-linecap", "round");
        for segment in &layout.bonds {
            match segment.kind {
                BondKind::Single => bonds = bonds.add(self.line(segment.start, segment.end)),
                BondKind::Double => {
                    let direction = (segment.end - segment.start).normalized();
                    let offset = Vec2::new(-direction.y, direction.x) * (DOUBLE_BOND_GAP / 2.0);
                    bonds = bonds
                        .add(self.line(segment.start + offset, segment.end + offset))
                        .add(self.line(segment.start - offset, segment.end - offset));
                }
            }
        }

        let mut labels = Group::new()
            .set("class", "atoms")
            .set("font-family", "sans-serif");
        for placement in &layout.atoms {
            labels = labels.add(self.text(placement.pos, placement.label, LABEL_SIZE));
            if placement.formal_charge != 0 {
                labels = labels.add(self.text(
                    placement.pos + CHARGE_OFFSET,
                    &charge_label(placement.formal_charge),
                    LABEL_SIZE * 0.6,
                ));
            }
        }

        let mut dots = Group::new().set("class", "lone-pairs").set("fill", "black");
        for marker in &layout.lone_pairs {
            let (cx, cy) = self.project(marker.pos);
            dots = dots.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", DOT_RADIUS * self.scale),
            );
        }

        let bounds = layout.bounds;
        let (min_x, min_y) = self.project(Vec2::new(bounds.min.x - PADDING, bounds.max.y + PADDING));
        let width = (bounds.width() + 2.0 * PADDING) * self.scale;
        let height = (bounds.height() + 2.0 * PADDING) * self.scale;

        log::debug!(
            "Drawing {} atoms, {} bonds and {} dots on a {width}x{height} canvas",
            layout.atoms.len(),
            layout.bonds.len(),
            layout.lone_pairs.len()
        );

        let document = Document::new()
            .set("viewBox", (min_x, min_y, width, height))
            .set("width", width)
            .set("height", height)
            .add(bonds)
            .add(labels)
            .add(dots);

        Ok(document.to_string())
    }
}


// End of File
