#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::config::{ActionButton, PaletteLayout};
use crate::doc::{DiagramDoc, NodeId, PlacedComponent, TemplateId};
use crate::geom::Point;

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PaletteSlot(TemplateId),
    Node(NodeId),
    Button,
}

/// Palette slot under `pt`. When slots overlap, the later one wins.
#[must_use]
pub fn palette_hit(pt: Point, layout: &PaletteLayout, slots: usize) -> Option<TemplateId> {
    (0..slots).rev().find(|&i| layout.slot(i).contains(pt))
}

/// Node within `radius` of `pt`. When several qualify, the last in draw order wins.
#[must_use]
pub fn node_hit(pt: Point, doc: &DiagramDoc, radius: f64) -> Option<&PlacedComponent> {
    doc.nodes().filter(|n| n.at.within(pt, radius)).last()
}

/// Every node within `radius` of `pt` other than `exclude`, in draw order.
#[must_use]
pub fn nodes_within(pt: Point, doc: &DiagramDoc, radius: f64, exclude: NodeId) -> Vec<NodeId> {
    doc.nodes()
        .filter(|n| n.id != exclude && n.at.within(pt, radius))
        .map(|n| n.id)
        .collect()
}

/// Whether `pt` lands on the action button.
#[must_use]
pub fn button_hit(pt: Point, button: Option<&ActionButton>) -> bool {
    button.is_some_and(|b| b.rect.contains(pt))
}
