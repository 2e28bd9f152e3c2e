//! Input model: builder mode, the drag state machine, and drag outcomes.
//!
//! A builder is either a *place* builder (drag templates out of a palette and
//! drop them onto the canvas) or a *connect* builder (drag from one node to
//! another to draw a wire). `InputState` is the gesture tracked between
//! pointer-down and pointer-up; it holds the single in-flight item and nothing
//! else.
//!
//! Every drag operation reports what it did through an outcome enum. A miss is
//! never an error, but it is always distinguishable from a hit.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Connection, NodeId, TemplateId};
use crate::geom::Point;

/// What a pointer-down is allowed to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Drag templates from the palette into the drop region.
    #[default]
    Place,
    /// Drag from one node to another to connect them.
    Connect,
}

/// The gesture state machine: `Idle -> (Placing | Connecting) -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A palette template is being carried towards the drop region.
    Placing {
        /// Palette index of the template in flight.
        template: TemplateId,
        /// Where the pointer went down.
        origin: Point,
        /// Latest pointer position, for the ghost preview.
        cursor: Point,
    },
    /// A wire is being pulled out of an existing node.
    Connecting {
        /// Node the wire starts from.
        from: NodeId,
        /// Center of the origin node; the rubber band is drawn from here.
        origin: Point,
        /// Latest pointer position, for the rubber band.
        cursor: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Pointer position of the in-flight drag, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Placing { cursor, .. } | Self::Connecting { cursor, .. } => Some(*cursor),
        }
    }
}

/// Outcome of `begin_drag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    /// Nothing under the pointer; no drag started.
    Missed,
    /// A palette template was picked up.
    Placing(TemplateId),
    /// A wire was started from this node.
    Connecting(NodeId),
}

impl DragStart {
    #[must_use]
    pub fn started(&self) -> bool {
        !matches!(self, Self::Missed)
    }
}

/// Outcome of `update_drag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// No drag in flight; nothing changed.
    Idle,
    /// The preview moved; the scene needs a redraw.
    Preview,
}

/// Outcome of `end_drag`.
#[derive(Debug, Clone, PartialEq)]
pub enum DragEnd {
    /// There was no drag to end.
    NotDragging,
    /// The drag ended without effect: dropped outside the region, or released
    /// away from every other node.
    Discarded,
    /// A new component was placed.
    Placed(NodeId),
    /// One connection per node under the release point. Never empty.
    Connected(Vec<Connection>),
}
