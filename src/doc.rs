//! Diagram model: component parts, templates, placed nodes, connections, and the store.
//!
//! `Part` is the closed set of things a learner can put on a diagram. Each
//! variant carries only the attributes that make sense for it, so a socket
//! never has a resistance and a resistor always has one. `ComponentTemplate`
//! pairs a part with the display name and symbol a palette shows.
//!
//! `DiagramDoc` owns everything that exists on the canvas: the fixed nodes a
//! builder starts with, the components the user has dropped, and the
//! connections drawn between them. It is the only place these collections are
//! mutated.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for a node on the diagram.
pub type NodeId = Uuid;

/// Index of a template in the builder's palette.
pub type TemplateId = usize;

/// A component kind together with its rated value, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Part {
    /// Wall socket / outlet.
    Outlet,
    /// Ground-fault protected outlet.
    GfciOutlet,
    /// Light switch.
    Switch,
    /// Ceiling light or other luminaire.
    Light,
    /// Overcurrent circuit breaker.
    CircuitBreaker,
    /// Main isolating switch of an installation.
    MainSwitch,
    /// Residual current device.
    Rcd,
    /// Resistor rated in ohms.
    Resistor { ohms: f64 },
    /// Capacitor rated in microfarads.
    Capacitor { microfarads: f64 },
    /// Inductor rated in millihenries.
    Inductor { millihenries: f64 },
    /// DC voltage source rated in volts.
    VoltageSource { volts: f64 },
}

/// Fieldless discriminant of [`Part`], used wherever parts are matched by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartKind {
    Outlet,
    GfciOutlet,
    Switch,
    Light,
    CircuitBreaker,
    MainSwitch,
    Rcd,
    Resistor,
    Capacitor,
    Inductor,
    VoltageSource,
}

impl PartKind {
    /// Human-readable plural, used for quota counters and messages.
    #[must_use]
    pub fn plural(self) -> &'static str {
        match self {
            Self::Outlet => "Outlets",
            Self::GfciOutlet => "GFCI",
            Self::Switch => "Switches",
            Self::Light => "Lights",
            Self::CircuitBreaker => "Breakers",
            Self::MainSwitch => "Main switches",
            Self::Rcd => "RCDs",
            Self::Resistor => "Resistors",
            Self::Capacitor => "Capacitors",
            Self::Inductor => "Inductors",
            Self::VoltageSource => "Sources",
        }
    }
}

impl Part {
    #[must_use]
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Outlet => PartKind::Outlet,
            Self::GfciOutlet => PartKind::GfciOutlet,
            Self::Switch => PartKind::Switch,
            Self::Light => PartKind::Light,
            Self::CircuitBreaker => PartKind::CircuitBreaker,
            Self::MainSwitch => PartKind::MainSwitch,
            Self::Rcd => PartKind::Rcd,
            Self::Resistor { .. } => PartKind::Resistor,
            Self::Capacitor { .. } => PartKind::Capacitor,
            Self::Inductor { .. } => PartKind::Inductor,
            Self::VoltageSource { .. } => PartKind::VoltageSource,
        }
    }

    /// Rated value and its unit symbol. `None` for parts without a rating.
    #[must_use]
    pub fn rating(&self) -> Option<(f64, &'static str)> {
        match *self {
            Self::Resistor { ohms } => Some((ohms, "Ω")),
            Self::Capacitor { microfarads } => Some((microfarads, "µF")),
            Self::Inductor { millihenries } => Some((millihenries, "mH")),
            Self::VoltageSource { volts } => Some((volts, "V")),
            _ => None,
        }
    }
}

/// A palette entry: what the user can drag onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTemplate {
    /// Display name shown under the palette symbol.
    pub name: String,
    /// Glyph drawn for the component.
    pub symbol: String,
    /// Kind and default rated value.
    pub part: Part,
}

impl ComponentTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, part: Part) -> Self {
        Self { name: name.into(), symbol: symbol.into(), part }
    }
}

/// A template instance bound to a canvas position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedComponent {
    pub id: NodeId,
    pub template: ComponentTemplate,
    /// Canvas position of the symbol's anchor.
    pub at: Point,
    /// Fixed nodes come from configuration and survive context switches.
    pub fixed: bool,
}

impl PlacedComponent {
    /// Instantiate a user-dropped component with a fresh id.
    #[must_use]
    pub fn dropped(template: ComponentTemplate, at: Point) -> Self {
        Self { id: Uuid::new_v4(), template, at, fixed: false }
    }

    /// Instantiate a fixed node with a fresh id.
    #[must_use]
    pub fn fixed(template: ComponentTemplate, at: Point) -> Self {
        Self { id: Uuid::new_v4(), template, at, fixed: true }
    }

    #[must_use]
    pub fn kind(&self) -> PartKind {
        self.template.part.kind()
    }
}

/// An undirected wire between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Node the drag started on.
    pub start: NodeId,
    /// Node the drag ended on.
    pub end: NodeId,
}

impl Connection {
    /// Build a connection, refusing self-loops.
    #[must_use]
    pub fn between(start: NodeId, end: NodeId) -> Option<Self> {
        (start != end).then_some(Self { start, end })
    }
}

/// In-memory store of everything drawn on the diagram.
#[derive(Debug, Clone, Default)]
pub struct DiagramDoc {
    fixed: Vec<PlacedComponent>,
    placed: Vec<PlacedComponent>,
    connections: Vec<Connection>,
}

impl DiagramDoc {
    /// Create a store seeded with fixed nodes.
    #[must_use]
    pub fn with_fixed(fixed: Vec<PlacedComponent>) -> Self {
        Self { fixed, ..Self::default() }
    }

    /// Append a user-placed component and return its id.
    pub fn place(&mut self, component: PlacedComponent) -> NodeId {
        let id = component.id;
        self.placed.push(component);
        id
    }

    /// Append a connection. Returns false, without storing anything, if either
    /// endpoint is unknown or both endpoints are the same node.
    pub fn connect(&mut self, connection: Connection) -> bool {
        if connection.start == connection.end || self.get(&connection.start).is_none() || self.get(&connection.end).is_none()
        {
            return false;
        }
        self.connections.push(connection);
        true
    }

    /// Look up a fixed or placed node by id.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&PlacedComponent> {
        self.nodes().find(|n| &n.id == id)
    }

    /// Fixed nodes first, then placed components in drop order.
    pub fn nodes(&self) -> impl Iterator<Item = &PlacedComponent> {
        self.fixed.iter().chain(self.placed.iter())
    }

    #[must_use]
    pub fn fixed(&self) -> &[PlacedComponent] {
        &self.fixed
    }

    #[must_use]
    pub fn placed(&self) -> &[PlacedComponent] {
        &self.placed
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of user-placed components of `kind`.
    #[must_use]
    pub fn count_of(&self, kind: PartKind) -> usize {
        self.placed.iter().filter(|c| c.kind() == kind).count()
    }

    /// Whether some connection joins a node of kind `a` to a node whose kind is in `b`.
    #[must_use]
    pub fn has_link(&self, a: PartKind, b: &[PartKind]) -> bool {
        self.connections.iter().any(|conn| {
            let (Some(start), Some(end)) = (self.get(&conn.start), self.get(&conn.end)) else {
                return false;
            };
            (start.kind() == a && b.contains(&end.kind())) || (end.kind() == a && b.contains(&start.kind()))
        })
    }

    /// Drop every placed component and connection. Fixed nodes stay.
    pub fn clear(&mut self) {
        self.placed.clear();
        self.connections.clear();
    }
}
