use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::analysis::CircuitAnalysis;
use crate::config::{BuilderConfig, ButtonAction, ConfigError, Context};
use crate::doc::{Connection, DiagramDoc, NodeId, PartKind, PlacedComponent};
use crate::geom::Point;
use crate::hit::{self, Hit};
use crate::input::{DragEnd, DragStart, DragUpdate, InputState, Mode};
use crate::render;
use crate::validate::{Quota, Tally, ValidationReport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A component was dropped onto the diagram.
    ComponentPlaced(PlacedComponent),
    /// A wire was drawn.
    Connected(Connection),
    /// Show this message to the user (an `alert`, a toast, ...).
    Notify(String),
    SetCursor(String),
    RenderNeeded,
}

/// Core builder state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    config: BuilderConfig,
    doc: DiagramDoc,
    input: InputState,
    context: usize,
}

impl EngineCore {
    /// Build an engine from a config, seeding the fixed nodes.
    ///
    /// # Errors
    ///
    /// Returns the error from [`BuilderConfig::check`] if the config is inconsistent.
    pub fn new(config: BuilderConfig) -> Result<Self, ConfigError> {
        config.check()?;
        let fixed = config
            .fixed
            .iter()
            .map(|f| PlacedComponent::fixed(f.template.clone(), f.at))
            .collect();
        tracing::debug!(title = %config.title, mode = ?config.mode, "diagram builder created");
        Ok(Self { doc: DiagramDoc::with_fixed(fixed), input: InputState::Idle, context: config.initial_context, config })
    }

    /// Parse a JSON config and build an engine from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed or inconsistent configs.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(BuilderConfig::from_json(json)?)
    }

    // --- Drag gesture ---

    /// Pick up whatever is under the pointer: a palette template in place
    /// mode, a node in connect mode. A miss leaves the current state alone.
    pub fn begin_drag(&mut self, pt: Point) -> DragStart {
        match self.hit_test(pt) {
            Some(Hit::PaletteSlot(template)) => {
                self.input = InputState::Placing { template, origin: pt, cursor: pt };
                tracing::debug!(template, x = pt.x, y = pt.y, "placing drag started");
                DragStart::Placing(template)
            }
            Some(Hit::Node(from)) => {
                let origin = self.doc.get(&from).map_or(pt, |n| n.at);
                self.input = InputState::Connecting { from, origin, cursor: pt };
                tracing::debug!(%from, "connecting drag started");
                DragStart::Connecting(from)
            }
            Some(Hit::Button) | None => DragStart::Missed,
        }
    }

    /// Track the pointer while a drag is in flight.
    pub fn update_drag(&mut self, pt: Point) -> DragUpdate {
        match &mut self.input {
            InputState::Idle => DragUpdate::Idle,
            InputState::Placing { cursor, .. } | InputState::Connecting { cursor, .. } => {
                *cursor = pt;
                DragUpdate::Preview
            }
        }
    }

    /// Release the drag: place, connect, or discard. The drag state is
    /// cleared whatever the outcome.
    pub fn end_drag(&mut self, pt: Point) -> DragEnd {
        match std::mem::take(&mut self.input) {
            InputState::Idle => DragEnd::NotDragging,
            InputState::Placing { template, .. } => self.drop_template(template, pt),
            InputState::Connecting { from, .. } => self.connect_from(from, pt),
        }
    }

    fn drop_template(&mut self, template: usize, pt: Point) -> DragEnd {
        let inside = self.config.drop_region.is_some_and(|r| r.contains(pt));
        let Some(template) = self.config.palette.get(template).filter(|_| inside) else {
            tracing::debug!(x = pt.x, y = pt.y, "drop outside region discarded");
            return DragEnd::Discarded;
        };
        let id = self.doc.place(PlacedComponent::dropped(template.clone(), pt));
        tracing::debug!(%id, name = %template.name, x = pt.x, y = pt.y, "component placed");
        DragEnd::Placed(id)
    }

    fn connect_from(&mut self, from: NodeId, pt: Point) -> DragEnd {
        let mut made = Vec::new();
        for to in hit::nodes_within(pt, &self.doc, self.config.hit_radius, from) {
            if let Some(conn) = Connection::between(from, to) {
                if self.doc.connect(conn) {
                    made.push(conn);
                }
            }
        }

        if made.is_empty() {
            tracing::debug!(%from, "wire released away from any node");
            return DragEnd::Discarded;
        }
        tracing::debug!(%from, count = made.len(), "connections added");
        DragEnd::Connected(made)
    }

    // --- Validation / analysis ---

    /// Run every rule, then the current context's quotas.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let report = ValidationReport::run(&self.config.rules, self.quotas(), &self.doc);
        tracing::info!(title = %self.config.title, failures = report.failures.len(), "diagram validated");
        report
    }

    /// Validate and phrase the outcome for the user.
    #[must_use]
    pub fn verify(&self) -> Action {
        Action::Notify(self.validate().message(&self.config.messages))
    }

    /// Series-sum analysis of the placed components.
    #[must_use]
    pub fn analyze(&self) -> CircuitAnalysis {
        CircuitAnalysis::of(self.doc.placed())
    }

    /// Run the action button if `pt` lands on it.
    #[must_use]
    pub fn click(&self, pt: Point) -> Option<Action> {
        if self.hit_test(pt) != Some(Hit::Button) {
            return None;
        }
        match self.config.button.as_ref()?.action {
            ButtonAction::Verify => Some(self.verify()),
            ButtonAction::Analyze => Some(Action::Notify(self.analyze().report())),
        }
    }

    // --- Context ---

    /// Switch to another context, clearing placed components, connections and
    /// any drag in flight. Returns false, changing nothing, for an unknown index.
    pub fn select_context(&mut self, index: usize) -> bool {
        let Some(context) = self.config.contexts.get(index) else {
            tracing::warn!(index, count = self.config.contexts.len(), "ignoring unknown context");
            return false;
        };
        tracing::info!(index, name = %context.name, "context selected");
        self.context = index;
        self.doc.clear();
        self.input = InputState::Idle;
        true
    }

    // --- Pointer adapters ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if self.begin_drag(pt).started() {
            vec![Action::SetCursor("grabbing".into())]
        } else {
            Vec::new()
        }
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.update_drag(pt) {
            DragUpdate::Idle => Vec::new(),
            DragUpdate::Preview => vec![Action::RenderNeeded],
        }
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = match self.end_drag(pt) {
            DragEnd::NotDragging => return Vec::new(),
            DragEnd::Discarded => Vec::new(),
            DragEnd::Placed(id) => self.doc.get(&id).cloned().map(Action::ComponentPlaced).into_iter().collect(),
            DragEnd::Connected(made) => made.into_iter().map(Action::Connected).collect(),
        };
        actions.push(Action::SetCursor("default".into()));
        actions.push(Action::RenderNeeded);
        actions
    }

    #[must_use]
    pub fn on_click(&self, pt: Point) -> Vec<Action> {
        self.click(pt).into_iter().collect()
    }

    pub fn on_context_selected(&mut self, index: usize) -> Vec<Action> {
        if self.select_context(index) { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Queries ---

    /// What lies under `pt`: the action button first, then a palette slot
    /// (place mode) or a node (connect mode).
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<Hit> {
        if hit::button_hit(pt, self.config.button.as_ref()) {
            return Some(Hit::Button);
        }
        match self.config.mode {
            Mode::Place => hit::palette_hit(pt, &self.config.palette_layout, self.config.palette.len()).map(Hit::PaletteSlot),
            Mode::Connect => hit::node_hit(pt, &self.doc, self.config.hit_radius).map(|n| Hit::Node(n.id)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn placed(&self) -> &[PlacedComponent] {
        self.doc.placed()
    }

    #[must_use]
    pub fn fixed(&self) -> &[PlacedComponent] {
        self.doc.fixed()
    }

    /// Fixed nodes, then placed components.
    pub fn nodes(&self) -> impl Iterator<Item = &PlacedComponent> {
        self.doc.nodes()
    }

    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&PlacedComponent> {
        self.doc.get(id)
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        self.doc.connections()
    }

    #[must_use]
    pub fn count_of(&self, kind: PartKind) -> usize {
        self.doc.count_of(kind)
    }

    /// The current context, if the builder has any.
    #[must_use]
    pub fn context(&self) -> Option<&Context> {
        self.config.contexts.get(self.context)
    }

    #[must_use]
    pub fn context_names(&self) -> Vec<&str> {
        self.config.context_names()
    }

    /// Placed-versus-required counts for the current context.
    #[must_use]
    pub fn tally(&self) -> Vec<Tally> {
        self.quotas().iter().map(|q| Tally::of(*q, &self.doc)).collect()
    }

    fn quotas(&self) -> &[Quota] {
        match self.context() {
            Some(context) => &context.quotas,
            None => &[],
        }
    }
}

/// The browser engine. Wraps `EngineCore` and owns the `<canvas>` element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a builder to a canvas element, sizing the canvas to the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config is inconsistent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(canvas: HtmlCanvasElement, config: BuilderConfig) -> Result<Self, ConfigError> {
        let core = EngineCore::new(config)?;
        canvas.set_width(core.config().width as u32);
        canvas.set_height(core.config().height as u32);
        Ok(Self { canvas, core })
    }

    /// Build from a JSON config, reporting problems as a JS `Error`.
    ///
    /// # Errors
    ///
    /// Returns a `JsValue` wrapping a `js_sys::Error` with the config error's message.
    pub fn from_json(canvas: HtmlCanvasElement, json: &str) -> Result<Self, JsValue> {
        BuilderConfig::from_json(json)
            .and_then(|config| Self::new(canvas, config))
            .map_err(|e| js_sys::Error::new(&e.to_string()).into())
    }

    // --- Delegated input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(pt)
    }

    #[must_use]
    pub fn on_click(&self, pt: Point) -> Vec<Action> {
        self.core.on_click(pt)
    }

    pub fn on_context_selected(&mut self, index: usize) -> Vec<Action> {
        self.core.on_context_selected(index)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&mut ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        self.core.validate()
    }

    #[must_use]
    pub fn context_names(&self) -> Vec<&str> {
        self.core.context_names()
    }
}
