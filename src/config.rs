//! Builder configuration: what a diagram builder offers and how it is laid out.
//!
//! A `BuilderConfig` is plain data. It can be written in Rust (see
//! [`crate::presets`]) or loaded from JSON with [`BuilderConfig::from_json`].
//! Either way it goes through [`BuilderConfig::check`] before an engine is
//! built from it, so the engine never has to second-guess its own layout.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, NODE_HIT_RADIUS_PX};
use crate::doc::{ComponentTemplate, PartKind, TemplateId};
use crate::geom::{Point, Rect};
use crate::input::Mode;
use crate::validate::{Quota, ReportMessages, ValidationRule};

/// Error returned when a configuration cannot drive a builder.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed into a `BuilderConfig`.
    #[error("invalid builder config: {0}")]
    Json(#[from] serde_json::Error),
    /// Canvas dimensions must be positive and finite.
    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
    /// A place builder needs something to place.
    #[error("place mode needs at least one palette template")]
    EmptyPalette,
    /// A place builder needs somewhere to drop.
    #[error("place mode needs a drop region")]
    MissingDropRegion,
    /// Palette slots must have a positive size and stride.
    #[error("palette slots must have positive size and stride")]
    InvalidPaletteLayout,
    /// A connect builder needs at least two nodes to wire together.
    #[error("connect mode needs at least two fixed nodes, found {found}")]
    TooFewNodes { found: usize },
    /// The hit radius must be positive.
    #[error("hit radius must be positive, got {0}")]
    InvalidHitRadius(f64),
    /// `initial_context` points past the context list.
    #[error("initial context {index} is out of range ({count} contexts)")]
    UnknownInitialContext { index: usize, count: usize },
    /// A rule or quota names a kind that can never be satisfied: link kinds
    /// need a template or fixed node, quota kinds need a palette template.
    #[error("{kind:?} is referenced but no template or fixed node provides it")]
    UnreachableKind { kind: PartKind },
}

/// Geometry of the palette row: equally sized slots laid out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteLayout {
    /// Top-left corner of the first slot.
    pub origin: Point,
    pub slot_width: f64,
    pub slot_height: f64,
    /// Horizontal distance between the left edges of consecutive slots.
    pub stride: f64,
}

impl PaletteLayout {
    /// Bounding box of the slot at `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot(&self, index: TemplateId) -> Rect {
        Rect::new(self.origin.x + index as f64 * self.stride, self.origin.y, self.slot_width, self.slot_height)
    }
}

impl Default for PaletteLayout {
    fn default() -> Self {
        Self { origin: Point::new(50.0, 500.0), slot_width: 140.0, slot_height: 60.0, stride: 150.0 }
    }
}

/// A node that exists before the user does anything, e.g. the consumer unit of an installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedNode {
    pub template: ComponentTemplate,
    pub at: Point,
}

/// A named scenario, such as a room, with its placement quotas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub name: String,
    #[serde(default)]
    pub quotas: Vec<Quota>,
}

/// What the action button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonAction {
    /// Run the validation rules and report the outcome.
    Verify,
    /// Run the series-sum circuit analysis and report it.
    Analyze,
}

/// An on-canvas push button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub rect: Rect,
    pub action: ButtonAction,
}

/// Everything that defines one diagram builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Name of the widget, used in logs.
    pub title: String,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub mode: Mode,
    /// Templates offered in the palette, in slot order.
    #[serde(default)]
    pub palette: Vec<ComponentTemplate>,
    #[serde(default)]
    pub palette_layout: PaletteLayout,
    /// Where dropped templates are accepted. Required in place mode.
    #[serde(default)]
    pub drop_region: Option<Rect>,
    /// Fill of the drop region inside its border.
    #[serde(default = "default_region_fill")]
    pub region_fill: String,
    /// Outline the drop region with a thin ink border.
    #[serde(default = "default_region_border")]
    pub region_border: bool,
    #[serde(default)]
    pub fixed: Vec<FixedNode>,
    /// Pointer distance within which a node counts as hit.
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f64,
    /// Header line drawn when there is no context to show.
    #[serde(default)]
    pub instruction: Option<String>,
    /// Word shown before the context name in the header, e.g. `Room`.
    #[serde(default = "default_context_label")]
    pub context_label: String,
    #[serde(default)]
    pub contexts: Vec<Context>,
    #[serde(default)]
    pub initial_context: usize,
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
    #[serde(default)]
    pub messages: ReportMessages,
    #[serde(default)]
    pub button: Option<ActionButton>,
    /// Draw a wire from each placed component to the previous one.
    #[serde(default)]
    pub chain_placed: bool,
}

/// Strictly positive and finite; rejects NaN.
fn is_positive(value: f64) -> bool {
    value > 0.0 && value.is_finite()
}

fn default_width() -> f64 {
    CANVAS_WIDTH_PX
}

fn default_height() -> f64 {
    CANVAS_HEIGHT_PX
}

fn default_hit_radius() -> f64 {
    NODE_HIT_RADIUS_PX
}

fn default_region_fill() -> String {
    crate::consts::PAPER.to_string()
}

fn default_region_border() -> bool {
    true
}

fn default_context_label() -> String {
    "Context".to_string()
}

impl BuilderConfig {
    /// An empty config with default geometry; fill in the palette or fixed nodes before use.
    #[must_use]
    pub fn new(title: impl Into<String>, mode: Mode) -> Self {
        Self {
            title: title.into(),
            width: CANVAS_WIDTH_PX,
            height: CANVAS_HEIGHT_PX,
            mode,
            palette: Vec::new(),
            palette_layout: PaletteLayout::default(),
            drop_region: None,
            region_fill: default_region_fill(),
            region_border: true,
            fixed: Vec::new(),
            hit_radius: NODE_HIT_RADIUS_PX,
            instruction: None,
            context_label: default_context_label(),
            contexts: Vec::new(),
            initial_context: 0,
            rules: Vec::new(),
            messages: ReportMessages::default(),
            button: None,
            chain_placed: false,
        }
    }

    /// Parse and check a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or any error
    /// [`BuilderConfig::check`] reports.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Verify the config is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(is_positive(self.width) && is_positive(self.height)) {
            return Err(ConfigError::InvalidCanvas { width: self.width, height: self.height });
        }
        if !is_positive(self.hit_radius) {
            return Err(ConfigError::InvalidHitRadius(self.hit_radius));
        }

        match self.mode {
            Mode::Place => {
                if self.palette.is_empty() {
                    return Err(ConfigError::EmptyPalette);
                }
                if self.drop_region.is_none() {
                    return Err(ConfigError::MissingDropRegion);
                }
                let layout = &self.palette_layout;
                if !(is_positive(layout.slot_width) && is_positive(layout.slot_height) && is_positive(layout.stride)) {
                    return Err(ConfigError::InvalidPaletteLayout);
                }
            }
            Mode::Connect => {
                if self.fixed.len() < 2 {
                    return Err(ConfigError::TooFewNodes { found: self.fixed.len() });
                }
            }
        }

        let count = self.contexts.len();
        if self.initial_context >= count.max(1) {
            return Err(ConfigError::UnknownInitialContext { index: self.initial_context, count });
        }

        // Links may end on fixed nodes; quotas only ever count placed components.
        let available = self.available_kinds();
        let placeable = self.placeable_kinds();
        for rule in &self.rules {
            let pool = match rule {
                ValidationRule::Link { .. } => &available,
                ValidationRule::Quota { .. } => &placeable,
            };
            if let Some(kind) = rule.kinds().into_iter().find(|k| !pool.contains(k)) {
                return Err(ConfigError::UnreachableKind { kind });
            }
        }
        for quota in self.contexts.iter().flat_map(|c| &c.quotas) {
            if !placeable.contains(&quota.kind) {
                return Err(ConfigError::UnreachableKind { kind: quota.kind });
            }
        }

        Ok(())
    }

    /// Part kinds the user can drop: the palette's, in place mode only.
    #[must_use]
    pub fn placeable_kinds(&self) -> HashSet<PartKind> {
        match self.mode {
            Mode::Place => self.palette.iter().map(|t| t.part.kind()).collect(),
            Mode::Connect => HashSet::new(),
        }
    }

    /// Part kinds that can ever be on the diagram: placeable kinds plus fixed nodes.
    #[must_use]
    pub fn available_kinds(&self) -> HashSet<PartKind> {
        let mut kinds = self.placeable_kinds();
        kinds.extend(self.fixed.iter().map(|f| f.template.part.kind()));
        kinds
    }

    /// Names of the contexts, in selection order, for the host's dropdown.
    #[must_use]
    pub fn context_names(&self) -> Vec<&str> {
        self.contexts.iter().map(|c| c.name.as_str()).collect()
    }
}
