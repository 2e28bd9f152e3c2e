//! Shared numeric and color constants for the diagram builder.

// ── Hit-testing ─────────────────────────────────────────────────

/// Radius in pixels within which a pointer counts as touching a node.
pub const NODE_HIT_RADIUS_PX: f64 = 20.0;

// ── Layout ──────────────────────────────────────────────────────

/// Default canvas width in CSS pixels.
pub const CANVAS_WIDTH_PX: f64 = 800.0;

/// Default canvas height in CSS pixels.
pub const CANVAS_HEIGHT_PX: f64 = 600.0;

/// Vertical distance from a node's center to its name label.
pub const NODE_LABEL_OFFSET_PX: f64 = 30.0;

/// Vertical distance from a placed symbol to its rating label.
pub const RATING_LABEL_OFFSET_PX: f64 = 30.0;

/// Horizontal gap between a placed symbol and the chain line that leaves it.
pub const CHAIN_GAP_PX: f64 = 20.0;

/// Border thickness of the drop region outline.
pub const DROP_REGION_BORDER_PX: f64 = 2.0;

/// Stroke width for connections, chains and the rubber-band preview.
pub const WIRE_WIDTH_PX: f64 = 2.0;

// ── Fonts ───────────────────────────────────────────────────────

pub const SYMBOL_FONT: &str = "24px Arial";
pub const NODE_SYMBOL_FONT: &str = "16px Arial";
pub const HEADER_FONT: &str = "16px Arial";
pub const COUNTER_FONT: &str = "14px Arial";
pub const LABEL_FONT: &str = "12px Arial";
pub const RATING_FONT: &str = "14px Arial";
pub const BUTTON_FONT: &str = "16px Arial";

// ── Colors ──────────────────────────────────────────────────────

pub const INK: &str = "#000";
pub const PAPER: &str = "#FFF";
pub const PALETTE_FILL: &str = "#F0F0F0";
pub const NODE_FILL: &str = "#F0F0F0";
pub const BUTTON_FILL: &str = "#4CAF50";
pub const BUTTON_INK: &str = "#FFF";
/// Ink for the in-flight drag preview.
pub const GHOST_INK: &str = "rgba(0,0,0,0.5)";
