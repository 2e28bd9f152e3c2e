//! Ready-made builders for the three diagram exercises of the course.
//!
//! | Preset | Mode | What the learner does |
//! |--------|------|-----------------------|
//! | [`wiring_diagram`] | place | Fit out a room with outlets, lights and switches |
//! | [`electrical_circuit`] | place | Build a series circuit and analyze it |
//! | [`electrical_installation`] | connect | Wire a consumer unit to its final circuits |

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use crate::config::{ActionButton, BuilderConfig, ButtonAction, Context, FixedNode, PaletteLayout};
use crate::doc::{ComponentTemplate, Part, PartKind};
use crate::geom::{Point, Rect};
use crate::input::Mode;
use crate::validate::{Quota, ReportMessages, ValidationRule};

/// Look up a preset by the name the host uses for it.
#[must_use]
pub fn by_name(name: &str) -> Option<BuilderConfig> {
    match name {
        "wiring_diagram" => Some(wiring_diagram()),
        "electrical_circuit" => Some(electrical_circuit()),
        "electrical_installation" => Some(electrical_installation()),
        _ => None,
    }
}

/// Room wiring: drag fittings from the palette into the room outline.
#[must_use]
pub fn wiring_diagram() -> BuilderConfig {
    let quota = |kind, required| Quota { kind, required };
    let room = |name: &str, quotas: Vec<Quota>| Context { name: name.to_string(), quotas };

    BuilderConfig {
        palette: vec![
            ComponentTemplate::new("Outlet", "⏚", Part::Outlet),
            ComponentTemplate::new("Light switch", "⋈", Part::Switch),
            ComponentTemplate::new("Ceiling light", "◯", Part::Light),
            ComponentTemplate::new("GFCI outlet", "⏚⏚", Part::GfciOutlet),
            ComponentTemplate::new("Circuit breaker", "—/—", Part::CircuitBreaker),
        ],
        palette_layout: PaletteLayout {
            origin: Point::new(50.0, 500.0),
            slot_width: 140.0,
            slot_height: 60.0,
            stride: 150.0,
        },
        drop_region: Some(Rect::new(50.0, 50.0, 700.0, 400.0)),
        context_label: "Room".to_string(),
        contexts: vec![
            room(
                "Bedroom",
                vec![quota(PartKind::Outlet, 4), quota(PartKind::Light, 1), quota(PartKind::Switch, 1)],
            ),
            room(
                "Kitchen",
                vec![
                    quota(PartKind::Outlet, 6),
                    quota(PartKind::Light, 2),
                    quota(PartKind::Switch, 2),
                    quota(PartKind::GfciOutlet, 2),
                ],
            ),
            room(
                "Bathroom",
                vec![
                    quota(PartKind::Outlet, 2),
                    quota(PartKind::Light, 1),
                    quota(PartKind::Switch, 1),
                    quota(PartKind::GfciOutlet, 1),
                ],
            ),
            room(
                "Living room",
                vec![quota(PartKind::Outlet, 6), quota(PartKind::Light, 2), quota(PartKind::Switch, 2)],
            ),
        ],
        messages: ReportMessages {
            success: "Room wiring complete!".to_string(),
            failure_heading: "Room wiring incomplete:".to_string(),
        },
        ..BuilderConfig::new("wiring_diagram", Mode::Place)
    }
}

/// Series circuit: place rated parts, chain them, and analyze the totals.
#[must_use]
pub fn electrical_circuit() -> BuilderConfig {
    BuilderConfig {
        palette: vec![
            ComponentTemplate::new("Resistor", "⏛", Part::Resistor { ohms: 100.0 }),
            ComponentTemplate::new("Capacitor", "⏧", Part::Capacitor { microfarads: 100.0 }),
            ComponentTemplate::new("Inductor", "⏝", Part::Inductor { millihenries: 10.0 }),
            ComponentTemplate::new("Voltage Source", "⎓", Part::VoltageSource { volts: 12.0 }),
        ],
        palette_layout: PaletteLayout {
            origin: Point::new(50.0, 50.0),
            slot_width: 100.0,
            slot_height: 80.0,
            stride: 150.0,
        },
        drop_region: Some(Rect::new(50.0, 150.0, 700.0, 400.0)),
        region_fill: "#E0E0E0".to_string(),
        region_border: false,
        button: Some(ActionButton {
            label: "Analyze".to_string(),
            rect: Rect::new(650.0, 50.0, 100.0, 40.0),
            action: ButtonAction::Analyze,
        }),
        chain_placed: true,
        ..BuilderConfig::new("electrical_circuit", Mode::Place)
    }
}

/// Consumer-unit installation: drag wires between fixed devices, then verify.
#[must_use]
pub fn electrical_installation() -> BuilderConfig {
    let node = |name: &str, symbol: &str, part, x, y| FixedNode {
        template: ComponentTemplate::new(name, symbol, part),
        at: Point::new(x, y),
    };

    BuilderConfig {
        fixed: vec![
            node("Main Switch", "⏻", Part::MainSwitch, 100.0, 100.0),
            node("Circuit Breaker", "—/—", Part::CircuitBreaker, 100.0, 200.0),
            node("RCD", "RCD", Part::Rcd, 100.0, 300.0),
            node("Socket", "⏚", Part::Outlet, 300.0, 100.0),
            node("Light", "◯", Part::Light, 300.0, 200.0),
            node("Switch", "⋈", Part::Switch, 300.0, 300.0),
        ],
        instruction: Some("Click and drag to connect components".to_string()),
        rules: vec![
            ValidationRule::link(
                PartKind::MainSwitch,
                [PartKind::CircuitBreaker],
                "Main Switch is not connected to Circuit Breaker",
            ),
            ValidationRule::link(PartKind::CircuitBreaker, [PartKind::Rcd], "Circuit Breaker is not connected to RCD"),
            ValidationRule::link(
                PartKind::Rcd,
                [PartKind::Outlet, PartKind::Light],
                "RCD is not connected to any Socket or Light",
            ),
            ValidationRule::link(PartKind::Switch, [PartKind::Light], "Switch is not connected to a Light"),
        ],
        messages: ReportMessages {
            success: "Installation verified successfully!".to_string(),
            failure_heading: "Installation issues found:".to_string(),
        },
        button: Some(ActionButton {
            label: "Verify".to_string(),
            rect: Rect::new(650.0, 50.0, 100.0, 40.0),
            action: ButtonAction::Verify,
        }),
        ..BuilderConfig::new("electrical_installation", Mode::Connect)
    }
}
