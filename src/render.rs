//! Rendering: draws the full builder scene onto a [`Surface`].
//!
//! Reads the engine's config, diagram, and drag state and produces pixels; it
//! never mutates application state. The scene is always redrawn from scratch,
//! bottom layer first, with the drag preview on top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{
    BUTTON_FILL, BUTTON_FONT, BUTTON_INK, CHAIN_GAP_PX, COUNTER_FONT, DROP_REGION_BORDER_PX, GHOST_INK, HEADER_FONT,
    INK, LABEL_FONT, NODE_FILL, NODE_LABEL_OFFSET_PX, NODE_SYMBOL_FONT, PALETTE_FILL, RATING_FONT,
    RATING_LABEL_OFFSET_PX, SYMBOL_FONT, WIRE_WIDTH_PX,
};
use crate::engine::EngineCore;
use crate::geom::Point;
use crate::input::{InputState, Mode};
use crate::surface::{Align, Surface, TextStyle};

/// Baseline of the header row.
const HEADER_Y: f64 = 30.0;
/// Left edge of the header row.
const HEADER_X: f64 = 50.0;
/// Left edge of the first quota counter, and the spacing between counters.
const COUNTER_X: f64 = 200.0;
const COUNTER_STEP: f64 = 150.0;

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw<S: Surface>(surface: &mut S, core: &EngineCore) -> Result<(), S::Error> {
    let config = core.config();

    surface.clear(config.width, config.height);
    draw_header(surface, core)?;

    if let Some(region) = config.drop_region {
        if config.region_border {
            surface.fill_rect(region, INK);
            surface.fill_rect(region.inset(DROP_REGION_BORDER_PX), &config.region_fill);
        } else {
            surface.fill_rect(region, &config.region_fill);
        }
    }

    // Connect builders never pick from the palette.
    if config.mode == Mode::Place {
        draw_palette(surface, core)?;
    }

    for node in core.fixed() {
        surface.fill_circle(node.at, config.hit_radius, NODE_FILL)?;
        surface.text(&node.template.symbol, node.at, TextStyle::new(NODE_SYMBOL_FONT, INK, Align::Center))?;
        surface.text(
            &node.template.name,
            node.at.offset(0.0, NODE_LABEL_OFFSET_PX),
            TextStyle::new(LABEL_FONT, INK, Align::Center),
        )?;
    }

    for conn in core.connections() {
        if let (Some(a), Some(b)) = (core.node(&conn.start), core.node(&conn.end)) {
            surface.line(a.at, b.at, INK, WIRE_WIDTH_PX);
        }
    }

    draw_placed(surface, core)?;

    if let Some(button) = &config.button {
        surface.fill_rect(button.rect, BUTTON_FILL);
        let label_at = Point::new(button.rect.center().x, button.rect.y + button.rect.height * 0.625);
        surface.text(&button.label, label_at, TextStyle::new(BUTTON_FONT, BUTTON_INK, Align::Center))?;
    }

    draw_preview(surface, core)
}

fn draw_header<S: Surface>(surface: &mut S, core: &EngineCore) -> Result<(), S::Error> {
    let config = core.config();

    if let Some(context) = core.context() {
        let title = format!("{}: {}", config.context_label, context.name);
        surface.text(&title, Point::new(HEADER_X, HEADER_Y), TextStyle::new(HEADER_FONT, INK, Align::Left))?;

        let mut x = COUNTER_X;
        for tally in core.tally() {
            surface.text(&tally.label(), Point::new(x, HEADER_Y), TextStyle::new(COUNTER_FONT, INK, Align::Left))?;
            x += COUNTER_STEP;
        }
    } else if let Some(instruction) = &config.instruction {
        let at = Point::new(config.width * 0.5, HEADER_Y);
        surface.text(instruction, at, TextStyle::new(HEADER_FONT, INK, Align::Center))?;
    }

    Ok(())
}

fn draw_palette<S: Surface>(surface: &mut S, core: &EngineCore) -> Result<(), S::Error> {
    let layout = core.config().palette_layout;

    for (i, template) in core.config().palette.iter().enumerate() {
        let slot = layout.slot(i);
        surface.fill_rect(slot, PALETTE_FILL);

        let center_x = slot.center().x;
        let symbol_at = Point::new(center_x, slot.y + slot.height * 0.5);
        let name_at = Point::new(center_x, slot.y + slot.height * 0.85);
        surface.text(&template.symbol, symbol_at, TextStyle::new(SYMBOL_FONT, INK, Align::Center))?;
        surface.text(&template.name, name_at, TextStyle::new(LABEL_FONT, INK, Align::Center))?;
    }

    Ok(())
}

fn draw_placed<S: Surface>(surface: &mut S, core: &EngineCore) -> Result<(), S::Error> {
    let chain = core.config().chain_placed;
    let mut previous: Option<Point> = None;

    for comp in core.placed() {
        surface.text(&comp.template.symbol, comp.at, TextStyle::new(SYMBOL_FONT, INK, Align::Center))?;

        if let Some((value, unit)) = comp.template.part.rating() {
            surface.text(
                &format!("{value} {unit}"),
                comp.at.offset(0.0, RATING_LABEL_OFFSET_PX),
                TextStyle::new(RATING_FONT, INK, Align::Center),
            )?;
        }

        if chain && let Some(prev) = previous {
            surface.line(prev.offset(CHAIN_GAP_PX, 0.0), comp.at.offset(-CHAIN_GAP_PX, 0.0), INK, WIRE_WIDTH_PX);
        }
        previous = Some(comp.at);
    }

    Ok(())
}

fn draw_preview<S: Surface>(surface: &mut S, core: &EngineCore) -> Result<(), S::Error> {
    match *core.input() {
        InputState::Idle => Ok(()),
        InputState::Placing { template, cursor, .. } => {
            let Some(template) = core.config().palette.get(template) else {
                return Ok(());
            };
            surface.text(&template.symbol, cursor, TextStyle::new(SYMBOL_FONT, GHOST_INK, Align::Center))
        }
        InputState::Connecting { origin, cursor, .. } => {
            surface.line(origin, cursor, INK, WIRE_WIDTH_PX);
            Ok(())
        }
    }
}
