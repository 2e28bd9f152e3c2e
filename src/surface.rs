//! The drawing primitives the builder needs, and their browser implementation.
//!
//! Rendering code talks to a [`Surface`] rather than to the canvas directly so
//! the full scene can be drawn into a recorder in native tests. The browser
//! surface is [`web_sys::CanvasRenderingContext2d`]; its fallible calls
//! propagate `JsValue` errors the same way web-sys does.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geom::{Point, Rect};

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Font, color and alignment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle<'a> {
    pub font: &'a str,
    pub color: &'a str,
    pub align: Align,
}

impl<'a> TextStyle<'a> {
    #[must_use]
    pub fn new(font: &'a str, color: &'a str, align: Align) -> Self {
        Self { font, color, align }
    }
}

/// A 2D drawing target.
pub trait Surface {
    type Error;

    /// Erase a `width` x `height` area from the origin.
    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, rect: Rect, color: &str);

    /// # Errors
    ///
    /// Returns the surface's error if the arc cannot be traced.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;

    fn line(&mut self, from: Point, to: Point, color: &str, width: f64);

    /// # Errors
    ///
    /// Returns the surface's error if the text cannot be drawn.
    fn text(&mut self, text: &str, at: Point, style: TextStyle<'_>) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, rect.x, rect.y, rect.width, rect.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU)?;
        self.set_fill_style_str(color);
        self.fill();
        Ok(())
    }

    fn line(&mut self, from: Point, to: Point, color: &str, width: f64) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.stroke();
    }

    fn text(&mut self, text: &str, at: Point, style: TextStyle<'_>) -> Result<(), JsValue> {
        self.set_font(style.font);
        self.set_fill_style_str(style.color);
        self.set_text_align(style.align.as_str());
        self.fill_text(text, at.x, at.y)
    }
}
