//! Interactive diagram builder for the electrical-engineering course widgets.
//!
//! This crate is compiled to WebAssembly and runs in the browser. One builder
//! owns a palette of component templates, the components a learner drops onto
//! the canvas, the wires drawn between them, and the rules that decide whether
//! the diagram is right. The host JavaScript layer only wires DOM events to
//! the engine, shows [`engine::Action::Notify`] messages, and calls
//! [`engine::Engine::render`] when asked to.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Parts, templates, placed components, connections and their store |
//! | [`input`] | Builder mode, the drag state machine, and drag outcomes |
//! | [`hit`] | Hit-testing against palette slots, nodes, and the action button |
//! | [`validate`] | Validation rules, quotas, and reports |
//! | [`analysis`] | Series-sum circuit analysis |
//! | [`config`] | Builder configuration and its consistency checks |
//! | [`presets`] | The wiring, circuit, and installation builders |
//! | [`render`] | Scene rendering |
//! | [`surface`] | Drawing primitives and the canvas implementation |
//! | [`geom`] | Points and rectangles |
//! | [`consts`] | Shared numeric and color constants |

pub mod analysis;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod presets;
pub mod render;
pub mod surface;
pub mod validate;
