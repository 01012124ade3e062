//! Browser helpers shared by the page and its components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate web-sys glue from page logic. `browser` only exists
//! in hydrated builds; `canvas_input` keeps its pure helpers testable natively.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod canvas_input;
