//! Interactive drawing canvas for the collaborative whiteboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! shape model and its storage record format, the interactive surface
//! (selection, drag, scale, marquee, free drawing), the handler functions the
//! page wires to surface events, keyboard shortcuts, and rendering. Handlers
//! return [`handlers::Action`]s; the page is responsible for applying them to
//! shared storage.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`surface`] | Interactive canvas and its gesture state machine |
//! | [`handlers`] | Canvas event handlers and the [`handlers::Action`] type |
//! | [`keys`] | Keyboard shortcuts, copy/paste/delete |
//! | [`shapes`] | Shape factories, property edits, layer ordering |
//! | [`doc`] | Canvas objects, record format, and the object store |
//! | [`attrs`] | Sidebar attributes of the selected shape |
//! | [`input`] | Tools, modifier keys, gesture states |
//! | [`hit`] | Hit-testing against canvas objects |
//! | [`geom`] | Points and rectangles |
//! | [`render`] | Canvas2D scene rendering |
//! | [`engine`] | Browser canvas binding |
//! | [`consts`] | Shape defaults and hit-test sizes |

pub mod attrs;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod handlers;
pub mod hit;
pub mod input;
pub mod keys;
pub mod render;
pub mod shapes;
pub mod surface;
