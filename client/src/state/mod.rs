//! Page state.
//!
//! `whiteboard` is the page controller; `ui` is the reactive snapshot the
//! components render from.

pub mod ui;
pub mod whiteboard;
