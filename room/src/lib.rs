//! Real-time storage contract for the whiteboard.
//!
//! The page never talks to a collaboration backend directly. It sees a
//! [`storage::Room`]: a shared [`storage::Storage`] root whose
//! `canvasObjects` [`live_map::LiveMap`] holds one JSON record per shape, plus
//! an atomic mutation wrapper and the backend's undo/redo history.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`live_map`] | String-keyed map of opaque JSON records |
//! | [`storage`] | Storage root, the [`storage::Room`] trait, and [`storage::StorageError`] |
//! | [`memory`] | [`memory::MemoryRoom`], the in-process room with batch history |

pub mod live_map;
pub mod memory;
pub mod storage;

pub use live_map::LiveMap;
pub use memory::MemoryRoom;
pub use storage::{CANVAS_OBJECTS, Room, Storage, StorageError};
