//! Pointer interaction: drag sessions and drop-target resolution.

pub mod drag;
pub mod resolve;

pub use drag::{DragSession, DragView};

pub(crate) use resolve::resolve_target;
