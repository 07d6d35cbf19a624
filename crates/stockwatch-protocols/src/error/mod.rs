//! Error types for the stockwatch protocol layer.

mod notify;
mod render;

pub use notify::*;
pub use render::*;
