//! Chrome process management.
//!
//! Each render gets its own Chrome, launched with remote debugging on the
//! configured port and killed when the render ends. A Chrome already
//! listening on that port is reused and left running.

mod launcher_core;
mod launcher_types;

pub use launcher_core::{ChromeLauncher, ChromeProcess};
pub use launcher_types::ChromeRendererConfig;

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
