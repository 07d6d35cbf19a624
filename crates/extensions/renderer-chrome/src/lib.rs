//! # Stockwatch Chrome Renderer
//!
//! [`PageRenderer`](stockwatch_protocols::PageRenderer) implementations:
//!
//! - [`ChromeRenderer`]: drives headless Chrome over the DevTools protocol
//! - [`FileRenderer`]: reads a saved HTML document

pub mod cdp;
pub mod file;
pub mod launcher;
pub mod renderer;

pub use file::FileRenderer;
pub use launcher::{ChromeLauncher, ChromeRendererConfig};
pub use renderer::ChromeRenderer;
