//! Chrome DevTools Protocol (CDP) client.
//!
//! Just enough of the protocol to load a page and read its DOM: browser
//! endpoint discovery, target creation, per-page sessions, `Runtime.evaluate`
//! and `DOM.querySelector`.
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://localhost:9222").await?;
//! let page = client.new_page().await?;
//! page.navigate("https://example.com", Duration::from_secs(30)).await?;
//! let html = page.get_content().await?;
//! client.close_page(page.target_id()).await?;
//! ```

mod client;
mod error;
mod protocol;
mod session;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
