//! Page renderer protocol.

use async_trait::async_trait;

use crate::error::RenderError;

/// Renders a URL into its final HTML document.
///
/// Implementations run on-page scripts and let dynamic content settle before
/// returning. Any resources acquired for the render (browser processes, tabs)
/// must be released before `render` returns, on success and on failure.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Render `url` and return the document's outer HTML.
    async fn render(&self, url: &str) -> Result<String, RenderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticRenderer(&'static str);

    #[async_trait]
    impl PageRenderer for StaticRenderer {
        fn name(&self) -> &str {
            "static"
        }

        async fn render(&self, _url: &str) -> Result<String, RenderError> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenRenderer;

    #[async_trait]
    impl PageRenderer for BrokenRenderer {
        fn name(&self) -> &str {
            "broken"
        }

        async fn render(&self, url: &str) -> Result<String, RenderError> {
            Err(RenderError::NavigationFailed(url.to_string()))
        }
    }

    #[tokio::test]
    async fn test_render_through_trait_object() {
        let renderer: Box<dyn PageRenderer> = Box::new(StaticRenderer("<html></html>"));
        assert_eq!(renderer.name(), "static");
        let html = renderer.render("https://example.com").await.unwrap();
        assert_eq!(html, "<html></html>");
    }

    #[tokio::test]
    async fn test_render_failure_propagates() {
        let renderer: Box<dyn PageRenderer> = Box::new(BrokenRenderer);
        let err = renderer.render("https://example.com").await.unwrap_err();
        assert!(matches!(err, RenderError::NavigationFailed(_)));
    }
}
