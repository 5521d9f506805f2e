use crate::config::HeaderConfig;
use crate::dom::{probe, Document, Trigger};
use crate::error::{Error, Result};
use crate::platform::event::LifecycleEvent;
use crate::platform::router::PageHandler;

/// Points the header logo at the library home page instead of the platform
/// landing page.
pub struct LogoRedirect {
    config: HeaderConfig,
}

impl LogoRedirect {
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }
}

impl PageHandler for LogoRedirect {
    fn name(&self) -> &'static str {
        "logo-redirect"
    }

    fn on_page_event(&mut self, _event: &LifecycleEvent, doc: &mut Document) -> Result<()> {
        let anchor = probe::header_logo(doc).ok_or(Error::MissingElement {
            selector: probe::HEADER_LOGO_SELECTOR,
        })?;

        doc.set_attr(anchor, "href", &self.config.logo_url);

        // The platform's SPA router rewrites the anchor on navigation;
        // re-assert the target on every click.
        let url = self.config.logo_url.clone();
        doc.on(anchor, Trigger::Click, move |el| {
            el.attrs.insert("href".to_string(), url.clone());
        });

        Ok(())
    }
}
