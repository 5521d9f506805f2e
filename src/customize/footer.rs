use crate::config::FooterConfig;
use crate::dom::probe::class;
use crate::dom::Document;
use crate::error::{Error, Result};
use crate::platform::event::LifecycleEvent;
use crate::platform::router::PageHandler;

/// Replaces the platform footer with the institutional footer markup,
/// appending the chat-widget mount point.
pub struct FooterInjector {
    config: FooterConfig,
}

impl FooterInjector {
    pub fn new(config: FooterConfig) -> Self {
        Self { config }
    }
}

impl PageHandler for FooterInjector {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn on_page_event(&mut self, _event: &LifecycleEvent, doc: &mut Document) -> Result<()> {
        let wrapper = doc
            .first_by_class(class::FOOTER_WRAPPER)
            .ok_or(Error::MissingElement {
                selector: class::FOOTER_WRAPPER,
            })?;

        let markup = format!(
            "{}<div class=\"ask\" id=\"libchat_{}\"></div>",
            self.config.html, self.config.chat_hash
        );
        doc.set_html(wrapper, markup);
        Ok(())
    }
}
