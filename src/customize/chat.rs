use crate::config::FooterConfig;
use crate::dom::Document;
use crate::error::Result;
use crate::platform::event::LifecycleEvent;
use crate::platform::router::PageHandler;

const CHAT_LOADER_BASE: &str = "//v2.libanswers.com/load_chat.php?hash=";

/// Appends the library chat loader script to the document head.
pub struct ChatLoader {
    src: String,
}

impl ChatLoader {
    pub fn new(config: &FooterConfig) -> Self {
        Self {
            src: format!("{}{}", CHAT_LOADER_BASE, config.chat_hash),
        }
    }
}

impl PageHandler for ChatLoader {
    fn name(&self) -> &'static str {
        "chat-loader"
    }

    fn on_page_event(&mut self, _event: &LifecycleEvent, doc: &mut Document) -> Result<()> {
        // In-place navigations fire ready again; one loader tag is enough.
        if doc.scripts().iter().any(|src| *src == self.src) {
            return Ok(());
        }
        doc.append_script(&self.src);
        Ok(())
    }
}
