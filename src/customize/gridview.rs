use std::collections::HashSet;

use tracing::debug;

use crate::config::GridViewConfig;
use crate::dom::{probe, Document};
use crate::error::Result;
use crate::platform::event::LifecycleEvent;
use crate::platform::router::PageHandler;

/// Forces grid view on search results for visual resource collections by
/// clicking the platform's grid-view toggle.
pub struct GridViewForcer {
    collections: HashSet<String>,
}

impl GridViewForcer {
    pub fn new(config: GridViewConfig) -> Self {
        Self {
            collections: config.collections,
        }
    }
}

impl PageHandler for GridViewForcer {
    fn name(&self) -> &'static str {
        "grid-view"
    }

    fn on_page_event(&mut self, event: &LifecycleEvent, doc: &mut Document) -> Result<()> {
        let Some(collection) = event.collection_id() else {
            return Ok(());
        };
        if !self.collections.contains(collection) {
            return Ok(());
        }

        match probe::grid_view_button(doc) {
            Some(button) => doc.click(button),
            // Already in grid view, or results not rendered yet.
            None => debug!(collection, "grid-view toggle not present"),
        }
        Ok(())
    }
}
