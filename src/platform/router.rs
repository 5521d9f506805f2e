use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::event::{LifecycleEvent, PageType, Phase};
use crate::dom::Document;
use crate::error::Result;

/// A page customization. Handlers are independent of one another; one
/// failing must not suppress the rest.
pub trait PageHandler: Send {
    /// Short name used in dispatch logs.
    fn name(&self) -> &'static str;

    fn on_page_event(&mut self, event: &LifecycleEvent, doc: &mut Document) -> Result<()>;
}

struct Route {
    pages: Vec<PageType>,
    phases: Vec<Phase>,
    handler: Box<dyn PageHandler>,
}

impl Route {
    fn matches(&self, event: &LifecycleEvent) -> bool {
        self.pages.contains(&event.page_type) && self.phases.contains(&event.phase)
    }
}

/// Routing table built once at initialization: page-type set × phase set
/// per handler, dispatched in subscription order.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        pages: &[PageType],
        phases: &[Phase],
        handler: impl PageHandler + 'static,
    ) {
        self.routes.push(Route {
            pages: pages.to_vec(),
            phases: phases.to_vec(),
            handler: Box::new(handler),
        });
    }

    /// Dispatch one lifecycle event to every matching handler, in
    /// subscription order. Handler errors are logged and skipped.
    pub fn dispatch(&mut self, event: &LifecycleEvent, doc: &mut Document) {
        for route in self.routes.iter_mut().filter(|r| r.matches(event)) {
            debug!(handler = route.handler.name(), event = %event, "dispatch");
            if let Err(err) = route.handler.on_page_event(event, doc) {
                warn!(handler = route.handler.name(), event = %event, %err, "page handler failed");
            }
        }
    }

    /// Drive the table from a platform event stream until the sender side
    /// is dropped (navigation away discards everything).
    pub async fn run(&mut self, mut rx: mpsc::UnboundedReceiver<LifecycleEvent>, doc: &mut Document) {
        while let Some(event) = rx.recv().await {
            self.dispatch(&event, doc);
        }
    }
}
