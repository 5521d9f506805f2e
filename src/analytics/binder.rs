//! Page Analytics Binder.
//!
//! Translates each lifecycle event into the per-page command sequence and,
//! on item-page ready, wires interaction listeners to whichever optional
//! media/download/print elements this page happens to render.

use tracing::debug;

use super::command::{EventCategory, TrackerCommand};
use super::tracker::Tracker;
use crate::dom::probe::{self, class};
use crate::dom::{Document, NodeId, Trigger};
use crate::error::Result;
use crate::platform::event::{LifecycleEvent, PageType, Phase};
use crate::platform::router::PageHandler;

/// Probe table for the single-element media controls. Menus and button
/// groups need count-dependent labels and are handled separately.
const MEDIA_PROBES: [(&str, Trigger, EventCategory, &str); 4] = [
    (class::PDF_EXPAND, Trigger::Click, EventCategory::Open, "PDF"),
    (class::IMAGE_EXPAND, Trigger::Click, EventCategory::Open, "Image"),
    (class::VIDEO_PLAYER, Trigger::Play, EventCategory::Play, "Video"),
    (class::AUDIO_PLAYER, Trigger::Play, EventCategory::Play, "Audio"),
];

/// Positional labels for the five-entry download-size menu.
const DOWNLOAD_SIZES: [&str; 5] = ["Small", "Medium", "Large", "Extra Large", "Full Size"];

pub struct PageAnalyticsBinder {
    tracker: Tracker,
}

impl PageAnalyticsBinder {
    pub fn new(tracker: Tracker) -> Self {
        Self { tracker }
    }

    /// The base sequence, enqueued on every ready and update event:
    /// per-page reset, page view with metadata, content rescan, link
    /// tracking.
    fn enqueue_page_view(&self, event: &LifecycleEvent, doc: &Document) {
        self.tracker
            .enqueue(TrackerCommand::DeleteCustomVariables { scope: "page" });
        self.tracker
            .enqueue(TrackerCommand::SetDocumentTitle(doc.title().to_string()));
        self.tracker.enqueue(TrackerCommand::SetGenerationTimeMs(0));
        self.tracker.enqueue(TrackerCommand::TrackPageView);

        match probe::content_root(doc, event.page_type) {
            Some(root) => self
                .tracker
                .enqueue(TrackerCommand::TrackContentImpressionsWithinNode(root)),
            None => self
                .tracker
                .enqueue(TrackerCommand::TrackAllContentImpressions),
        }

        self.tracker.enqueue(TrackerCommand::EnableLinkTracking);
    }

    /// Attach one listener that enqueues a single event tuple on `trigger`.
    fn attach(
        &self,
        doc: &mut Document,
        node: NodeId,
        trigger: Trigger,
        category: EventCategory,
        action: &str,
        title: &str,
    ) {
        let tracker = self.tracker.clone();
        let action = action.to_string();
        let name = title.to_string();
        doc.on(node, trigger, move |_el| {
            tracker.enqueue(TrackerCommand::TrackEvent {
                category,
                action: action.clone(),
                name: name.clone(),
            });
        });
    }

    /// Item pages only: wire interaction listeners for every optional
    /// element present. Absence of any element is a normal branch, and each
    /// same-class element gets its own listener.
    fn bind_item_listeners(&self, doc: &mut Document) -> Result<()> {
        let title = probe::composite_title(doc)?;

        for (class, trigger, category, action) in MEDIA_PROBES {
            if let Some(nodes) = probe::optional(doc, class) {
                for node in nodes {
                    self.attach(doc, node, trigger, category, action, &title);
                }
            }
        }

        if let Some(entries) = probe::optional(doc, class::DOWNLOAD_MENU_ITEM) {
            match entries.len() {
                5 => {
                    for (entry, label) in entries.iter().zip(DOWNLOAD_SIZES) {
                        self.attach(
                            doc,
                            *entry,
                            Trigger::Click,
                            EventCategory::Download,
                            label,
                            &title,
                        );
                    }
                }
                1 => self.attach(
                    doc,
                    entries[0],
                    Trigger::Click,
                    EventCategory::Download,
                    "Item",
                    &title,
                ),
                count => debug!(count, "download menu has an unhandled entry count"),
            }
        }

        if let Some(buttons) = probe::optional(doc, class::DOWNLOAD_BUTTON) {
            for button in buttons {
                self.attach(
                    doc,
                    button,
                    Trigger::Click,
                    EventCategory::Download,
                    "Object",
                    &title,
                );
            }
        }

        match probe::optional(doc, class::PRINT_MENU_ITEM) {
            Some(entries) if entries.len() == 2 => {
                self.attach(doc, entries[0], Trigger::Click, EventCategory::Print, "Item", &title);
                self.attach(doc, entries[1], Trigger::Click, EventCategory::Print, "Object", &title);
            }
            Some(entries) => debug!(count = entries.len(), "print menu has an unhandled entry count"),
            // Plain print buttons are only probed when no menu exists.
            None => {
                if let Some(buttons) = probe::optional(doc, class::PRINT_BUTTON) {
                    for button in buttons {
                        self.attach(
                            doc,
                            button,
                            Trigger::Click,
                            EventCategory::Print,
                            "Object",
                            &title,
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

impl PageHandler for PageAnalyticsBinder {
    fn name(&self) -> &'static str {
        "analytics"
    }

    fn on_page_event(&mut self, event: &LifecycleEvent, doc: &mut Document) -> Result<()> {
        self.enqueue_page_view(event, doc);

        // Listeners are attached on ready only; updates re-render in place
        // and re-attaching would double-fire every interaction.
        if event.page_type == PageType::Item && event.phase == Phase::Ready {
            self.bind_item_listeners(doc)?;
        }

        Ok(())
    }
}
