use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;

use cdm_custom::analytics::{Agent, Tracker};
use cdm_custom::dom::probe::class;
use cdm_custom::dom::{Document, ElementSpec};
use cdm_custom::platform::event::{LifecycleEvent, PageType};
use cdm_custom::{Config, Router};

/// Demo driver: renders a sample item page, fires its lifecycle events the
/// way the platform would, simulates one interaction, and flushes the
/// tracking queue.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading {}", path))?,
        None => Config::default(),
    };

    let (tracker, rx) = Tracker::channel();
    let mut agent = Agent::new(rx);
    Agent::bootstrap(&tracker, &config.tracker);

    let mut router = Router::new();
    cdm_custom::install(&mut router, &config, tracker);

    let mut doc = sample_item_page();

    let (tx, events) = mpsc::unbounded_channel();
    tx.send(LifecycleEvent::ready(PageType::Item))?;
    tx.send(LifecycleEvent::update(PageType::Item))?;
    drop(tx);

    router.run(events, &mut doc).await;

    // A visitor opens the PDF viewer.
    if let Some(button) = doc.first_by_class(class::PDF_EXPAND) {
        doc.click(button);
    }

    let flushed = agent.flush();
    info!(commands = flushed.len(), listeners = doc.listener_count(), "demo complete");
    Ok(())
}

fn sample_item_page() -> Document {
    let mut doc = Document::new("Sample Item - Digital Collections");
    let body = doc.body();

    let header = doc.append(body, ElementSpec::new("div").class(class::HEADER_LOGO_HOLDER));
    doc.append(header, ElementSpec::new("a").attr("href", "/"));

    let root = doc.append(body, ElementSpec::new("div").id("cdm-item-page"));
    doc.append(
        root,
        ElementSpec::new("h1").class(class::ITEM_TITLE).text("Sample Item"),
    );
    doc.append(
        root,
        ElementSpec::new("h2")
            .class(class::ITEM_SECONDARY_TITLE)
            .text("A Demonstration"),
    );
    doc.append(root, ElementSpec::new("button").class(class::PDF_EXPAND));
    for _ in 0..5 {
        doc.append(root, ElementSpec::new("li").class(class::DOWNLOAD_MENU_ITEM));
    }

    doc.append(body, ElementSpec::new("div").class(class::FOOTER_WRAPPER));
    doc
}
