use std::str::FromStr;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use cdm_custom::dom::Document;
use cdm_custom::error::{Error, Result};
use cdm_custom::platform::event::{LifecycleEvent, PageType, Phase};
use cdm_custom::platform::router::{PageHandler, Router};

/// Test double that records each dispatch, optionally failing.
struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<&'static str>>>,
    fail: bool,
}

impl Recorder {
    fn new(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            name,
            log: log.clone(),
            fail: false,
        }
    }

    fn failing(name: &'static str, log: &Arc<Mutex<Vec<&'static str>>>) -> Self {
        Self {
            name,
            log: log.clone(),
            fail: true,
        }
    }
}

impl PageHandler for Recorder {
    fn name(&self) -> &'static str {
        self.name
    }

    fn on_page_event(&mut self, _event: &LifecycleEvent, _doc: &mut Document) -> Result<()> {
        self.log.lock().unwrap().push(self.name);
        if self.fail {
            return Err(Error::MissingElement { selector: "test" });
        }
        Ok(())
    }
}

#[test]
fn handlers_fire_in_subscription_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut router = Router::new();
    router.subscribe(&PageType::ALL, &[Phase::Ready], Recorder::new("first", &log));
    router.subscribe(&PageType::ALL, &[Phase::Ready], Recorder::new("second", &log));
    router.subscribe(&PageType::ALL, &[Phase::Ready], Recorder::new("third", &log));

    let mut doc = Document::new("Digital Collections");
    router.dispatch(&LifecycleEvent::ready(PageType::Home), &mut doc);

    assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
}

#[test]
fn dispatch_filters_on_page_type_and_phase() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut router = Router::new();
    router.subscribe(
        &[PageType::Search],
        &[Phase::Ready],
        Recorder::new("search-ready", &log),
    );
    router.subscribe(
        &[PageType::Item],
        &[Phase::Ready, Phase::Update],
        Recorder::new("item-any", &log),
    );

    let mut doc = Document::new("Digital Collections");
    router.dispatch(&LifecycleEvent::ready(PageType::Home), &mut doc);
    router.dispatch(&LifecycleEvent::update(PageType::Search), &mut doc);
    router.dispatch(&LifecycleEvent::ready(PageType::Search), &mut doc);
    router.dispatch(&LifecycleEvent::update(PageType::Item), &mut doc);

    assert_eq!(*log.lock().unwrap(), vec!["search-ready", "item-any"]);
}

#[test]
fn handler_error_does_not_suppress_later_handlers() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut router = Router::new();
    router.subscribe(&PageType::ALL, &[Phase::Ready], Recorder::failing("broken", &log));
    router.subscribe(&PageType::ALL, &[Phase::Ready], Recorder::new("after", &log));

    let mut doc = Document::new("Digital Collections");
    router.dispatch(&LifecycleEvent::ready(PageType::About), &mut doc);

    assert_eq!(*log.lock().unwrap(), vec!["broken", "after"]);
}

#[tokio::test]
async fn run_drains_the_event_stream_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut router = Router::new();
    router.subscribe(&[PageType::Home], &[Phase::Ready], Recorder::new("home", &log));
    router.subscribe(&[PageType::Item], &[Phase::Ready], Recorder::new("item", &log));

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(LifecycleEvent::ready(PageType::Home)).unwrap();
    tx.send(LifecycleEvent::ready(PageType::Item)).unwrap();
    tx.send(LifecycleEvent::ready(PageType::Home)).unwrap();
    drop(tx);

    let mut doc = Document::new("Digital Collections");
    router.run(rx, &mut doc).await;

    assert_eq!(*log.lock().unwrap(), vec!["home", "item", "home"]);
}

#[test]
fn event_names_round_trip() {
    for page in PageType::ALL {
        let ready = LifecycleEvent::ready(page);
        let parsed = LifecycleEvent::from_str(&ready.name()).unwrap();
        assert_eq!(parsed.page_type, page);
        assert_eq!(parsed.phase, Phase::Ready);
    }

    let parsed = LifecycleEvent::from_str("cdm-collection-search-page:update").unwrap();
    assert_eq!(parsed.page_type, PageType::CollectionSearch);
    assert_eq!(parsed.phase, Phase::Update);
}

#[test]
fn unknown_event_names_are_rejected() {
    for name in [
        "cdm-gallery-page:ready",
        "cdm-item-page:destroyed",
        // About pages never update in place
        "cdm-about-page:update",
        "not-an-event",
    ] {
        assert!(
            matches!(LifecycleEvent::from_str(name), Err(Error::UnknownEvent(_))),
            "{} should not parse",
            name
        );
    }
}

#[test]
fn collection_id_comes_from_the_detail_payload() {
    let event = LifecycleEvent::ready(PageType::Search)
        .with_detail(serde_json::json!({ "collectionId": "palmer" }));
    assert_eq!(event.collection_id(), Some("palmer"));

    assert_eq!(LifecycleEvent::ready(PageType::Search).collection_id(), None);

    let event = LifecycleEvent::ready(PageType::Search)
        .with_detail(serde_json::json!({ "page": 2 }));
    assert_eq!(event.collection_id(), None);
}
