pub mod analytics;
pub mod config;
pub mod customize;
pub mod dom;
pub mod error;
pub mod platform;

// Re-export the pieces a host embeds directly
pub use config::Config;
pub use error::{Error, Result};
pub use platform::router::Router;

use analytics::{PageAnalyticsBinder, Tracker};
use customize::{ChatLoader, FooterInjector, GridViewForcer, LogoRedirect};
use platform::event::{PageType, Phase};

/// Page types that get the institutional chrome. The not-found page keeps
/// the platform's bare rendering.
const CUSTOMIZED_PAGES: [PageType; 9] = [
    PageType::Home,
    PageType::About,
    PageType::Login,
    PageType::Search,
    PageType::CollectionLanding,
    PageType::CollectionSearch,
    PageType::AdvancedSearch,
    PageType::Item,
    PageType::Custom,
];

/// Build the full routing table in the production subscription order.
pub fn install(router: &mut Router, config: &Config, tracker: Tracker) {
    router.subscribe(
        &CUSTOMIZED_PAGES,
        &[Phase::Ready],
        ChatLoader::new(&config.footer),
    );
    router.subscribe(
        &CUSTOMIZED_PAGES,
        &[Phase::Ready],
        FooterInjector::new(config.footer.clone()),
    );
    router.subscribe(
        &CUSTOMIZED_PAGES,
        &[Phase::Ready],
        LogoRedirect::new(config.header.clone()),
    );
    router.subscribe(
        &[PageType::Search, PageType::CollectionSearch],
        &[Phase::Ready],
        GridViewForcer::new(config.gridview.clone()),
    );
    router.subscribe(
        &PageType::ALL,
        &[Phase::Ready, Phase::Update],
        PageAnalyticsBinder::new(tracker),
    );
}
