use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::Error;

/// Page types the platform renders. One lifecycle event family per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Home,
    About,
    Login,
    Search,
    CollectionLanding,
    CollectionSearch,
    AdvancedSearch,
    Item,
    Custom,
    NotFound,
}

impl PageType {
    pub const ALL: [PageType; 10] = [
        PageType::Home,
        PageType::About,
        PageType::Login,
        PageType::Search,
        PageType::CollectionLanding,
        PageType::CollectionSearch,
        PageType::AdvancedSearch,
        PageType::Item,
        PageType::Custom,
        PageType::NotFound,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PageType::Home => "home",
            PageType::About => "about",
            PageType::Login => "login",
            PageType::Search => "search",
            PageType::CollectionLanding => "collection-landing",
            PageType::CollectionSearch => "collection-search",
            PageType::AdvancedSearch => "advanced-search",
            PageType::Item => "item",
            PageType::Custom => "custom",
            PageType::NotFound => "notfound",
        }
    }

    /// The platform fires `:update` (in-place re-render) only for these.
    pub fn supports_update(&self) -> bool {
        matches!(
            self,
            PageType::Home
                | PageType::Search
                | PageType::CollectionSearch
                | PageType::AdvancedSearch
                | PageType::Item
        )
    }

    /// Element id of the container the page body renders into. Used to scope
    /// content rescans. The not-found page renders without one.
    pub fn content_root_id(&self) -> Option<&'static str> {
        match self {
            PageType::Home => Some("cdm-home-page"),
            PageType::About => Some("cdm-about-page"),
            PageType::Login => Some("cdm-login-page"),
            PageType::Search => Some("cdm-search-page"),
            PageType::CollectionLanding => Some("cdm-collection-landing-page"),
            PageType::CollectionSearch => Some("cdm-collection-search-page"),
            PageType::AdvancedSearch => Some("cdm-advanced-search-page"),
            PageType::Item => Some("cdm-item-page"),
            PageType::Custom => Some("cdm-custom-page"),
            PageType::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Ready,
    Update,
}

impl Phase {
    pub fn slug(&self) -> &'static str {
        match self {
            Phase::Ready => "ready",
            Phase::Update => "update",
        }
    }
}

/// A platform-fired lifecycle signal. This crate only subscribes to these,
/// never emits them.
#[derive(Debug, Clone)]
pub struct LifecycleEvent {
    pub page_type: PageType,
    pub phase: Phase,
    /// Raw detail payload as fired by the platform, if any.
    pub detail: Option<Value>,
}

impl LifecycleEvent {
    pub fn new(page_type: PageType, phase: Phase) -> Self {
        Self {
            page_type,
            phase,
            detail: None,
        }
    }

    pub fn ready(page_type: PageType) -> Self {
        Self::new(page_type, Phase::Ready)
    }

    pub fn update(page_type: PageType) -> Self {
        Self::new(page_type, Phase::Update)
    }

    pub fn with_detail(mut self, detail: Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Collection identifier carried in the detail payload, when present.
    pub fn collection_id(&self) -> Option<&str> {
        self.detail.as_ref()?.get("collectionId")?.as_str()
    }

    /// Event name under the platform contract, e.g. `cdm-item-page:ready`.
    pub fn name(&self) -> String {
        format!("cdm-{}-page:{}", self.page_type.slug(), self.phase.slug())
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for LifecycleEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || Error::UnknownEvent(s.to_string());

        let rest = s.strip_prefix("cdm-").ok_or_else(unknown)?;
        let (type_slug, phase_slug) = rest.split_once("-page:").ok_or_else(unknown)?;

        let page_type = PageType::ALL
            .into_iter()
            .find(|p| p.slug() == type_slug)
            .ok_or_else(unknown)?;

        let phase = match phase_slug {
            "ready" => Phase::Ready,
            "update" if page_type.supports_update() => Phase::Update,
            _ => return Err(unknown()),
        };

        Ok(LifecycleEvent::new(page_type, phase))
    }
}
