//! Page analytics: the tracking-queue command vocabulary, the injected
//! queue handle plus its consumer, and the binder that translates lifecycle
//! events into queued commands and interaction listeners.

pub mod binder;
pub mod command;
pub mod tracker;

pub use binder::PageAnalyticsBinder;
pub use command::{CommandArg, EventCategory, TrackerCommand};
pub use tracker::{Agent, Tracker};
