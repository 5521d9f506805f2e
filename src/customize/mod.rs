//! Institutional page customizations, one router handler per concern:
//! footer injection, header logo redirect, chat loader, and forced grid
//! view for visual resource collections.

pub mod chat;
pub mod footer;
pub mod gridview;
pub mod header;

pub use chat::ChatLoader;
pub use footer::FooterInjector;
pub use gridview::GridViewForcer;
pub use header::LogoRedirect;
