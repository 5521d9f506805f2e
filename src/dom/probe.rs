//! Selector contract and optional-element probes.
//!
//! The class and id names are a presentation-layer contract owned by the
//! platform UI. They live here, in one place, so the binder's control flow
//! stays a flat iteration over probe results instead of scattered lookups.

use super::{Document, NodeId};
use crate::error::{Error, Result};
use crate::platform::event::PageType;

pub mod class {
    pub const ITEM_TITLE: &str = "ItemView-itemTitle";
    pub const ITEM_SECONDARY_TITLE: &str = "ItemView-secondaryTitle";

    pub const PDF_EXPAND: &str = "ItemPdf-expandButton";
    pub const IMAGE_EXPAND: &str = "ItemImage-expandButton";
    pub const VIDEO_PLAYER: &str = "ItemVideo-player";
    pub const AUDIO_PLAYER: &str = "ItemAudio-player";

    pub const DOWNLOAD_MENU_ITEM: &str = "ItemDownload-menuItem";
    pub const DOWNLOAD_BUTTON: &str = "ItemDownload-button";
    pub const PRINT_MENU_ITEM: &str = "ItemPrint-menuItem";
    pub const PRINT_BUTTON: &str = "ItemPrint-button";

    pub const FOOTER_WRAPPER: &str = "Footer-footerWrapper";
    pub const HEADER_LOGO_HOLDER: &str = "Header-logoHolder";
}

/// Selector reported when the logo anchor is missing.
pub const HEADER_LOGO_SELECTOR: &str = "div.Header-logoHolder a";

/// The grid-view toggle carries no class; the platform renders it as
/// `<button value="Grid View">`.
pub const GRID_VIEW_ATTR: (&str, &str) = ("value", "Grid View");

/// Non-fatal existence check: every element carrying `class`, or `None`
/// when the page type simply does not render any.
pub fn optional(doc: &Document, class: &str) -> Option<Vec<NodeId>> {
    let nodes = doc.by_class(class);
    if nodes.is_empty() {
        None
    } else {
        Some(nodes)
    }
}

/// Composite item title: `"{primary}: {secondary}"` when a secondary title
/// element exists, the primary title alone otherwise.
///
/// Caller contract: only invoked on pages guaranteed to render a primary
/// title (item pages). Absence is a contract violation, not an expected
/// branch.
pub fn composite_title(doc: &Document) -> Result<String> {
    let primary = doc
        .first_by_class(class::ITEM_TITLE)
        .ok_or(Error::MissingElement {
            selector: class::ITEM_TITLE,
        })?;
    let primary = doc.text_of(primary);

    match doc.first_by_class(class::ITEM_SECONDARY_TITLE) {
        Some(secondary) => Ok(format!("{}: {}", primary, doc.text_of(secondary))),
        None => Ok(primary.to_string()),
    }
}

/// The anchor inside the header logo holder.
pub fn header_logo(doc: &Document) -> Option<NodeId> {
    let holder = doc.first_by_class(class::HEADER_LOGO_HOLDER)?;
    doc.descendants(holder)
        .into_iter()
        .find(|n| doc.node(*n).tag == "a")
}

pub fn grid_view_button(doc: &Document) -> Option<NodeId> {
    doc.first_by_attr(GRID_VIEW_ATTR.0, GRID_VIEW_ATTR.1)
}

/// Container to scope content rescans to. `None` means the rescan falls
/// back to the whole document, either because the page type renders no
/// content root or because the container is absent from this document.
pub fn content_root(doc: &Document, page_type: PageType) -> Option<NodeId> {
    doc.by_id(page_type.content_root_id()?)
}
