//! The host platform contract: lifecycle events it fires and the routing
//! table that replaces the original script's repeated `addEventListener`
//! blocks.

pub mod event;
pub mod router;
