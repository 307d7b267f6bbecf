//! Modal dialog controller for the budget pages.
//!
//! Binds open/close/outside-click handlers to a modal element and toggles
//! its hidden-state class. The DOM is reached through the [`dom::Dom`]
//! trait so the same controller runs against the browser (`csr` feature)
//! or the in-memory [`dom::memory::MemoryDom`].

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod modal;

// Browser-only modules (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod logging;

pub use config::{ElementIds, LoggingSection, MissingElementPolicy, ModalConfig};
pub use controller::{bind, Binding, ModalController};
pub use dom::{ClickTarget, Dom, ElementRole};
pub use error::ModalError;
pub use modal::Visibility;
