//! DOM access used by the modal controller.
//!
//! [`Dom`] is the seam between the controller and whatever hosts the page:
//! the browser through `web-sys` ([`web::WebDom`], `csr` feature) or the
//! in-memory tree in [`memory::MemoryDom`].

use crate::error::ModalError;
use std::fmt;

pub mod memory;
#[cfg(feature = "csr")]
pub mod web;

/// Callback invoked on a click with the event target, if it is an element
pub type ClickHandler<E> = Box<dyn Fn(Option<&E>)>;

/// Where a click listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget<'a, E> {
  Element(&'a E),
  Window,
}

/// Part the controller plays for a looked-up element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
  OpenTrigger,
  CloseTrigger,
  Modal,
}

impl fmt::Display for ElementRole {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ElementRole::OpenTrigger => write!(f, "open trigger"),
      ElementRole::CloseTrigger => write!(f, "close trigger"),
      ElementRole::Modal => write!(f, "modal"),
    }
  }
}

/// Minimal DOM surface: lookup by id, class tokens, and click listeners.
///
/// Element handles compare by identity, so `a == b` means the same node.
pub trait Dom: Clone + 'static {
  type Element: Clone + PartialEq + fmt::Debug + 'static;

  /// Registration handle. Dropping it unregisters the handler.
  type Listener: 'static;

  fn element_by_id(&self, id: &str) -> Option<Self::Element>;

  fn has_class(&self, element: &Self::Element, class: &str) -> bool;

  /// Adds the token; no-op when already present
  fn add_class(&self, element: &Self::Element, class: &str);

  /// Removes the token; no-op when absent
  fn remove_class(&self, element: &Self::Element, class: &str);

  fn on_click(
    &self,
    target: ClickTarget<'_, Self::Element>,
    handler: ClickHandler<Self::Element>,
  ) -> Result<Self::Listener, ModalError>;
}
