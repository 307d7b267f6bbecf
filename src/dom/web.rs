//! Browser DOM through web-sys

use super::{ClickHandler, ClickTarget, Dom};
use crate::config::ModalConfig;
use crate::error::ModalError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// The page's window and document
#[derive(Clone)]
pub struct WebDom {
  window: Window,
  document: Document,
}

/// Click listener attached to a browser event target
pub struct WebListener {
  target: EventTarget,
  closure: Closure<dyn Fn(Event)>,
}

impl Drop for WebListener {
  fn drop(&mut self) {
    let _ = self
      .target
      .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
  }
}

impl WebDom {
  pub fn new(window: Window, document: Document) -> Self {
    Self { window, document }
  }

  /// Uses the global `window` and its document
  pub fn current() -> Result<Self, ModalError> {
    let window = web_sys::window().ok_or(ModalError::NoWindow)?;
    let document = window.document().ok_or(ModalError::NoDocument)?;
    Ok(Self::new(window, document))
  }

  pub fn document(&self) -> &Document {
    &self.document
  }

  /// Reads a JSON config from the text of `<script type="application/json" id=...>`.
  /// Returns `None` when the page has no such element.
  pub fn json_config(&self, script_id: &str) -> Result<Option<ModalConfig>, ModalError> {
    let Some(script) = self.document.get_element_by_id(script_id) else {
      return Ok(None);
    };
    let text = script.text_content().unwrap_or_default();
    Ok(Some(ModalConfig::from_json_str(&text)?))
  }

  /// Runs `f` once the document has been parsed
  pub fn when_ready(&self, f: impl FnOnce() + 'static) -> Result<(), ModalError> {
    if self.document.ready_state() != "loading" {
      f();
      return Ok(());
    }
    let callback = Closure::once_into_js(f);
    self
      .document
      .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
      .map_err(|e| ModalError::Listener(format!("{:?}", e)))
  }
}

impl Dom for WebDom {
  type Element = Element;
  type Listener = WebListener;

  fn element_by_id(&self, id: &str) -> Option<Element> {
    self.document.get_element_by_id(id)
  }

  fn has_class(&self, element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
  }

  fn add_class(&self, element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
      tracing::warn!("failed to add class {}: {:?}", class, e);
    }
  }

  fn remove_class(&self, element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
      tracing::warn!("failed to remove class {}: {:?}", class, e);
    }
  }

  fn on_click(
    &self,
    target: ClickTarget<'_, Element>,
    handler: ClickHandler<Element>,
  ) -> Result<WebListener, ModalError> {
    let target: EventTarget = match target {
      ClickTarget::Element(element) => element.clone().into(),
      ClickTarget::Window => self.window.clone().into(),
    };

    let closure = Closure::wrap(Box::new(move |event: Event| {
      let clicked = event.target().and_then(|t| t.dyn_into::<Element>().ok());
      handler(clicked.as_ref());
    }) as Box<dyn Fn(Event)>);

    target
      .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
      .map_err(|e| ModalError::Listener(format!("{:?}", e)))?;

    Ok(WebListener { target, closure })
  }
}
