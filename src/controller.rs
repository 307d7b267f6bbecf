//! Modal controller and the page-load binding routine

use crate::config::{MissingElementPolicy, ModalConfig};
use crate::dom::{ClickTarget, Dom, ElementRole};
use crate::error::ModalError;
use crate::modal::Visibility;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Shows and hides one modal element by toggling its hidden-state class
pub struct ModalController<D: Dom> {
  dom: D,
  modal: D::Element,
  hidden_class: Rc<str>,
}

impl<D: Dom> Clone for ModalController<D> {
  fn clone(&self) -> Self {
    Self {
      dom: self.dom.clone(),
      modal: self.modal.clone(),
      hidden_class: self.hidden_class.clone(),
    }
  }
}

impl<D: Dom> ModalController<D> {
  pub fn new(dom: D, modal: D::Element, hidden_class: &str) -> Self {
    Self {
      dom,
      modal,
      hidden_class: Rc::from(hidden_class),
    }
  }

  pub fn modal(&self) -> &D::Element {
    &self.modal
  }

  pub fn open(&self) {
    self.dom.remove_class(&self.modal, &self.hidden_class);
    debug!("modal opened");
  }

  pub fn close(&self) {
    self.dom.add_class(&self.modal, &self.hidden_class);
    debug!("modal closed");
  }

  pub fn toggle(&self) {
    match self.visibility() {
      Visibility::Hidden => self.open(),
      Visibility::Visible => self.close(),
    }
  }

  pub fn visibility(&self) -> Visibility {
    Visibility::from_class_present(self.dom.has_class(&self.modal, &self.hidden_class))
  }

  pub fn is_visible(&self) -> bool {
    self.visibility().is_visible()
  }

  /// Closes the modal when the click target is the modal element itself.
  /// Clicks on its descendants are ignored. Returns whether it closed.
  pub fn handle_window_click(&self, target: Option<&D::Element>) -> bool {
    if target != Some(&self.modal) {
      return false;
    }
    debug!("backdrop clicked");
    self.close();
    true
  }
}

/// Handlers registered by [`bind`].
///
/// Dropping a `Binding` unregisters its handlers; call [`Binding::persist`]
/// to keep them for the lifetime of the page.
#[must_use = "dropping a Binding unregisters its click handlers"]
pub struct Binding<D: Dom> {
  controller: Option<ModalController<D>>,
  listeners: Vec<D::Listener>,
}

impl<D: Dom> Binding<D> {
  fn unbound() -> Self {
    Self {
      controller: None,
      listeners: Vec::new(),
    }
  }

  /// `None` when the modal element was not found
  pub fn controller(&self) -> Option<&ModalController<D>> {
    self.controller.as_ref()
  }

  pub fn is_bound(&self) -> bool {
    self.controller.is_some()
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.len()
  }

  /// Leaks the listener registrations so the handlers stay active
  pub fn persist(self) -> Option<ModalController<D>> {
    let Binding {
      controller,
      listeners,
    } = self;
    std::mem::forget(listeners);
    controller
  }

  /// Unregisters every handler
  pub fn detach(self) {
    debug!("detaching {} modal listeners", self.listeners.len());
  }
}

fn lookup<D: Dom>(
  dom: &D,
  role: ElementRole,
  id: &str,
  policy: MissingElementPolicy,
) -> Result<Option<D::Element>, ModalError> {
  match dom.element_by_id(id) {
    Some(element) => Ok(Some(element)),
    None => match policy {
      MissingElementPolicy::Ignore => {
        warn!("{} element #{} not found, skipping", role, id);
        Ok(None)
      }
      MissingElementPolicy::Error => Err(ModalError::MissingElement {
        role,
        id: id.to_string(),
      }),
    },
  }
}

/// Looks up the configured elements and registers the open, close and
/// backdrop click handlers.
///
/// Every element is looked up before any handler is registered, so an
/// error leaves the page untouched.
pub fn bind<D: Dom>(dom: D, config: &ModalConfig) -> Result<Binding<D>, ModalError> {
  config.validate()?;
  let ids = &config.elements;
  let policy = config.missing_elements;

  let open_trigger = lookup(&dom, ElementRole::OpenTrigger, &ids.open_trigger, policy)?;
  let close_trigger = lookup(&dom, ElementRole::CloseTrigger, &ids.close_trigger, policy)?;
  let Some(modal) = lookup(&dom, ElementRole::Modal, &ids.modal, policy)? else {
    return Ok(Binding::unbound());
  };

  let controller = ModalController::new(dom.clone(), modal, &config.hidden_class);
  let mut listeners = Vec::with_capacity(3);

  if let Some(trigger) = open_trigger {
    let c = controller.clone();
    listeners.push(dom.on_click(
      ClickTarget::Element(&trigger),
      Box::new(move |_: Option<&D::Element>| c.open()),
    )?);
  }

  if let Some(trigger) = close_trigger {
    let c = controller.clone();
    listeners.push(dom.on_click(
      ClickTarget::Element(&trigger),
      Box::new(move |_: Option<&D::Element>| c.close()),
    )?);
  }

  if config.dismiss_on_backdrop {
    let c = controller.clone();
    listeners.push(dom.on_click(
      ClickTarget::Window,
      Box::new(move |target: Option<&D::Element>| {
        c.handle_window_click(target);
      }),
    )?);
  }

  info!(
    "modal #{} bound with {} click handlers",
    ids.modal,
    listeners.len()
  );

  Ok(Binding {
    controller: Some(controller),
    listeners,
  })
}
