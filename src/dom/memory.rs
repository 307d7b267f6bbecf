//! In-memory DOM with bubbling click dispatch

use super::{ClickHandler, ClickTarget, Dom};
use crate::error::ModalError;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Handle to a node in a [`MemoryDom`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
  Node(NodeId),
  Window,
}

struct NodeData {
  id: Option<String>,
  parent: Option<NodeId>,
  classes: Vec<String>,
  stops_propagation: bool,
}

struct Registered {
  key: u64,
  slot: Slot,
  handler: Rc<dyn Fn(Option<&NodeId>)>,
}

#[derive(Default)]
struct Inner {
  nodes: Vec<NodeData>,
  listeners: Vec<Registered>,
  next_key: u64,
}

/// Single-threaded DOM tree kept in memory.
///
/// Clicks bubble from the target through its ancestors and finally reach
/// window listeners, unless a node on the path stops propagation.
#[derive(Clone, Default)]
pub struct MemoryDom {
  inner: Rc<RefCell<Inner>>,
}

/// Listener registration in a [`MemoryDom`]
pub struct MemoryListener {
  dom: Weak<RefCell<Inner>>,
  key: u64,
}

impl Drop for MemoryListener {
  fn drop(&mut self) {
    if let Some(inner) = self.dom.upgrade() {
      inner.borrow_mut().listeners.retain(|l| l.key != self.key);
    }
  }
}

impl MemoryDom {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a node, optionally with an id and under a parent
  pub fn create_element(&self, id: Option<&str>, parent: Option<NodeId>) -> NodeId {
    let mut inner = self.inner.borrow_mut();
    inner.nodes.push(NodeData {
      id: id.map(str::to_string),
      parent,
      classes: Vec::new(),
      stops_propagation: false,
    });
    NodeId(inner.nodes.len() - 1)
  }

  /// Makes clicks on this node stop before reaching its ancestors and the window
  pub fn set_stop_propagation(&self, node: NodeId, stop: bool) {
    if let Some(data) = self.inner.borrow_mut().nodes.get_mut(node.0) {
      data.stops_propagation = stop;
    }
  }

  pub fn classes(&self, node: NodeId) -> Vec<String> {
    self
      .inner
      .borrow()
      .nodes
      .get(node.0)
      .map(|d| d.classes.clone())
      .unwrap_or_default()
  }

  pub fn listener_count(&self) -> usize {
    self.inner.borrow().listeners.len()
  }

  /// Dispatches a click whose target is `node`
  pub fn click(&self, node: NodeId) {
    for handler in self.dispatch_path(node) {
      handler(Some(&node));
    }
  }

  /// Dispatches a click that lands on the window itself (no element target)
  pub fn click_window(&self) {
    let handlers: Vec<_> = {
      let inner = self.inner.borrow();
      inner
        .listeners
        .iter()
        .filter(|l| l.slot == Slot::Window)
        .map(|l| l.handler.clone())
        .collect()
    };
    for handler in handlers {
      handler(None);
    }
  }

  // Handlers are collected up front so they can mutate the tree while running.
  fn dispatch_path(&self, node: NodeId) -> Vec<Rc<dyn Fn(Option<&NodeId>)>> {
    let inner = self.inner.borrow();
    let mut handlers = Vec::new();
    let mut current = Some(node);
    while let Some(id) = current {
      let Some(data) = inner.nodes.get(id.0) else {
        return handlers;
      };
      handlers.extend(
        inner
          .listeners
          .iter()
          .filter(|l| l.slot == Slot::Node(id))
          .map(|l| l.handler.clone()),
      );
      if data.stops_propagation {
        return handlers;
      }
      current = data.parent;
    }
    handlers.extend(
      inner
        .listeners
        .iter()
        .filter(|l| l.slot == Slot::Window)
        .map(|l| l.handler.clone()),
    );
    handlers
  }
}

impl Dom for MemoryDom {
  type Element = NodeId;
  type Listener = MemoryListener;

  fn element_by_id(&self, id: &str) -> Option<NodeId> {
    self
      .inner
      .borrow()
      .nodes
      .iter()
      .position(|n| n.id.as_deref() == Some(id))
      .map(NodeId)
  }

  fn has_class(&self, element: &NodeId, class: &str) -> bool {
    self
      .inner
      .borrow()
      .nodes
      .get(element.0)
      .is_some_and(|n| n.classes.iter().any(|c| c == class))
  }

  fn add_class(&self, element: &NodeId, class: &str) {
    if let Some(node) = self.inner.borrow_mut().nodes.get_mut(element.0) {
      if !node.classes.iter().any(|c| c == class) {
        node.classes.push(class.to_string());
      }
    }
  }

  fn remove_class(&self, element: &NodeId, class: &str) {
    if let Some(node) = self.inner.borrow_mut().nodes.get_mut(element.0) {
      node.classes.retain(|c| c != class);
    }
  }

  fn on_click(
    &self,
    target: ClickTarget<'_, NodeId>,
    handler: ClickHandler<NodeId>,
  ) -> Result<MemoryListener, ModalError> {
    let slot = match target {
      ClickTarget::Element(node) => Slot::Node(*node),
      ClickTarget::Window => Slot::Window,
    };
    let mut inner = self.inner.borrow_mut();
    if let Slot::Node(node) = slot {
      if node.0 >= inner.nodes.len() {
        return Err(ModalError::Listener(format!("unknown node {}", node.0)));
      }
    }
    let key = inner.next_key;
    inner.next_key += 1;
    inner.listeners.push(Registered {
      key,
      slot,
      handler: Rc::from(handler),
    });
    Ok(MemoryListener {
      dom: Rc::downgrade(&self.inner),
      key,
    })
  }
}
