//! Click behavior of a bound modal, driven through the in-memory DOM

use budget_modal::dom::memory::{MemoryDom, NodeId};
use budget_modal::{
  bind, Dom, ElementRole, MissingElementPolicy, ModalConfig, ModalError, Visibility,
};

struct Page {
  dom: MemoryDom,
  open_btn: NodeId,
  close_btn: NodeId,
  modal: NodeId,
  content: NodeId,
}

/// Page with the default ids; the modal starts hidden
fn budget_page() -> Page {
  let dom = MemoryDom::new();
  let body = dom.create_element(None, None);
  let open_btn = dom.create_element(Some("openModalBtn"), Some(body));
  let modal = dom.create_element(Some("myModal"), Some(body));
  let content = dom.create_element(None, Some(modal));
  let close_btn = dom.create_element(Some("closeModalBtn"), Some(content));
  dom.add_class(&modal, "hidden");
  Page {
    dom,
    open_btn,
    close_btn,
    modal,
    content,
  }
}

fn visibility(page: &Page) -> Visibility {
  Visibility::from_class_present(page.dom.has_class(&page.modal, "hidden"))
}

// =============================================================================
// Open / Close
// =============================================================================

#[test]
fn test_open_trigger_shows_modal() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  assert_eq!(visibility(&page), Visibility::Hidden);
  page.dom.click(page.open_btn);
  assert_eq!(visibility(&page), Visibility::Visible);
}

#[test]
fn test_close_trigger_hides_modal() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.close_btn);
  assert_eq!(visibility(&page), Visibility::Hidden);
}

#[test]
fn test_open_twice_stays_visible() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.open_btn);
  assert_eq!(visibility(&page), Visibility::Visible);
  assert!(page.dom.classes(page.modal).is_empty());
}

#[test]
fn test_close_twice_stays_hidden() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.close_btn);
  page.dom.click(page.close_btn);
  assert_eq!(visibility(&page), Visibility::Hidden);
  assert_eq!(page.dom.classes(page.modal), vec!["hidden".to_string()]);
}

// =============================================================================
// Outside Click
// =============================================================================

#[test]
fn test_backdrop_click_hides_modal() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.modal);
  assert_eq!(visibility(&page), Visibility::Hidden);
}

#[test]
fn test_content_click_keeps_modal_visible() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.content);
  assert_eq!(visibility(&page), Visibility::Visible);
}

#[test]
fn test_content_stopping_propagation_keeps_modal_visible() {
  let page = budget_page();
  page.dom.set_stop_propagation(page.content, true);
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click(page.content);
  assert_eq!(visibility(&page), Visibility::Visible);
}

#[test]
fn test_click_without_element_target_is_ignored() {
  let page = budget_page();
  let _binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();

  page.dom.click(page.open_btn);
  page.dom.click_window();
  assert_eq!(visibility(&page), Visibility::Visible);
}

#[test]
fn test_backdrop_dismiss_disabled() {
  let page = budget_page();
  let config = ModalConfig {
    dismiss_on_backdrop: false,
    ..ModalConfig::default()
  };
  let binding = bind(page.dom.clone(), &config).unwrap();
  assert_eq!(binding.listener_count(), 2);

  page.dom.click(page.open_btn);
  page.dom.click(page.modal);
  assert_eq!(visibility(&page), Visibility::Visible);
}

// =============================================================================
// Missing Elements
// =============================================================================

#[test]
fn test_missing_modal_is_silent_noop() {
  let dom = MemoryDom::new();
  let open_btn = dom.create_element(Some("openModalBtn"), None);

  let binding = bind(dom.clone(), &ModalConfig::default()).unwrap();
  assert!(!binding.is_bound());
  assert_eq!(binding.listener_count(), 0);
  assert_eq!(dom.listener_count(), 0);

  dom.click(open_btn);
  assert!(dom.classes(open_btn).is_empty());
}

#[test]
fn test_missing_close_trigger_skipped() {
  let dom = MemoryDom::new();
  let open_btn = dom.create_element(Some("openModalBtn"), None);
  let modal = dom.create_element(Some("myModal"), None);
  dom.add_class(&modal, "hidden");

  let binding = bind(dom.clone(), &ModalConfig::default()).unwrap();
  assert!(binding.is_bound());
  assert_eq!(binding.listener_count(), 2);

  dom.click(open_btn);
  assert!(!dom.has_class(&modal, "hidden"));
}

#[test]
fn test_missing_element_errors_when_strict() {
  let dom = MemoryDom::new();
  dom.create_element(Some("openModalBtn"), None);
  dom.create_element(Some("myModal"), None);
  let config = ModalConfig {
    missing_elements: MissingElementPolicy::Error,
    ..ModalConfig::default()
  };

  match bind(dom.clone(), &config) {
    Err(ModalError::MissingElement { role, id }) => {
      assert_eq!(role, ElementRole::CloseTrigger);
      assert_eq!(id, "closeModalBtn");
    }
    Err(e) => panic!("unexpected error: {}", e),
    Ok(_) => panic!("bind should fail"),
  }
  assert_eq!(dom.listener_count(), 0);
}

#[test]
fn test_strict_binds_when_all_present() {
  let page = budget_page();
  let config = ModalConfig {
    missing_elements: MissingElementPolicy::Error,
    ..ModalConfig::default()
  };
  let binding = bind(page.dom.clone(), &config).unwrap();
  assert_eq!(binding.listener_count(), 3);
}

// =============================================================================
// Binding Lifetime
// =============================================================================

#[test]
fn test_detach_unregisters_handlers() {
  let page = budget_page();
  let binding = bind(page.dom.clone(), &ModalConfig::default()).unwrap();
  assert_eq!(page.dom.listener_count(), 3);

  binding.detach();
  assert_eq!(page.dom.listener_count(), 0);

  page.dom.click(page.open_btn);
  assert_eq!(visibility(&page), Visibility::Hidden);
}

#[test]
fn test_persist_keeps_handlers() {
  let page = budget_page();
  let controller = bind(page.dom.clone(), &ModalConfig::default())
    .unwrap()
    .persist()
    .unwrap();
  assert_eq!(page.dom.listener_count(), 3);

  page.dom.click(page.open_btn);
  assert!(controller.is_visible());
  assert_eq!(controller.modal(), &page.modal);
}

#[test]
fn test_custom_ids_and_class() {
  let dom = MemoryDom::new();
  let open_btn = dom.create_element(Some("add-transaction"), None);
  let modal = dom.create_element(Some("transaction-modal"), None);
  let close_btn = dom.create_element(Some("cancel-transaction"), Some(modal));
  dom.add_class(&modal, "is-hidden");

  let config = ModalConfig::from_yaml_str(
    r#"
elements:
  open_trigger: add-transaction
  close_trigger: cancel-transaction
  modal: transaction-modal
hidden_class: is-hidden
"#,
  )
  .unwrap();
  let _binding = bind(dom.clone(), &config).unwrap();

  dom.click(open_btn);
  assert!(!dom.has_class(&modal, "is-hidden"));
  dom.click(close_btn);
  assert!(dom.has_class(&modal, "is-hidden"));
}
