//! Budget modal - Client-Side Rendered (WASM)

use budget_modal::dom::web::WebDom;
use budget_modal::{bind, logging, ModalError};

/// `<script type="application/json">` element holding page overrides
const CONFIG_SCRIPT_ID: &str = "modal-config";

fn main() {
  console_error_panic_hook::set_once();

  let result = WebDom::current().and_then(|dom| {
    let ready = dom.clone();
    dom.when_ready(move || {
      if let Err(e) = attach(ready) {
        web_sys::console::error_1(&format!("budget-modal: {}", e).into());
      }
    })
  });

  if let Err(e) = result {
    web_sys::console::error_1(&format!("budget-modal: {}", e).into());
  }
}

fn attach(dom: WebDom) -> Result<(), ModalError> {
  let config = dom.json_config(CONFIG_SCRIPT_ID)?.unwrap_or_default();
  logging::init(&config.logging.level);

  let binding = bind(dom, &config)?;
  if !binding.is_bound() {
    tracing::warn!("modal #{} not on this page", config.elements.modal);
  }
  binding.persist();
  Ok(())
}
