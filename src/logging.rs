//! tracing output for the browser console

use std::fmt::{self, Write};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Layer that writes each event to the matching `console` method
pub struct ConsoleLayer;

#[derive(Default)]
struct MessageVisitor {
  message: String,
  fields: String,
}

impl Visit for MessageVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    if field.name() == "message" {
      self.message.push_str(value);
    } else {
      let _ = write!(self.fields, " {}={}", field.name(), value);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
    if field.name() == "message" {
      let _ = write!(self.message, "{:?}", value);
    } else {
      let _ = write!(self.fields, " {}={:?}", field.name(), value);
    }
  }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
  fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);

    let meta = event.metadata();
    let line = JsValue::from_str(&format!(
      "{} {}: {}{}",
      meta.level(),
      meta.target(),
      visitor.message,
      visitor.fields
    ));

    match *meta.level() {
      Level::ERROR => console::error_1(&line),
      Level::WARN => console::warn_1(&line),
      Level::INFO => console::info_1(&line),
      Level::DEBUG | Level::TRACE => console::debug_1(&line),
    }
  }
}

/// Installs the console subscriber filtered at `level`.
/// Does nothing if a global subscriber is already set.
pub fn init(level: &str) {
  let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(ConsoleLayer)
    .try_init();
}
