use crate::error::ModalError;
use serde::{Deserialize, Serialize};

/// What `bind` does when a configured element is not in the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingElementPolicy {
  /// Log a warning and skip the element
  #[default]
  Ignore,
  /// Fail with `ModalError::MissingElement`
  Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
  #[serde(default)]
  pub elements: ElementIds,
  /// Class token whose presence hides the modal
  #[serde(default = "default_hidden_class")]
  pub hidden_class: String,
  #[serde(default)]
  pub missing_elements: MissingElementPolicy,
  /// Close when a click lands directly on the backdrop
  #[serde(default = "default_true")]
  pub dismiss_on_backdrop: bool,
  #[serde(default)]
  pub logging: LoggingSection,
}

/// Ids of the elements the controller binds to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementIds {
  #[serde(default = "default_open_trigger")]
  pub open_trigger: String,
  #[serde(default = "default_close_trigger")]
  pub close_trigger: String,
  #[serde(default = "default_modal")]
  pub modal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
  #[serde(default = "default_level")]
  pub level: String,
}

fn default_hidden_class() -> String {
  "hidden".into()
}
fn default_true() -> bool {
  true
}
fn default_open_trigger() -> String {
  "openModalBtn".into()
}
fn default_close_trigger() -> String {
  "closeModalBtn".into()
}
fn default_modal() -> String {
  "myModal".into()
}
fn default_level() -> String {
  "info".into()
}

impl Default for ModalConfig {
  fn default() -> Self {
    Self {
      elements: ElementIds::default(),
      hidden_class: default_hidden_class(),
      missing_elements: MissingElementPolicy::default(),
      dismiss_on_backdrop: true,
      logging: LoggingSection::default(),
    }
  }
}

impl Default for ElementIds {
  fn default() -> Self {
    Self {
      open_trigger: default_open_trigger(),
      close_trigger: default_close_trigger(),
      modal: default_modal(),
    }
  }
}

impl Default for LoggingSection {
  fn default() -> Self {
    Self {
      level: default_level(),
    }
  }
}

impl ModalConfig {
  pub fn from_yaml_str(content: &str) -> Result<Self, ModalError> {
    let config: Self = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  pub fn from_json_str(content: &str) -> Result<Self, ModalError> {
    let config: Self = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Checks ids are non-empty and distinct and the class is a single token
  pub fn validate(&self) -> Result<(), ModalError> {
    let ids = [
      ("open_trigger", &self.elements.open_trigger),
      ("close_trigger", &self.elements.close_trigger),
      ("modal", &self.elements.modal),
    ];
    for (name, id) in ids {
      if id.trim().is_empty() {
        return Err(ModalError::InvalidConfig(format!("elements.{} is empty", name)));
      }
    }
    for (i, (name, id)) in ids.iter().enumerate() {
      if let Some((other, _)) = ids[i + 1..].iter().find(|(_, o)| o == id) {
        return Err(ModalError::InvalidConfig(format!(
          "elements.{} and elements.{} share id {}",
          name, other, id
        )));
      }
    }
    if self.hidden_class.is_empty() {
      return Err(ModalError::InvalidConfig("hidden_class is empty".into()));
    }
    if self.hidden_class.chars().any(char::is_whitespace) {
      return Err(ModalError::InvalidConfig(format!(
        "hidden_class {:?} must be a single class token",
        self.hidden_class
      )));
    }
    validate_level(&self.logging.level)
  }
}

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Accepts a level (`debug`) or comma-separated `target=level` directives
fn validate_level(level: &str) -> Result<(), ModalError> {
  let is_level = |s: &str| LEVELS.iter().any(|l| l.eq_ignore_ascii_case(s.trim()));
  for directive in level.split(',') {
    let ok = match directive.split_once('=') {
      Some((target, lvl)) => !target.trim().is_empty() && is_level(lvl),
      None => is_level(directive),
    };
    if !ok {
      return Err(ModalError::InvalidConfig(format!(
        "logging.level {:?} is not a log level or target=level directive",
        level
      )));
    }
  }
  Ok(())
}
