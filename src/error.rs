use crate::dom::ElementRole;

/// Errors raised while loading configuration or binding the modal
#[derive(Debug, thiserror::Error)]
pub enum ModalError {
  #[error("{role} element #{id} not found")]
  MissingElement { role: ElementRole, id: String },

  #[error("invalid modal config: {0}")]
  InvalidConfig(String),

  #[error("failed to parse YAML config: {0}")]
  Yaml(#[from] serde_yaml::Error),

  #[error("failed to parse JSON config: {0}")]
  Json(#[from] serde_json::Error),

  #[error("no global window available")]
  NoWindow,

  #[error("window has no document")]
  NoDocument,

  #[error("failed to register click listener: {0}")]
  Listener(String),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_element_message() {
    let err = ModalError::MissingElement {
      role: ElementRole::OpenTrigger,
      id: "openModalBtn".to_string(),
    };
    assert_eq!(err.to_string(), "open trigger element #openModalBtn not found");
  }

  #[test]
  fn test_json_error_converts() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ModalError = parse.into();
    assert!(matches!(err, ModalError::Json(_)));
    assert!(err.to_string().starts_with("failed to parse JSON config"));
  }
}
