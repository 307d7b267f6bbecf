//! Visibility model for the modal element

use std::fmt;

/// Whether the modal is rendered.
///
/// The element is visible if and only if the hidden-state class is absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
  #[default]
  Hidden,
  Visible,
}

impl Visibility {
  pub fn from_class_present(hidden_class_present: bool) -> Self {
    if hidden_class_present {
      Visibility::Hidden
    } else {
      Visibility::Visible
    }
  }

  pub fn is_visible(self) -> bool {
    self == Visibility::Visible
  }

  pub fn toggled(self) -> Self {
    match self {
      Visibility::Hidden => Visibility::Visible,
      Visibility::Visible => Visibility::Hidden,
    }
  }
}

impl fmt::Display for Visibility {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Visibility::Hidden => write!(f, "hidden"),
      Visibility::Visible => write!(f, "visible"),
    }
  }
}
