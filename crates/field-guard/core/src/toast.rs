//! Toast notifications shown when a check fails

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Icon displayed next to the toast title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Success,
    Error,
    #[default]
    Warning,
    Info,
    Question,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Success => "success",
            Icon::Error => "error",
            Icon::Warning => "warning",
            Icon::Info => "info",
            Icon::Question => "question",
        }
    }
}

/// Screen anchor for the toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Top,
    TopStart,
    TopEnd,
    Center,
    CenterStart,
    CenterEnd,
    Bottom,
    BottomStart,
    #[default]
    BottomEnd,
}

impl Position {
    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::TopStart => "top-start",
            Position::TopEnd => "top-end",
            Position::Center => "center",
            Position::CenterStart => "center-start",
            Position::CenterEnd => "center-end",
            Position::Bottom => "bottom",
            Position::BottomStart => "bottom-start",
            Position::BottomEnd => "bottom-end",
        }
    }
}

/// A single notification handed to a [`crate::Notifier`].
///
/// Toasts never ask for confirmation and dismiss themselves after
/// `timeout`. The timer belongs to the notifier, not to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub icon: Icon,
    pub position: Position,
    pub timeout: Duration,
    pub theme: Option<String>,
}
