//! field-guard core
//!
//! Binds input fields to a fixed menu of checks (required, length bounds,
//! email, password strength, custom pattern) and reports failures through
//! toast notifications and callbacks.
//!
//! The document and the toast surface are capabilities ([`Dom`],
//! [`Notifier`]) so the same logic runs in the browser and in tests.
//!
//! ## Example
//!
//! ```rust,ignore
//! use field_guard_core::{ConfigOverrides, Validator};
//!
//! let validator = Validator::new(
//!     dom,
//!     notifier,
//!     "#email",
//!     ConfigOverrides {
//!         required: Some(true),
//!         email_validation: Some(true),
//!         ..ConfigOverrides::default()
//!     }
//!     .on_success(|_, _| tracing::info!("email ok")),
//! );
//! ```

pub mod checks;
pub mod config;
pub mod error;
pub mod host;
pub mod pattern;
pub mod toast;
pub mod validator;

pub use checks::Check;
pub use config::{Callback, ConfigOverrides, Notice, Notices, ToastSettings, ValidationConfig};
pub use error::{BindError, ConfigError};
pub use host::{Dom, Notifier};
pub use pattern::{PasswordRule, Pattern};
pub use toast::{Icon, Position, Toast};
pub use validator::{evaluate, Binding, FieldSpec, Report, Target, Validator};
