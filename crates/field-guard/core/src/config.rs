// File: src/config.rs
// Purpose: Default configuration, caller overrides and the per-field merge

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::checks::Check;
use crate::error::ConfigError;
use crate::pattern::{PasswordRule, Pattern};
use crate::toast::{Icon, Position, Toast};

/// Callback run after an evaluation, with the bound element and the
/// effective configuration
pub type Callback<E> = Rc<dyn Fn(&E, &ValidationConfig<E>)>;

/// Toast presentation settings shared by every check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastSettings {
    pub position: Position,
    pub timeout_ms: u64,
    pub theme: Option<String>,
}

impl ToastSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            position: Position::BottomEnd,
            timeout_ms: 2000,
            theme: None,
        }
    }
}

/// Title, text and icon for one kind of failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub icon: Icon,
}

impl Notice {
    fn warning(text: &str) -> Self {
        Self {
            title: "Warning".to_string(),
            text: text.to_string(),
            icon: Icon::Warning,
        }
    }
}

/// One [`Notice`] per check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notices {
    pub required: Notice,
    pub min_length: Notice,
    pub max_length: Notice,
    pub email: Notice,
    pub password: Notice,
    pub custom: Notice,
}

impl Notices {
    pub fn get(&self, check: Check) -> &Notice {
        match check {
            Check::Required => &self.required,
            Check::MinLength => &self.min_length,
            Check::MaxLength => &self.max_length,
            Check::Email => &self.email,
            Check::PasswordSecurity => &self.password,
            Check::CustomPattern => &self.custom,
        }
    }

    fn get_mut(&mut self, check: Check) -> &mut Notice {
        match check {
            Check::Required => &mut self.required,
            Check::MinLength => &mut self.min_length,
            Check::MaxLength => &mut self.max_length,
            Check::Email => &mut self.email,
            Check::PasswordSecurity => &mut self.password,
            Check::CustomPattern => &mut self.custom,
        }
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self {
            required: Notice::warning("This field is required"),
            min_length: Notice::warning("This field is too short"),
            max_length: Notice::warning("This field is too long"),
            email: Notice::warning("The email address is not valid"),
            password: Notice::warning("Your password is not secure"),
            custom: Notice::warning("The value does not match the expected format"),
        }
    }
}

/// Effective configuration of one bound field.
///
/// Built from [`ValidationConfig::default`] with [`ConfigOverrides`] applied
/// on top. `custom_pattern` is `None` by default, which keeps the custom
/// check disabled until a pattern is configured.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct ValidationConfig<E> {
    pub form_selector: Option<String>,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email_validation: bool,
    pub check_password_security: bool,
    pub password_rule: PasswordRule,
    pub custom_pattern: Option<Pattern>,
    pub trigger_event: String,
    pub toast: ToastSettings,
    pub notices: Notices,
    #[serde(skip)]
    pub on_validation_success: Callback<E>,
    #[serde(skip)]
    pub on_validation_error: Callback<E>,
}

impl<E: 'static> Default for ValidationConfig<E> {
    fn default() -> Self {
        Self {
            form_selector: None,
            required: false,
            min_length: None,
            max_length: None,
            email_validation: false,
            check_password_security: false,
            password_rule: PasswordRule::Strong,
            custom_pattern: None,
            trigger_event: "blur".to_string(),
            toast: ToastSettings::default(),
            notices: Notices::default(),
            on_validation_success: Rc::new(|_: &E, _: &ValidationConfig<E>| {}),
            on_validation_error: Rc::new(|_: &E, _: &ValidationConfig<E>| {}),
        }
    }
}

impl<E> fmt::Debug for ValidationConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("form_selector", &self.form_selector)
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("email_validation", &self.email_validation)
            .field("check_password_security", &self.check_password_security)
            .field("password_rule", &self.password_rule)
            .field("custom_pattern", &self.custom_pattern)
            .field("trigger_event", &self.trigger_event)
            .field("toast", &self.toast)
            .field("notices", &self.notices)
            .finish_non_exhaustive()
    }
}

impl<E: 'static> ValidationConfig<E> {
    /// Defaults with `overrides` applied
    pub fn from_overrides(overrides: ConfigOverrides<E>) -> Result<Self, ConfigError> {
        Self::default().merge(overrides)
    }

    /// Replaces every field that `overrides` sets. Nested values such as
    /// patterns and notices are replaced field by field, never deep-merged.
    pub fn merge(mut self, overrides: ConfigOverrides<E>) -> Result<Self, ConfigError> {
        replace(&mut self.required, overrides.required);
        replace(&mut self.email_validation, overrides.email_validation);
        replace(&mut self.check_password_security, overrides.check_password_security);
        replace(&mut self.trigger_event, overrides.trigger_event);

        if overrides.form_selector.is_some() {
            self.form_selector = overrides.form_selector;
        }
        if overrides.min_length.is_some() {
            self.min_length = overrides.min_length;
        }
        if overrides.max_length.is_some() {
            self.max_length = overrides.max_length;
        }

        if let Some(source) = overrides.password_pattern {
            self.password_rule = PasswordRule::Pattern(Pattern::new(&source)?);
        }
        if let Some(source) = overrides.custom_pattern {
            self.custom_pattern = Some(Pattern::new(&source)?);
        }

        replace(&mut self.toast.position, overrides.toast_position);
        replace(&mut self.toast.timeout_ms, overrides.toast_timeout_ms);
        if overrides.toast_theme.is_some() {
            self.toast.theme = overrides.toast_theme;
        }

        let notice_overrides = [
            (Check::Required, overrides.required_title, overrides.required_text, overrides.required_icon),
            (Check::MinLength, overrides.min_length_title, overrides.min_length_text, overrides.min_length_icon),
            (Check::MaxLength, overrides.max_length_title, overrides.max_length_text, overrides.max_length_icon),
            (Check::Email, overrides.email_title, overrides.email_text, overrides.email_icon),
            (Check::PasswordSecurity, overrides.password_title, overrides.password_text, overrides.password_icon),
            (Check::CustomPattern, overrides.custom_title, overrides.custom_text, overrides.custom_icon),
        ];
        for (check, title, text, icon) in notice_overrides {
            let notice = self.notices.get_mut(check);
            replace(&mut notice.title, title);
            replace(&mut notice.text, text);
            replace(&mut notice.icon, icon);
        }

        replace(&mut self.on_validation_success, overrides.on_validation_success);
        replace(&mut self.on_validation_error, overrides.on_validation_error);

        Ok(self)
    }

    /// Toast shown when `check` fails
    pub fn toast_for(&self, check: Check) -> Toast {
        let notice = self.notices.get(check);
        Toast {
            title: notice.title.clone(),
            message: notice.text.clone(),
            icon: notice.icon,
            position: self.toast.position,
            timeout: self.toast.timeout(),
            theme: self.toast.theme.clone(),
        }
    }
}

fn replace<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Caller supplied configuration. Unset fields inherit the defaults.
///
/// Deserializes from camelCase JSON, e.g.
///
/// ```json
/// { "required": true, "minLength": 3, "requiredText": "Name is required" }
/// ```
///
/// The key names of the SweetAlert2 based original (`formElement`,
/// `eventName`, `customRegEx`, `checkPasswordRegEx`, `swalPosition`,
/// `swalTimer`, `swalTheme`, `swalTitle*`, `swalText*`, `swalIcon*`) are
/// accepted as aliases.
///
/// Callbacks cannot come from JSON; set them with [`ConfigOverrides::on_success`]
/// and [`ConfigOverrides::on_error`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default, bound = "")]
pub struct ConfigOverrides<E> {
    #[serde(alias = "formElement")]
    pub form_selector: Option<String>,
    pub required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub email_validation: Option<bool>,
    pub check_password_security: Option<bool>,
    #[serde(alias = "checkPasswordRegEx")]
    pub password_pattern: Option<String>,
    #[serde(alias = "customRegEx")]
    pub custom_pattern: Option<String>,
    #[serde(alias = "eventName")]
    pub trigger_event: Option<String>,

    #[serde(alias = "swalPosition")]
    pub toast_position: Option<Position>,
    #[serde(alias = "swalTimer")]
    pub toast_timeout_ms: Option<u64>,
    #[serde(alias = "swalTheme")]
    pub toast_theme: Option<String>,

    #[serde(alias = "swalTitleRequired")]
    pub required_title: Option<String>,
    #[serde(alias = "swalTextRequired")]
    pub required_text: Option<String>,
    #[serde(alias = "swalIconRequired")]
    pub required_icon: Option<Icon>,
    #[serde(alias = "swalTitleMinLength")]
    pub min_length_title: Option<String>,
    #[serde(alias = "swalTextMinLength")]
    pub min_length_text: Option<String>,
    #[serde(alias = "swalIconMinLength")]
    pub min_length_icon: Option<Icon>,
    #[serde(alias = "swalTitleMaxLength")]
    pub max_length_title: Option<String>,
    #[serde(alias = "swalTextMaxLength")]
    pub max_length_text: Option<String>,
    #[serde(alias = "swalIconMaxLength")]
    pub max_length_icon: Option<Icon>,
    #[serde(alias = "swalTitleEmailValidation")]
    pub email_title: Option<String>,
    #[serde(alias = "swalTextEmailValidation")]
    pub email_text: Option<String>,
    #[serde(alias = "swalIconEmailValidation")]
    pub email_icon: Option<Icon>,
    #[serde(alias = "swalTitleCheckPasswordSecurity")]
    pub password_title: Option<String>,
    #[serde(alias = "swalTextCheckPasswordSecurity")]
    pub password_text: Option<String>,
    #[serde(alias = "swalIconCheckPasswordSecurity")]
    pub password_icon: Option<Icon>,
    #[serde(alias = "swalTitleCustomValidation")]
    pub custom_title: Option<String>,
    #[serde(alias = "swalTextCustomValidation")]
    pub custom_text: Option<String>,
    #[serde(alias = "swalIconCustomValidation")]
    pub custom_icon: Option<Icon>,

    #[serde(skip)]
    pub on_validation_success: Option<Callback<E>>,
    #[serde(skip)]
    pub on_validation_error: Option<Callback<E>>,
}

impl<E> ConfigOverrides<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, callback: impl Fn(&E, &ValidationConfig<E>) + 'static) -> Self {
        let callback: Callback<E> = Rc::new(callback);
        self.on_validation_success = Some(callback);
        self
    }

    pub fn on_error(mut self, callback: impl Fn(&E, &ValidationConfig<E>) + 'static) -> Self {
        let callback: Callback<E> = Rc::new(callback);
        self.on_validation_error = Some(callback);
        self
    }
}

impl<E> Default for ConfigOverrides<E> {
    fn default() -> Self {
        Self {
            form_selector: None,
            required: None,
            min_length: None,
            max_length: None,
            email_validation: None,
            check_password_security: None,
            password_pattern: None,
            custom_pattern: None,
            trigger_event: None,
            toast_position: None,
            toast_timeout_ms: None,
            toast_theme: None,
            required_title: None,
            required_text: None,
            required_icon: None,
            min_length_title: None,
            min_length_text: None,
            min_length_icon: None,
            max_length_title: None,
            max_length_text: None,
            max_length_icon: None,
            email_title: None,
            email_text: None,
            email_icon: None,
            password_title: None,
            password_text: None,
            password_icon: None,
            custom_title: None,
            custom_text: None,
            custom_icon: None,
            on_validation_success: None,
            on_validation_error: None,
        }
    }
}

impl<E> fmt::Debug for ConfigOverrides<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("form_selector", &self.form_selector)
            .field("required", &self.required)
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .field("email_validation", &self.email_validation)
            .field("check_password_security", &self.check_password_security)
            .field("password_pattern", &self.password_pattern)
            .field("custom_pattern", &self.custom_pattern)
            .field("trigger_event", &self.trigger_event)
            .field("on_validation_success", &self.on_validation_success.is_some())
            .field("on_validation_error", &self.on_validation_error.is_some())
            .finish_non_exhaustive()
    }
}
