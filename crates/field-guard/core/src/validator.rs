// File: src/validator.rs
// Purpose: Binding fields to the document and evaluating them

use std::rc::Rc;

use tracing::{debug, error, warn};

use crate::checks::Check;
use crate::config::{ConfigOverrides, ValidationConfig};
use crate::error::{BindError, ConfigError};
use crate::host::{Dom, Notifier};

/// One field to bind, with its own configuration
pub struct FieldSpec<E> {
    pub locator: String,
    pub config: ConfigOverrides<E>,
}

impl<E> FieldSpec<E> {
    pub fn new(locator: impl Into<String>, config: ConfigOverrides<E>) -> Self {
        Self {
            locator: locator.into(),
            config,
        }
    }
}

/// What a [`Validator`] is constructed for
pub enum Target<E> {
    /// A single locator, configured by the constructor's config argument
    Single(String),
    /// Several locators, each carrying its own config
    Many(Vec<FieldSpec<E>>),
}

impl<E> From<&str> for Target<E> {
    fn from(locator: &str) -> Self {
        Target::Single(locator.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(locator: String) -> Self {
        Target::Single(locator)
    }
}

impl<E> From<Vec<FieldSpec<E>>> for Target<E> {
    fn from(specs: Vec<FieldSpec<E>>) -> Self {
        Target::Many(specs)
    }
}

/// A field wired to its trigger event
#[derive(Debug)]
pub struct Binding<E> {
    locator: String,
    element: E,
    form: E,
    config: Rc<ValidationConfig<E>>,
}

impl<E> Binding<E> {
    pub fn locator(&self) -> &str {
        &self.locator
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Owning form, whose submission is intercepted
    pub fn form(&self) -> &E {
        &self.form
    }

    pub fn config(&self) -> &ValidationConfig<E> {
        &self.config
    }
}

/// Outcome of one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Failed checks, in evaluation order
    pub failed: Vec<Check>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every enabled check against the current value of `element`.
///
/// No check short-circuits another: each failure presents its own toast as
/// soon as it is found. Afterwards exactly one of the success or error
/// callbacks runs.
pub fn evaluate<D, N>(
    dom: &D,
    notifier: &N,
    element: &D::Element,
    config: &ValidationConfig<D::Element>,
) -> Report
where
    D: Dom + ?Sized,
    N: Notifier + ?Sized,
{
    let value = dom.value(element);
    let mut report = Report::default();

    for check in Check::ORDER {
        if !check.is_enabled(config) || check.passes(&value, config) {
            continue;
        }
        notifier.present(&config.toast_for(check));
        report.failed.push(check);
    }

    if report.is_valid() {
        (config.on_validation_success)(element, config);
    } else {
        debug!(failed = ?report.failed, "field failed validation");
        (config.on_validation_error)(element, config);
    }

    report
}

/// Field validator bound to a document.
///
/// Construction never fails: problems are logged and the affected field is
/// left unbound. Bindings stay active for the lifetime of the page.
pub struct Validator<D: Dom, N: Notifier> {
    dom: Rc<D>,
    notifier: Rc<N>,
    bindings: Vec<Binding<D::Element>>,
}

impl<D, N> Validator<D, N>
where
    D: Dom + 'static,
    N: Notifier + 'static,
{
    /// Validator with no bindings
    pub fn empty(dom: Rc<D>, notifier: Rc<N>) -> Self {
        Self {
            dom,
            notifier,
            bindings: Vec::new(),
        }
    }

    /// Binds `target`.
    ///
    /// For [`Target::Single`] the locator is configured by `config`. For
    /// [`Target::Many`] every entry brings its own config and `config` is not
    /// used. A failing entry does not stop the rest.
    pub fn new(
        dom: Rc<D>,
        notifier: Rc<N>,
        target: impl Into<Target<D::Element>>,
        config: ConfigOverrides<D::Element>,
    ) -> Self {
        let mut validator = Self::empty(dom, notifier);

        match target.into() {
            Target::Single(locator) => validator.bind_logged(&locator, config),
            Target::Many(specs) if specs.is_empty() => {
                error!(error = %ConfigError::MissingTarget, "validator not constructed");
            }
            Target::Many(specs) => {
                for spec in specs {
                    validator.bind_logged(&spec.locator, spec.config);
                }
            }
        }

        validator
    }

    fn bind_logged(&mut self, locator: &str, config: ConfigOverrides<D::Element>) {
        match self.bind(locator, config) {
            Ok(_) => {}
            Err(err @ BindError::FormNotFound(_)) => warn!(locator, error = %err, "field not bound"),
            Err(err) => error!(locator, error = %err, "field not bound"),
        }
    }

    /// Binds one field and returns the new binding.
    ///
    /// A field without an owning form is left unbound: neither the submit
    /// guard nor the trigger is installed.
    pub fn bind(
        &mut self,
        locator: &str,
        overrides: ConfigOverrides<D::Element>,
    ) -> Result<&Binding<D::Element>, BindError> {
        if locator.trim().is_empty() {
            return Err(ConfigError::MissingTarget.into());
        }

        let config = Rc::new(ValidationConfig::from_overrides(overrides)?);

        let element = self
            .dom
            .query(locator)
            .ok_or_else(|| BindError::ElementNotFound(locator.to_string()))?;
        if !self.dom.is_input(&element) {
            return Err(BindError::NotAnInput(locator.to_string()));
        }

        let form = self
            .resolve_form(&element, &config)
            .ok_or_else(|| BindError::FormNotFound(locator.to_string()))?;
        self.dom.prevent_submit(&form);

        let handler = {
            let dom = Rc::clone(&self.dom);
            let notifier = Rc::clone(&self.notifier);
            let element = element.clone();
            let config = Rc::clone(&config);
            move || {
                evaluate(&*dom, &*notifier, &element, &config);
            }
        };
        self.dom.listen(&element, &config.trigger_event, Box::new(handler));

        debug!(locator, event = %config.trigger_event, "field bound");

        self.bindings.push(Binding {
            locator: locator.to_string(),
            element,
            form,
            config,
        });
        Ok(&self.bindings[self.bindings.len() - 1])
    }

    /// Explicit selector first, then the nearest ancestor. A selector that
    /// matches something other than a form does not fall back.
    fn resolve_form(
        &self,
        element: &D::Element,
        config: &ValidationConfig<D::Element>,
    ) -> Option<D::Element> {
        let candidate = config
            .form_selector
            .as_deref()
            .and_then(|selector| self.dom.query(selector))
            .or_else(|| self.dom.closest_form(element));

        candidate.filter(|form| self.dom.is_form(form))
    }

    /// Evaluates a binding now, outside of its trigger event
    pub fn evaluate(&self, binding: &Binding<D::Element>) -> Report {
        evaluate(&*self.dom, &*self.notifier, &binding.element, &binding.config)
    }

    pub fn bindings(&self) -> &[Binding<D::Element>] {
        &self.bindings
    }

    pub fn is_inert(&self) -> bool {
        self.bindings.is_empty()
    }
}
