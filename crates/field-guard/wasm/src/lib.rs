//! field-guard WASM
//!
//! Browser bindings for field-guard. Fields are looked up with CSS
//! selectors, checked on their trigger event, and failures are shown through
//! a toast function supplied by the page.
//!
//! # Example (JavaScript)
//! ```javascript
//! import Swal from "sweetalert2";
//! import { FieldGuard } from "field-guard-wasm";
//!
//! new FieldGuard("#email", {
//!     required: true,
//!     emailValidation: true,
//!     onValidationError: (input, config) => input.classList.add("invalid"),
//! }, Swal.fire.bind(Swal));
//!
//! new FieldGuard([
//!     { locator: "#name", config: { required: true, minLength: 3 } },
//!     { locator: "#password", config: { checkPasswordSecurity: true } },
//! ], null, Swal.fire.bind(Swal));
//! ```

use std::rc::Rc;

use field_guard_core::Validator;
use js_sys::Function;
use tracing::error;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod logging;
pub mod options;
pub mod toast;

pub use dom::WebDom;
pub use toast::JsToast;

/// Panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init(tracing::Level::INFO);
}

/// Validator bound to fields of the current page.
///
/// The constructor never throws. Problems are logged to the console and
/// the affected fields stay unbound.
#[wasm_bindgen]
pub struct FieldGuard {
    validator: Option<Validator<WebDom, JsToast>>,
}

#[wasm_bindgen]
impl FieldGuard {
    /// `target` is a selector string or an array of `{ locator, config }`
    /// (`input` is accepted for `locator`). `toast` receives the toast options
    /// object.
    #[wasm_bindgen(constructor)]
    pub fn new(target: JsValue, config: JsValue, toast: Function) -> FieldGuard {
        let Some(dom) = WebDom::from_window() else {
            error!("no document available, nothing bound");
            return FieldGuard { validator: None };
        };
        let dom = Rc::new(dom);
        let notifier = Rc::new(JsToast::new(toast));

        let validator = match options::target_from_js(&target, &config) {
            Ok((target, overrides)) => Validator::new(dom, notifier, target, overrides),
            Err(err) => {
                error!(error = %err, "validator not constructed");
                Validator::empty(dom, notifier)
            }
        };

        FieldGuard {
            validator: Some(validator),
        }
    }

    /// Number of fields that were bound
    #[wasm_bindgen(getter, js_name = bindingCount)]
    pub fn binding_count(&self) -> usize {
        self.validator
            .as_ref()
            .map_or(0, |validator| validator.bindings().len())
    }

    /// Evaluates every bound field now, as if its trigger event fired.
    /// Returns whether all of them passed.
    #[wasm_bindgen(js_name = validateAll)]
    pub fn validate_all(&self) -> bool {
        let Some(validator) = &self.validator else {
            return true;
        };
        validator
            .bindings()
            .iter()
            .map(|binding| validator.evaluate(binding).is_valid())
            .fold(true, |all, valid| all && valid)
    }
}
