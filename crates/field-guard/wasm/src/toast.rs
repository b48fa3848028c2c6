// File: src/toast.rs
// Purpose: Notifier that hands toasts to a JS function

use field_guard_core::{Notifier, Toast};
use js_sys::{Function, Object, Reflect};
use tracing::error;
use wasm_bindgen::JsValue;

/// Calls a host function with SweetAlert2 style toast options:
///
/// ```javascript
/// { title, text, icon, position, toast: true, showConfirmButton: false, timer, theme }
/// ```
///
/// Passing `Swal.fire` works as is.
pub struct JsToast {
    fire: Function,
}

impl JsToast {
    pub fn new(fire: Function) -> Self {
        Self { fire }
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// Option object for `toast`
pub fn toast_options(toast: &Toast) -> Result<Object, JsValue> {
    let options = Object::new();
    set(&options, "title", &JsValue::from_str(&toast.title))?;
    set(&options, "text", &JsValue::from_str(&toast.message))?;
    set(&options, "icon", &JsValue::from_str(toast.icon.as_str()))?;
    set(&options, "position", &JsValue::from_str(toast.position.as_str()))?;
    set(&options, "toast", &JsValue::TRUE)?;
    set(&options, "showConfirmButton", &JsValue::FALSE)?;
    set(&options, "timer", &JsValue::from_f64(toast.timeout.as_millis() as f64))?;
    if let Some(theme) = &toast.theme {
        set(&options, "theme", &JsValue::from_str(theme))?;
    }
    Ok(options)
}

impl Notifier for JsToast {
    fn present(&self, toast: &Toast) {
        let result = toast_options(toast).and_then(|options| self.fire.call1(&JsValue::NULL, &options));
        if let Err(err) = result {
            error!(title = %toast.title, error = ?err, "toast could not be shown");
        }
    }
}
