// File: src/options.rs
// Purpose: Reading targets and configs passed from JavaScript

use field_guard_core::{ConfigError, ConfigOverrides, FieldSpec, Target, ValidationConfig};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not read config: {0}")]
    Malformed(String),
}

fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

/// `value` as a JS value, or `undefined` (logged) when it cannot be converted
pub fn callback_argument<T: Serialize + ?Sized>(value: &T, callback: &str) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|err| {
        error!(callback, error = %err, "value could not be passed to callback");
        JsValue::UNDEFINED
    })
}

/// Wraps a JS function as a callback receiving the element and the effective
/// config as a plain object
fn js_callback(
    function: Function,
    name: &'static str,
) -> impl Fn(&Element, &ValidationConfig<Element>) + 'static {
    move |element: &Element, config: &ValidationConfig<Element>| {
        let element: &JsValue = element.as_ref();
        let config = callback_argument(config, name);
        if let Err(err) = function.call2(&JsValue::NULL, element, &config) {
            error!(callback = name, error = ?err, "callback threw");
        }
    }
}

fn function_at(config: &JsValue, key: &str) -> Option<Function> {
    Reflect::get(config, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

/// Overrides from a JS config object. `undefined` and `null` mean defaults.
pub fn overrides_from_js(config: &JsValue) -> Result<ConfigOverrides<Element>, OptionsError> {
    if is_absent(config) {
        return Ok(ConfigOverrides::default());
    }

    let mut overrides: ConfigOverrides<Element> = serde_wasm_bindgen::from_value(config.clone())
        .map_err(|err| OptionsError::Malformed(err.to_string()))?;

    if let Some(function) = function_at(config, "onValidationSuccess") {
        overrides = overrides.on_success(js_callback(function, "onValidationSuccess"));
    }
    if let Some(function) = function_at(config, "onValidationError") {
        overrides = overrides.on_error(js_callback(function, "onValidationError"));
    }

    Ok(overrides)
}

/// Locator of a batch entry, read from `locator` or `input`
fn entry_locator(entry: &JsValue) -> String {
    ["locator", "input"]
        .iter()
        .find_map(|key| {
            Reflect::get(entry, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
        })
        .unwrap_or_default()
}

/// Target and top-level overrides from the constructor arguments.
///
/// Batch entries whose config cannot be read are logged and dropped; entries
/// without a locator are kept so the validator reports them.
pub fn target_from_js(
    target: &JsValue,
    config: &JsValue,
) -> Result<(Target<Element>, ConfigOverrides<Element>), OptionsError> {
    if is_absent(target) {
        return Err(ConfigError::MissingTarget.into());
    }

    if let Some(locator) = target.as_string() {
        return Ok((Target::Single(locator), overrides_from_js(config)?));
    }

    if Array::is_array(target) {
        let entries = Array::from(target);
        let mut specs = Vec::with_capacity(entries.length() as usize);
        for entry in entries.iter() {
            let locator = entry_locator(&entry);
            let entry_config = Reflect::get(&entry, &JsValue::from_str("config")).unwrap_or(JsValue::UNDEFINED);
            match overrides_from_js(&entry_config) {
                Ok(overrides) => specs.push(FieldSpec::new(locator, overrides)),
                Err(err) => error!(locator = %locator, error = %err, "field skipped"),
            }
        }
        return Ok((Target::Many(specs), ConfigOverrides::default()));
    }

    let kind = target.js_typeof().as_string().unwrap_or_default();
    Err(ConfigError::InvalidTarget(kind).into())
}
