// File: src/dom.rs
// Purpose: Dom capability over the browser document

use field_guard_core::Dom;
use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

/// The page's `document`
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// `window.document`, if running in a page
    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }
}

impl Dom for WebDom {
    type Element = Element;

    fn query(&self, locator: &str) -> Option<Element> {
        match self.document.query_selector(locator) {
            Ok(found) => found,
            Err(err) => {
                warn!(locator, error = ?err, "invalid selector");
                None
            }
        }
    }

    fn is_input(&self, element: &Element) -> bool {
        element.tag_name().eq_ignore_ascii_case("input")
    }

    fn is_form(&self, element: &Element) -> bool {
        element.tag_name().eq_ignore_ascii_case("form")
    }

    fn closest_form(&self, element: &Element) -> Option<Element> {
        element.closest("form").ok().flatten()
    }

    fn value(&self, element: &Element) -> String {
        element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn prevent_submit(&self, form: &Element) {
        let guard = Closure::<dyn FnMut(Event)>::new(|event: Event| event.prevent_default());
        if let Err(err) = form.add_event_listener_with_callback("submit", guard.as_ref().unchecked_ref()) {
            error!(error = ?err, "could not intercept form submission");
        }
        // bindings live as long as the page
        guard.forget();
    }

    fn listen(&self, element: &Element, event: &str, handler: Box<dyn FnMut()>) {
        let listener = Closure::wrap(handler);
        if let Err(err) = element.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
            error!(event, error = ?err, "could not attach listener");
        }
        listener.forget();
    }
}
