// File: src/host.rs
// Purpose: Capabilities the validator needs from its host page

use crate::toast::Toast;

/// Access to the document the fields live in.
///
/// Implemented over `web_sys` in the browser and by in-memory trees in tests.
pub trait Dom {
    type Element: Clone + 'static;

    /// First element matching `locator`
    fn query(&self, locator: &str) -> Option<Self::Element>;

    fn is_input(&self, element: &Self::Element) -> bool;

    fn is_form(&self, element: &Self::Element) -> bool;

    /// Nearest ancestor form of `element`
    fn closest_form(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Current value of an input element
    fn value(&self, element: &Self::Element) -> String;

    /// Stops `form` from navigating when it is submitted
    fn prevent_submit(&self, form: &Self::Element);

    /// Runs `handler` every time `event` fires on `element`, for the lifetime
    /// of the page
    fn listen(&self, element: &Self::Element, event: &str, handler: Box<dyn FnMut()>);
}

/// Shows toasts. Must return without waiting for the toast to close.
pub trait Notifier {
    fn present(&self, toast: &Toast);
}
