//! Show/hide contract shared by every overlay on the page (video lightbox,
//! form success confirmation, ...): `active` on the modal plus a scroll lock.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, Window};

use crate::dom::{self, ACTIVE};
use crate::error::PageError;

pub fn show(document: &Document, modal: &Element) {
    dom::set_class(modal, ACTIVE, true);
    dom::set_scroll_locked(document, true);
}

pub fn hide(document: &Document, modal: &Element) {
    dom::set_class(modal, ACTIVE, false);
    dom::set_scroll_locked(document, false);
}

pub fn is_open(modal: &Element) -> bool {
    dom::has_class(modal, ACTIVE)
}

/// Hides the modal with the given id. Unknown ids are ignored.
pub fn close_modal(document: &Document, id: &str) {
    if let Some(modal) = document.get_element_by_id(id) {
        hide(document, &modal);
    }
}

/// Publishes `window.closeModal(id)` so inline handlers in the markup can
/// dismiss modals too.
pub fn expose_close_modal(window: &Window) -> Result<(), PageError> {
    let callback = Closure::<dyn FnMut(String)>::new(move |id: String| {
        match dom::document() {
            Ok(document) => close_modal(&document, &id),
            Err(e) => log::warn!("closeModal({}) failed: {}", id, e),
        }
    });
    Reflect::set(window, &JsValue::from_str("closeModal"), callback.as_ref())?;
    callback.forget();
    Ok(())
}
