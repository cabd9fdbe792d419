//! Small helpers over `web_sys` shared by the controllers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::PageError;

pub const ACTIVE: &str = "active";
pub const LOCKED: &str = "locked";

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

/// Registers `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, PageError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Clears `active` on the whole group, then sets it on the members `pick` selects.
pub fn activate_only<P>(group: &[Element], pick: P)
where
    P: Fn(&Element) -> bool,
{
    for element in group {
        set_class(element, ACTIVE, false);
    }
    for element in group.iter().filter(|el| pick(el)) {
        set_class(element, ACTIVE, true);
    }
}

/// Toggles the body-level flag that stops the page behind an overlay from scrolling.
pub fn set_scroll_locked(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        set_class(&body, LOCKED, locked);
    }
}

pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", name))
}
