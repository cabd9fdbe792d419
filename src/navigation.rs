use std::cell::Cell;
use std::rc::Rc;

use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions};

use crate::config::ANCHOR_OFFSET;
use crate::dom::{self, ACTIVE};
use crate::error::PageError;

/// Selector for an in-page anchor's target, or `None` for a bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href == "#" {
        None
    } else {
        Some(href)
    }
}

pub fn anchor_scroll_top(target_top: f64, page_offset: f64) -> f64 {
    target_top + page_offset - ANCHOR_OFFSET
}

/// Burger menu plus smooth scrolling for `#section` links.
pub struct Navigation {
    document: Document,
    burger: Element,
    nav: Element,
    menu_open: Cell<bool>,
}

impl Navigation {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let (burger, nav) = match (
            document.get_element_by_id("burger"),
            document.get_element_by_id("nav"),
        ) {
            (Some(burger), Some(nav)) => (burger, nav),
            _ => return Ok(None),
        };
        let controller = Rc::new(Self {
            document: document.clone(),
            burger,
            nav,
            menu_open: Cell::new(false),
        });

        {
            let c = controller.clone();
            dom::listen(&controller.burger, "click", move |_| c.toggle_menu())?;
        }

        for link in dom::query_all_in(&controller.nav, ".header-nav-link")? {
            let c = controller.clone();
            dom::listen(&link, "click", move |_| c.set_menu_open(false))?;
        }

        for anchor in dom::query_all(document, "a[href^=\"#\"]")? {
            let c = controller.clone();
            let a = anchor.clone();
            dom::listen(&anchor, "click", move |e| {
                e.prevent_default();
                if let Some(href) = a.get_attribute("href") {
                    c.scroll_to_anchor(&href);
                }
            })?;
        }

        Ok(Some(controller))
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    fn toggle_menu(&self) {
        self.set_menu_open(!self.menu_open.get());
    }

    fn set_menu_open(&self, open: bool) {
        self.menu_open.set(open);
        dom::set_class(&self.burger, ACTIVE, open);
        dom::set_class(&self.nav, ACTIVE, open);
        dom::set_scroll_locked(&self.document, open);
    }

    fn scroll_to_anchor(&self, href: &str) {
        let selector = match anchor_target(href) {
            Some(selector) => selector,
            None => return,
        };
        // an id that isn't a valid selector counts as missing
        let target = match self.document.query_selector(selector) {
            Ok(Some(target)) => target,
            _ => return,
        };
        let window = match dom::window() {
            Ok(window) => window,
            Err(_) => return,
        };

        let page_offset = window.page_y_offset().unwrap_or(0.0);
        let top = anchor_scroll_top(target.get_bounding_client_rect().top(), page_offset);

        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("#contacts"), Some("#contacts"));
    }

    #[test]
    fn anchors_stop_short_of_the_fixed_header() {
        assert_eq!(anchor_scroll_top(640.0, 1200.0), 1740.0);
        // target already above the viewport
        assert_eq!(anchor_scroll_top(-300.0, 900.0), 500.0);
    }
}
