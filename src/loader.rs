use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::{LOADER_FALLBACK_MS, LOADER_GRACE_MS};
use crate::dom;
use crate::error::PageError;

/// Splash screen shown while the page loads.
pub struct Loader {
    document: Document,
    loader: Element,
    dismissed: Cell<bool>,
}

impl Loader {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let loader = match document.get_element_by_id("loader") {
            Some(el) => el,
            None => return Ok(None),
        };
        let controller = Rc::new(Self {
            document: document.clone(),
            loader,
            dismissed: Cell::new(false),
        });

        let window = dom::window()?;
        {
            let controller = controller.clone();
            dom::listen(&window, "load", move |_| {
                let controller = controller.clone();
                Timeout::new(LOADER_GRACE_MS, move || controller.dismiss()).forget();
            })?;
        }

        // Never leave the page locked if `load` doesn't arrive in time
        {
            let controller = controller.clone();
            Timeout::new(LOADER_FALLBACK_MS, move || controller.dismiss()).forget();
        }

        Ok(Some(controller))
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed.get()
    }

    fn dismiss(&self) {
        if self.dismissed.replace(true) {
            return;
        }
        log::debug!("hiding loader");
        dom::set_class(&self.loader, "hidden", true);
        dom::set_scroll_locked(&self.document, false);
    }
}
