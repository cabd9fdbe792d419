use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::{HEADER_HIDE_AFTER, HEADER_SCROLLED_AFTER};
use crate::dom;
use crate::error::PageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Tracks the previous scroll offset so the header can tell which way the
/// visitor is scrolling.
#[derive(Debug, Default)]
pub struct HeaderState {
    last_scroll: f64,
}

impl HeaderState {
    pub fn update(&mut self, scroll_y: f64) -> HeaderFlags {
        let flags = HeaderFlags {
            scrolled: scroll_y > HEADER_SCROLLED_AFTER,
            hidden: scroll_y > self.last_scroll && scroll_y > HEADER_HIDE_AFTER,
        };
        self.last_scroll = scroll_y;
        flags
    }
}

pub struct Header {
    header: Element,
    state: RefCell<HeaderState>,
}

impl Header {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let header = match document.get_element_by_id("header") {
            Some(el) => el,
            None => return Ok(None),
        };
        let controller = Rc::new(Self {
            header,
            state: RefCell::new(HeaderState::default()),
        });

        let window = dom::window()?;
        {
            let controller = controller.clone();
            let win = window.clone();
            dom::listen(&window, "scroll", move |_| {
                if let Ok(scroll_y) = win.scroll_y() {
                    controller.on_scroll(scroll_y);
                }
            })?;
        }

        Ok(Some(controller))
    }

    fn on_scroll(&self, scroll_y: f64) {
        let flags = self.state.borrow_mut().update(scroll_y);

        dom::set_class(&self.header, "scrolled", flags.scrolled);
        dom::set_class(&self.header, "hidden", flags.hidden);
    }
}
