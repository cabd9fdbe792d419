use std::rc::Rc;

use web_sys::{Document, Element};

use crate::dom::{self, ACTIVE};
use crate::error::PageError;

/// Which item is open after `clicked` is pressed while `open` was expanded.
pub fn next_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// Accordion where at most one answer is expanded.
pub struct FaqAccordion {
    items: Vec<Element>,
}

impl FaqAccordion {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let items = dom::query_all(document, ".faq-item")?;
        if items.is_empty() {
            return Ok(None);
        }
        let controller = Rc::new(Self { items });

        for (index, item) in controller.items.iter().enumerate() {
            let question = match item.query_selector(".faq-question")? {
                Some(q) => q,
                None => continue,
            };
            let c = controller.clone();
            dom::listen(&question, "click", move |_| c.toggle(index))?;
        }

        Ok(Some(controller))
    }

    fn toggle(&self, index: usize) {
        let clicked_was_open = self
            .items
            .get(index)
            .map_or(false, |item| dom::has_class(item, ACTIVE));
        let open = if clicked_was_open { Some(index) } else { None };
        let next = next_open(open, index);

        dom::activate_only(&self.items, |item| {
            next.and_then(|i| self.items.get(i)) == Some(item)
        });
    }
}
