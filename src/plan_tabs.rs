use std::rc::Rc;

use web_sys::{Document, Element};

use crate::dom;
use crate::error::PageError;

/// Floor plan category tabs. Each panel also carries its own 2D/3D toggle,
/// see [`ViewToggle`].
pub struct PlanTabs {
    tabs: Vec<Element>,
    panels: Vec<Element>,
}

impl PlanTabs {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let tabs = dom::query_all(document, ".plans-tab")?;
        let panels = dom::query_all(document, ".plans-panel")?;
        if tabs.is_empty() && panels.is_empty() {
            return Ok(None);
        }
        let controller = Rc::new(Self { tabs, panels });

        for (index, tab) in controller.tabs.iter().enumerate() {
            let c = controller.clone();
            dom::listen(tab, "click", move |_| c.select_tab(index))?;
        }

        for panel in &controller.panels {
            ViewToggle::init(panel)?;
        }

        Ok(Some(controller))
    }

    fn select_tab(&self, index: usize) {
        let tab = match self.tabs.get(index) {
            Some(tab) => tab,
            None => return,
        };
        let key = dom::data_attr(tab, "tab");

        dom::activate_only(&self.tabs, |t| t == tab);
        dom::activate_only(&self.panels, |panel| {
            key.is_some() && dom::data_attr(panel, "panel") == key
        });
    }
}

/// 2D/3D image switch scoped to a single plans panel.
pub struct ViewToggle {
    buttons: Vec<Element>,
    images: Vec<Element>,
}

impl ViewToggle {
    pub fn init(panel: &Element) -> Result<Rc<Self>, PageError> {
        let controller = Rc::new(Self {
            buttons: dom::query_all_in(panel, ".plans-toggle-btn")?,
            images: dom::query_all_in(panel, ".plans-image")?,
        });

        for (index, button) in controller.buttons.iter().enumerate() {
            let c = controller.clone();
            dom::listen(button, "click", move |_| c.select_view(index))?;
        }

        Ok(controller)
    }

    fn select_view(&self, index: usize) {
        let button = match self.buttons.get(index) {
            Some(button) => button,
            None => return,
        };
        let view = dom::data_attr(button, "view");

        dom::activate_only(&self.buttons, |b| b == button);
        dom::activate_only(&self.images, |img| {
            view.is_some() && dom::data_attr(img, "view") == view
        });
    }
}
