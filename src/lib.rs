//! Interactive behavior for the DELOVOY business center landing page.
//!
//! The markup is static; [`run`] finds the elements each feature needs and
//! wires them up. Every controller stands alone and quietly does nothing when
//! its markup isn't on the page.

pub mod animations;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod faq;
pub mod header;
pub mod loader;
pub mod modal;
pub mod navigation;
pub mod plan_tabs;
pub mod video;

use std::rc::Rc;

use log::{debug, info, warn};
use web_sys::Document;

use animations::ScrollAnimations;
use contact::ContactForm;
use error::PageError;
use faq::FaqAccordion;
use header::Header;
use loader::Loader;
use navigation::Navigation;
use plan_tabs::PlanTabs;
use video::VideoLightbox;

/// Initializes every controller once the document has been parsed.
pub fn run() -> Result<(), PageError> {
    let window = dom::window()?;
    let document = dom::document()?;

    modal::expose_close_modal(&window)?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| init_all(&doc))?;
    } else {
        init_all(&document);
    }

    print_banner();
    Ok(())
}

pub fn init_all(document: &Document) {
    report("loader", Loader::init(document));
    report("header", Header::init(document));
    report("navigation", Navigation::init(document));
    report("plan tabs", PlanTabs::init(document));
    report("video gallery", VideoLightbox::init(document));
    report("contact form", ContactForm::init(document));
    report("scroll animations", ScrollAnimations::init(document));
    report("faq", FaqAccordion::init(document));
    info!("page behavior ready");
}

fn report<T>(name: &str, result: Result<Option<Rc<T>>, PageError>) {
    match result {
        Ok(Some(_)) => debug!("{} initialized", name),
        Ok(None) => debug!("{}: markup not found, skipping", name),
        Err(e) => warn!("{} failed to initialize: {}", name, e),
    }
}

const BANNER_BRAND_STYLE: &str = "background: #c9a962; color: #0a0b0d; padding: 8px 16px; \
     font-size: 14px; font-weight: bold; border-radius: 4px 0 0 4px;";
const BANNER_TAG_STYLE: &str = "background: #08090c; color: #f5f5f7; padding: 8px 16px; \
     font-size: 14px; border-radius: 0 4px 4px 0;";

fn print_banner() {
    gloo_console::log!(
        "%c ДЕЛОВОЙ %c Business Center ",
        BANNER_BRAND_STYLE,
        BANNER_TAG_STYLE
    );
}
