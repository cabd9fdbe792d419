use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlVideoElement, KeyboardEvent};

use crate::dom;
use crate::error::PageError;
use crate::modal;

/// Lightbox that plays a gallery card's `data-video` clip.
pub struct VideoLightbox {
    document: Document,
    modal: Element,
    video: HtmlVideoElement,
}

impl VideoLightbox {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        let modal = match document.get_element_by_id("videoModal") {
            Some(el) => el,
            None => return Ok(None),
        };
        let video = match document
            .get_element_by_id("modalVideo")
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
        {
            Some(video) => video,
            None => {
                log::warn!("#videoModal has no #modalVideo, gallery stays inert");
                return Ok(None);
            }
        };
        let controller = Rc::new(Self {
            document: document.clone(),
            modal,
            video,
        });

        for card in dom::query_all(document, ".gallery-card[data-video]")? {
            let c = controller.clone();
            let source = dom::data_attr(&card, "video");
            dom::listen(&card, "click", move |_| match source.as_deref() {
                Some(src) if !src.is_empty() => c.open(src),
                _ => {}
            })?;
        }

        for selector in [".modal-close", ".modal-backdrop"] {
            if let Some(trigger) = controller.modal.query_selector(selector)? {
                let c = controller.clone();
                dom::listen(&trigger, "click", move |_| c.close())?;
            }
        }

        {
            let c = controller.clone();
            dom::listen(document, "keydown", move |e| {
                let escape = e
                    .dyn_ref::<KeyboardEvent>()
                    .map_or(false, |key| key.key() == "Escape");
                if escape && modal::is_open(&c.modal) {
                    c.close();
                }
            })?;
        }

        Ok(Some(controller))
    }

    fn open(&self, src: &str) {
        log::debug!("opening video {}", src);
        self.video.set_src(src);
        modal::show(&self.document, &self.modal);

        // autoplay may be refused, the visitor can still press play
        if let Ok(promise) = self.video.play() {
            spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
    }

    fn close(&self) {
        modal::hide(&self.document, &self.modal);
        let _ = self.video.pause();
        self.video.set_current_time(0.0);
        self.video.set_src("");
    }
}
