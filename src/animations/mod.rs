pub mod counter;

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{
    PARALLAX_SCALE, PARALLAX_SPEED, REVEAL_DELAY_STEP, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR,
    REVEAL_THRESHOLD, STATS_DELAY_MS, STATS_THRESHOLD,
};
use crate::dom;
use crate::error::PageError;
use counter::StatCounter;

pub fn reveal_delay(index: usize) -> String {
    format!("{}s", index as f64 * REVEAL_DELAY_STEP)
}

/// Hero background transform for the given scroll offset. Past the first
/// screen the image is out of view and left where it is.
pub fn parallax_transform(scroll_y: f64, viewport_height: f64) -> Option<String> {
    if scroll_y < viewport_height {
        Some(format!(
            "translateY({}px) scale({})",
            scroll_y * PARALLAX_SPEED,
            PARALLAX_SCALE
        ))
    } else {
        None
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Builds an observer that calls `on_visible` once per element, the first
/// time it intersects, and then stops watching it.
fn observe_once<F>(
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: F,
) -> Result<IntersectionObserver, PageError>
where
    F: FnMut(Element) + 'static,
{
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

/// Reveal-on-scroll, hero parallax and the stats count-up.
pub struct ScrollAnimations {
    stats: Vec<Element>,
    stats_animated: Cell<bool>,
}

impl ScrollAnimations {
    pub fn init(document: &Document) -> Result<Option<Rc<Self>>, PageError> {
        init_reveal(document)?;
        init_parallax(document)?;

        let controller = Rc::new(Self {
            stats: dom::query_all(document, ".hero-stat-value")?,
            stats_animated: Cell::new(false),
        });

        if let Some(hero_stats) = document.query_selector(".hero-stats")? {
            let c = controller.clone();
            let observer = observe_once(STATS_THRESHOLD, None, move |_| {
                let c = c.clone();
                Timeout::new(STATS_DELAY_MS, move || {
                    c.animate_stats();
                })
                .forget();
            })?;
            observer.observe(&hero_stats);
        }

        Ok(Some(controller))
    }

    pub fn stats_animated(&self) -> bool {
        self.stats_animated.get()
    }

    /// Starts the count-up on every stat. Returns `false` if it already ran.
    pub fn animate_stats(&self) -> bool {
        if self.stats_animated.replace(true) {
            return false;
        }
        for stat in &self.stats {
            let text = stat.text_content().unwrap_or_default();
            let counter = match StatCounter::parse(&text) {
                Some(counter) => counter,
                None => {
                    log::debug!("stat {:?} has no number, leaving it alone", text.trim());
                    continue;
                }
            };
            if let Err(e) = counter::animate(stat.clone(), counter) {
                log::warn!("could not animate stat: {}", e);
            }
        }
        true
    }
}

fn init_reveal(document: &Document) -> Result<(), PageError> {
    let elements = dom::query_all(document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }

    let observer = observe_once(REVEAL_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |target| {
        dom::set_class(&target, "animated", true);
    })?;

    for (index, element) in elements.iter().enumerate() {
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_property("transition-delay", &reveal_delay(index))?;
        }
        observer.observe(element);
    }
    log::debug!("watching {} elements for reveal", elements.len());
    Ok(())
}

fn init_parallax(document: &Document) -> Result<(), PageError> {
    let hero_bg = match document
        .query_selector(".hero-bg-image")?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(el) => el,
        None => return Ok(()),
    };

    let window = dom::window()?;
    let win = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        if let Some(transform) = parallax_transform(scroll_y, viewport) {
            let _ = hero_bg.style().set_property("transform", &transform);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_delays_step_by_fifty_milliseconds() {
        assert_eq!(reveal_delay(0), "0s");
        assert_eq!(reveal_delay(1), "0.05s");
        assert_eq!(reveal_delay(10), "0.5s");
    }

    #[test]
    fn parallax_moves_at_a_third_of_scroll_speed() {
        assert_eq!(
            parallax_transform(200.0, 900.0).as_deref(),
            Some("translateY(60px) scale(1.1)")
        );
        assert_eq!(
            parallax_transform(0.0, 900.0).as_deref(),
            Some("translateY(0px) scale(1.1)")
        );
    }

    #[test]
    fn parallax_stops_after_first_screen() {
        assert_eq!(parallax_transform(900.0, 900.0), None);
        assert_eq!(parallax_transform(2400.0, 900.0), None);
    }
}
