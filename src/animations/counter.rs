//! Count-up effect for the hero statistics ("1 234+", "15 лет", ...).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::COUNTER_DURATION_MS;
use crate::dom;
use crate::error::PageError;

// ru-RU locale formatting separates thousands with a no-break space
const GROUP_SEPARATOR: char = '\u{a0}';

#[derive(Debug, Clone, PartialEq)]
pub struct StatCounter {
    original: String,
    target: u64,
    suffix: String,
    grouped: bool,
}

impl StatCounter {
    /// Reads the first run of digits (spaces allowed inside as thousands
    /// separators) out of `text`. Everything else becomes the suffix.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let is_numeric = |c: char| c.is_ascii_digit() || c.is_whitespace();

        let start = text.find(is_numeric)?;
        let end = text[start..]
            .find(|c: char| !is_numeric(c))
            .map_or(text.len(), |len| start + len);

        let digits: String = text[start..end].chars().filter(|c| !c.is_whitespace()).collect();
        let target = digits.parse::<u64>().ok()?;

        Some(Self {
            original: text.to_string(),
            target,
            suffix: format!("{}{}", &text[..start], &text[end..]),
            grouped: text.contains(' '),
        })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0)
    }

    pub fn frame_text(&self, progress: f64) -> String {
        if progress >= 1.0 {
            return self.original.clone();
        }
        let current = (ease_out_cubic(progress) * self.target as f64).floor() as u64;
        if self.grouped && current >= 1000 {
            format!("{}{}", group_thousands(current), self.suffix)
        } else {
            format!("{}{}", current, self.suffix)
        }
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Runs the count-up on `element`, one step per animation frame.
pub fn animate(element: Element, counter: StatCounter) -> Result<(), PageError> {
    let window = dom::window()?;
    let start = window.performance().map_or(0.0, |p| p.now());

    let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
        let progress = counter.progress(now - start);
        element.set_text_content(Some(&counter.frame_text(progress)));

        if progress < 1.0 {
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(e) = request_frame(callback) {
                    log::warn!("counter stopped: {}", e);
                }
            }
        } else {
            // done, release the closure so the Rc cycle goes away
            let _ = next.borrow_mut().take();
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        request_frame(callback)?;
    }
    Ok(())
}

fn request_frame(callback: &FrameCallback) -> Result<i32, PageError> {
    Ok(dom::window()?.request_animation_frame(callback.as_ref().unchecked_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_spaced_number_with_suffix() {
        let counter = StatCounter::parse("1 234+").unwrap();
        assert_eq!(counter.target(), 1234);
        assert_eq!(counter.suffix, "+");
        assert!(counter.grouped);
    }

    #[test]
    fn plain_numbers_are_not_grouped() {
        let counter = StatCounter::parse("  98%  ").unwrap();
        assert_eq!(counter.target(), 98);
        assert_eq!(counter.suffix, "%");
        assert!(!counter.grouped);
        assert_eq!(counter.frame_text(0.5), "85%");
    }

    #[test]
    fn only_the_first_run_counts() {
        let counter = StatCounter::parse("24/7").unwrap();
        assert_eq!(counter.target(), 24);
        assert_eq!(counter.suffix, "/7");
    }

    #[test]
    fn text_without_digits_is_skipped() {
        assert!(StatCounter::parse("Центр").is_none());
        assert!(StatCounter::parse("").is_none());
        // the first run is only whitespace
        assert!(StatCounter::parse("Бизнес центр 2024").is_none());
    }

    #[test]
    fn counter_climbs_then_lands_on_original_text() {
        let counter = StatCounter::parse("1 234+").unwrap();

        let mut previous = 0;
        for step in 0..20 {
            let text = counter.frame_text(step as f64 / 20.0);
            assert!(text.ends_with('+'));
            let value: u64 = text
                .trim_end_matches('+')
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap();
            assert!(value >= previous);
            assert!(value <= 1234);
            previous = value;
        }

        assert_eq!(counter.frame_text(0.5), "1\u{a0}079+");
        assert_eq!(counter.frame_text(1.0), "1 234+");
    }

    #[test]
    fn small_intermediate_values_render_without_separator() {
        let counter = StatCounter::parse("1 234+").unwrap();
        assert_eq!(counter.frame_text(0.0), "0+");
        assert_eq!(counter.frame_text(0.1), "334+");
    }

    #[test]
    fn progress_is_clamped_to_the_duration() {
        let counter = StatCounter::parse("500").unwrap();
        assert_eq!(counter.progress(-5.0), 0.0);
        assert_eq!(counter.progress(1000.0), 0.5);
        assert_eq!(counter.progress(2500.0), 1.0);
    }

    #[test]
    fn easing_starts_fast_and_ends_at_one() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn thousands_are_grouped_by_three() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1\u{a0}000");
        assert_eq!(group_thousands(1234567), "1\u{a0}234\u{a0}567");
    }
}
