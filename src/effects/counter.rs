use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::config::COUNTER_DURATION_MS;
use crate::dom::{observe_once, query_all, ObserverHandle, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// `1 - (1 - p)^3`
    OutCubic,
    /// `1 - (1 - p)^4`
    OutQuart,
}

impl Easing {
    pub fn apply(self, progress: f64) -> f64 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::OutCubic => 1.0 - (1.0 - p).powi(3),
            Easing::OutQuart => 1.0 - (1.0 - p).powi(4),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: i64,
    pub suffix: String,
    pub easing: Easing,
    /// Group thousands the way the page locale (vi-VN) does.
    pub grouped: bool,
}

impl CounterSpec {
    pub fn value_at(&self, progress: f64) -> i64 {
        (self.target as f64 * self.easing.apply(progress)).floor() as i64
    }

    pub fn text_at(&self, progress: f64) -> String {
        let value = self.value_at(progress);
        let digits = if self.grouped {
            group_digits(value, '.')
        } else {
            value.to_string()
        };
        format!("{}{}", digits, self.suffix)
    }
}

pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Leading-integer parse: `"1500+"` is 1500, `"  -3"` is -3, `"abc"` is nothing.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().ok().map(|n| sign * n)
}

pub fn group_digits(value: i64, separator: char) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Drives `element`'s text from 0 to the target, one step per animation frame.
pub fn animate(window: &Window, element: Element, spec: CounterSpec) {
    let Some(performance) = window.performance() else {
        element.set_text_content(Some(&spec.text_at(1.0)));
        return;
    };
    let start = performance.now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = tick.clone();
    let frame_window = window.clone();

    *handle.borrow_mut() = Some(Closure::new(move |now: f64| {
        let p = progress(now - start, COUNTER_DURATION_MS);
        element.set_text_content(Some(&spec.text_at(p)));

        if p < 1.0 {
            if let Some(next) = tick.borrow().as_ref() {
                let _ = frame_window.request_animation_frame(next.as_ref().unchecked_ref());
            }
        } else {
            let _ = tick.borrow_mut().take();
        }
    }));

    let started = match handle.borrow().as_ref() {
        Some(first) => window
            .request_animation_frame(first.as_ref().unchecked_ref())
            .map(|_| ()),
        None => Ok(()),
    };
    if let Err(e) = started {
        log::warn!("counter could not start: {:?}", e);
    }
}

/// `[data-count]` counters (cubic, grouped) and `.stat-number[data-target]`
/// counters (quartic, plain). Each runs once, when half visible.
pub fn install(window: &Window, document: &Document) -> Result<Vec<ObserverHandle>, JsValue> {
    let mut handles = Vec::new();

    let counts = query_all(document, "[data-count]");
    if !counts.is_empty() {
        let window = window.clone();
        handles.push(observe_once(&counts, half_visible(), move |el| {
            let target = el
                .get_attribute("data-count")
                .and_then(|raw| parse_leading_int(&raw))
                .unwrap_or(0);
            let spec = CounterSpec {
                target,
                suffix: el.get_attribute("data-suffix").unwrap_or_default(),
                easing: Easing::OutCubic,
                grouped: true,
            };
            animate(&window, el.clone(), spec);
        })?);
    }

    let stats = query_all(document, ".stat-number");
    if !stats.is_empty() {
        let window = window.clone();
        handles.push(observe_once(&stats, half_visible(), move |el| {
            let Some(target) = el
                .get_attribute("data-target")
                .and_then(|raw| parse_leading_int(&raw))
            else {
                return;
            };
            let spec = CounterSpec {
                target,
                suffix: el.get_attribute("data-suffix").unwrap_or_default(),
                easing: Easing::OutQuart,
                grouped: false,
            };
            animate(&window, el.clone(), spec);
        })?);
    }

    Ok(handles)
}

fn half_visible() -> Visibility {
    Visibility {
        threshold: 0.5,
        root_margin: "0px",
    }
}
