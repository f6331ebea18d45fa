pub mod counter;
pub mod extras;
pub mod reveal;
pub mod scroll_fx;

use wasm_bindgen::JsValue;

use crate::dom::{Listener, ObserverHandle};
use crate::header::web::{self as header_web, HeaderBindings};

/// Everything wired onto the rendered page. Dropping it detaches all of it.
#[derive(Default)]
pub struct PageEffects {
    header: Option<HeaderBindings>,
    observers: Vec<ObserverHandle>,
    listeners: Vec<Listener>,
}

impl PageEffects {
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.observers.is_empty() && self.listeners.is_empty()
    }
}

fn keep<T>(name: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} not installed: {:?}", name, e);
            None
        }
    }
}

/// Installs every enhancement. A part that fails to bind is logged and skipped.
pub fn install_all() -> PageEffects {
    let mut effects = PageEffects::default();
    let Some(window) = web_sys::window() else {
        return effects;
    };
    let Some(document) = window.document() else {
        return effects;
    };

    effects.header = keep("header", header_web::install(&window, &document));

    // classes first, then the observer that watches them
    reveal::prepare(&document);
    effects.observers.extend(keep("reveal", reveal::observe(&document)));

    if let Some(counters) = keep("counters", counter::install(&window, &document)) {
        effects.observers.extend(counters);
    }
    if let Some(Some(images)) = keep("lazy images", extras::lazy_images(&document)) {
        effects.observers.push(images);
    }
    if let Some(Some(typing)) = keep("typing effect", extras::typing_effect(&document)) {
        effects.observers.push(typing);
    }
    if let Some(Some(scroll)) = keep("scroll effects", scroll_fx::install(&window, &document)) {
        effects.listeners.push(scroll);
    }
    if let Some(tilt) = keep("card tilt", extras::tilt_cards(&window, &document)) {
        effects.listeners.extend(tilt);
    }

    log::debug!(
        "{} observers, {} scroll/pointer listeners",
        effects.observers.len(),
        effects.listeners.len()
    );
    effects
}
