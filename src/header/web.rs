use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window,
};

use super::coordinator::{HeaderCoordinator, Page};
use super::dispatch::ClickTarget;
use super::state::HeaderFlags;
use crate::config::HeaderConfig;
use crate::dom::Listener;
use crate::effects::reveal;

const HIDDEN_CLASS: &str = "header--hidden";
const STICKY_CLASS: &str = "header--sticky";
const ACTIVE_CLASS: &str = "active";

/// Live document behind the coordinator. Element references are looked up
/// once when the page is wired.
pub struct WebPage {
    window: Window,
    document: Document,
    header: Option<HtmlElement>,
    toggle: Option<Element>,
    menu: Option<Element>,
    body: Option<HtmlElement>,
}

impl WebPage {
    pub fn new(window: &Window, document: &Document) -> Self {
        let header = document
            .get_element_by_id("header")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let toggle = document.query_selector(".menu-toggle").ok().flatten();
        let menu = document.query_selector(".nav-menu").ok().flatten();

        if header.is_none() {
            log::warn!("#header not found, sticky header disabled");
        }
        if toggle.is_none() || menu.is_none() {
            log::warn!("mobile menu markup incomplete, menu toggle disabled");
        }

        Self {
            window: window.clone(),
            document: document.clone(),
            header,
            toggle,
            menu,
            body: document.body(),
        }
    }

    pub fn click_target(&self, target: Option<EventTarget>) -> ClickTarget {
        let Some(node) = target.and_then(|t| t.dyn_into::<Node>().ok()) else {
            return ClickTarget::default();
        };
        let within = |container: &Option<Element>| {
            container
                .as_ref()
                .map_or(false, |c| c.contains(Some(&node)))
        };

        // text nodes have no `closest`
        let element = match node.dyn_ref::<Element>() {
            Some(el) => Some(el.clone()),
            None => node.parent_element(),
        };
        let anchor_href = element
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
            .and_then(|a| a.get_attribute("href"));

        ClickTarget {
            inside_toggle: within(&self.toggle),
            inside_menu: within(&self.menu),
            anchor_href,
        }
    }
}

impl Page for WebPage {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn apply_header_flags(&self, flags: HeaderFlags) {
        if let Some(header) = &self.header {
            let classes = header.class_list();
            let _ = classes.toggle_with_force(HIDDEN_CLASS, flags.hidden);
            let _ = classes.toggle_with_force(STICKY_CLASS, flags.sticky);
        }
    }

    fn has_menu(&self) -> bool {
        self.toggle.is_some() && self.menu.is_some()
    }

    fn set_menu_active(&self, open: bool) {
        for el in [&self.menu, &self.toggle].into_iter().flatten() {
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
    }

    fn body_overflow(&self) -> String {
        self.body
            .as_ref()
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    fn set_body_overflow(&self, value: &str) {
        let Some(body) = &self.body else { return };
        let style = body.style();
        let result = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
        if let Err(e) = result {
            log::warn!("could not set body overflow: {:?}", e);
        }
    }

    fn target_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(|h| h.offset_height() as f64)
    }

    fn reveal_section(&self, id: &str) {
        if let Some(section) = self.document.get_element_by_id(id) {
            reveal::force_show_section(&section);
        }
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn push_fragment(&self, href: &str) {
        if let Ok(history) = self.window.history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
                log::warn!("pushState failed: {:?}", e);
            }
        }
    }
}

/// Wired header: dropping it detaches the scroll and click listeners.
pub struct HeaderBindings {
    _scroll: Listener,
    _click: Listener,
}

pub fn install(window: &Window, document: &Document) -> Result<HeaderBindings, JsValue> {
    let page = WebPage::new(window, document);
    let coordinator = Rc::new(RefCell::new(HeaderCoordinator::new(
        page,
        HeaderConfig::default(),
    )));

    let scroll = {
        let coordinator = coordinator.clone();
        let frame_window = window.clone();
        Listener::passive(window.as_ref(), "scroll", move |_| {
            if !coordinator.borrow_mut().on_scroll_event() {
                return;
            }
            let frame_coordinator = coordinator.clone();
            let frame = Closure::once_into_js(move || frame_coordinator.borrow_mut().on_frame());
            if let Err(e) = frame_window.request_animation_frame(frame.unchecked_ref()) {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                coordinator.borrow_mut().cancel_frame();
            }
        })?
    };

    let click = {
        let coordinator = coordinator.clone();
        Listener::new(document.as_ref(), "click", move |event| {
            let target = coordinator.borrow().page().click_target(event.target());
            let outcome = coordinator.borrow_mut().on_click(&target);
            if outcome.prevent_default {
                event.prevent_default();
                event.stop_propagation();
            }
        })?
    };

    log::info!("header coordinator attached");
    Ok(HeaderBindings {
        _scroll: scroll,
        _click: click,
    })
}
