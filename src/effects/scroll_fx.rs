//! Scroll-linked effects: parallax layers, the reading progress bar, and the
//! nav link that tracks the current section.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::config::ACTIVE_SECTION_OFFSET;
use crate::dom::{query_all, Listener};

const DEFAULT_SPEED: f64 = 0.5;

pub fn parse_speed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_SPEED)
}

pub fn parallax_transform(scroll_y: f64, speed: f64) -> String {
    let offset = scroll_y * speed;
    if offset == 0.0 {
        return "translateY(0px)".to_string();
    }
    format!("translateY({}px)", -offset)
}

pub fn progress_percent(scroll_y: f64, scroll_height: f64, inner_height: f64) -> f64 {
    let scrollable = scroll_height - inner_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// The section the reader is in. Later sections win ties, matching document order.
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| {
            let top = s.offset_top - ACTIVE_SECTION_OFFSET;
            scroll_y > top && scroll_y <= top + s.height
        })
        .last()
        .map(|s| s.id.as_str())
}

struct Parallax {
    element: HtmlElement,
    speed: f64,
}

struct NavSection {
    element: HtmlElement,
    id: String,
}

struct ScrollScene {
    window: Window,
    document: Document,
    parallax: Vec<Parallax>,
    progress_bar: Option<HtmlElement>,
    sections: Vec<NavSection>,
    nav_links: Vec<Element>,
}

impl ScrollScene {
    fn collect(window: &Window, document: &Document) -> Self {
        let parallax = query_all(document, ".parallax")
            .into_iter()
            .filter_map(|el| {
                let speed = parse_speed(el.get_attribute("data-speed").as_deref());
                el.dyn_into::<HtmlElement>()
                    .ok()
                    .map(|element| Parallax { element, speed })
            })
            .collect();

        let sections = query_all(document, "section[id]")
            .into_iter()
            .filter_map(|el| {
                let id = el.id();
                el.dyn_into::<HtmlElement>()
                    .ok()
                    .map(|element| NavSection { element, id })
            })
            .collect();

        let progress_bar = document
            .query_selector(".scroll-progress")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Self {
            window: window.clone(),
            document: document.clone(),
            parallax,
            progress_bar,
            sections,
            nav_links: query_all(document, ".nav-menu a"),
        }
    }

    fn is_empty(&self) -> bool {
        self.parallax.is_empty() && self.progress_bar.is_none() && self.sections.is_empty()
    }

    fn update(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);

        for layer in &self.parallax {
            let _ = layer
                .element
                .style()
                .set_property("transform", &parallax_transform(scroll_y, layer.speed));
        }

        if let Some(bar) = &self.progress_bar {
            let scroll_height = self
                .document
                .document_element()
                .map(|root| root.scroll_height() as f64)
                .unwrap_or(0.0);
            let inner_height = self
                .window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            let percent = progress_percent(scroll_y, scroll_height, inner_height);
            let _ = bar.style().set_property("width", &format!("{}%", percent));
        }

        if !self.sections.is_empty() {
            let boxes: Vec<SectionBox> = self
                .sections
                .iter()
                .map(|s| SectionBox {
                    id: s.id.clone(),
                    offset_top: s.element.offset_top() as f64,
                    height: s.element.offset_height() as f64,
                })
                .collect();
            if let Some(id) = active_section(scroll_y, &boxes) {
                self.highlight(id);
            }
        }
    }

    fn highlight(&self, id: &str) {
        let wanted = format!("#{}", id);
        let has_link = self
            .nav_links
            .iter()
            .any(|link| link.get_attribute("href").as_deref() == Some(wanted.as_str()));
        if !has_link {
            return;
        }
        for link in &self.nav_links {
            let is_current = link.get_attribute("href").as_deref() == Some(wanted.as_str());
            let _ = link.class_list().toggle_with_force("active", is_current);
        }
    }
}

/// One passive scroll listener drives all three effects. `None` when the page
/// has nothing for them to do.
pub fn install(window: &Window, document: &Document) -> Result<Option<Listener>, JsValue> {
    let scene = ScrollScene::collect(window, document);
    if scene.is_empty() {
        return Ok(None);
    }
    log::debug!(
        "scroll effects: {} parallax layers, {} sections",
        scene.parallax.len(),
        scene.sections.len()
    );
    let listener = Listener::passive(window.as_ref(), "scroll", move |_| scene.update())?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        ["hero", "services", "pricing"]
            .iter()
            .enumerate()
            .map(|(i, id)| SectionBox {
                id: id.to_string(),
                offset_top: i as f64 * 800.0,
                height: 800.0,
            })
            .collect()
    }

    #[test]
    fn speed_defaults() {
        assert_eq!(parse_speed(None), 0.5);
        assert_eq!(parse_speed(Some("0.2")), 0.2);
        assert_eq!(parse_speed(Some("fast")), 0.5);
        assert_eq!(parse_speed(Some("NaN")), 0.5);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_transform(200.0, 0.5), "translateY(-100px)");
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    }

    #[test]
    fn progress_bar_width() {
        assert_eq!(progress_percent(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(progress_percent(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(progress_percent(2500.0, 3000.0, 1000.0), 100.0);
        assert_eq!(progress_percent(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn picks_section_under_offset_line() {
        let sections = sections();
        assert_eq!(active_section(-150.0, &sections), None);
        assert_eq!(active_section(0.0, &sections), Some("hero"));
        assert_eq!(active_section(700.0, &sections), Some("hero"));
        assert_eq!(active_section(701.0, &sections), Some("services"));
        assert_eq!(active_section(1600.0, &sections), Some("pricing"));
        assert_eq!(active_section(5000.0, &sections), None);
    }
}
