//! Console diagnostics for anchor navigation, enabled with `?debug` in the URL.

use gloo_console::log;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::dom::{query_all, Listener};
use crate::header::dispatch::local_fragment;

pub const SECTION_IDS: [&str; 6] = ["hero", "services", "portfolio", "pricing", "faq", "contact"];

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderProbe {
    pub height: i32,
    pub position: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugReport {
    pub sections: Vec<(String, bool)>,
    /// Nav menu links and whether their fragment resolves.
    pub nav_links: Vec<(String, bool)>,
    pub anchor_count: usize,
    pub header: Option<HeaderProbe>,
}

fn mark(found: bool, yes: &str, no: &str) -> String {
    if found {
        format!("✓ {}", yes)
    } else {
        format!("✗ {}", no)
    }
}

impl DebugReport {
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec!["--- Section IDs ---".to_string()];
        for (id, found) in &self.sections {
            out.push(format!("#{}: {}", id, mark(*found, "Found", "Missing")));
        }

        out.push("--- Navigation Links ---".to_string());
        out.push(format!("Found {} navigation links", self.nav_links.len()));
        for (i, (href, found)) in self.nav_links.iter().enumerate() {
            out.push(format!(
                "{}. {}: {}",
                i + 1,
                href,
                mark(*found, "Target exists", "Target missing")
            ));
        }

        out.push("--- Anchors ---".to_string());
        out.push(format!("Total anchor links: {}", self.anchor_count));

        out.push("--- Header Element ---".to_string());
        match &self.header {
            Some(header) => {
                out.push("Header found: true".to_string());
                out.push(format!("Header height: {}", header.height));
                out.push(format!("Header position: {}", header.position));
            }
            None => out.push("Header found: false".to_string()),
        }
        out
    }

    pub fn missing_sections(&self) -> usize {
        self.sections.iter().filter(|(_, found)| !found).count()
    }
}

fn resolves(document: &Document, href: &str) -> bool {
    local_fragment(href)
        .and_then(|id| document.get_element_by_id(&id))
        .is_some()
}

pub fn collect(window: &Window, document: &Document) -> DebugReport {
    let sections = SECTION_IDS
        .iter()
        .map(|id| (id.to_string(), document.get_element_by_id(id).is_some()))
        .collect();

    let nav_links = query_all(document, ".nav-menu a[href^=\"#\"]")
        .into_iter()
        .filter_map(|a| a.get_attribute("href"))
        .map(|href| {
            let found = resolves(document, &href);
            (href, found)
        })
        .collect();

    let header = document
        .get_element_by_id("header")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            let position = window
                .get_computed_style(&el)
                .ok()
                .flatten()
                .and_then(|style| style.get_property_value("position").ok())
                .unwrap_or_default();
            HeaderProbe {
                height: el.offset_height(),
                position,
            }
        });

    DebugReport {
        sections,
        nav_links,
        anchor_count: query_all(document, "a[href^=\"#\"]").len(),
        header,
    }
}

/// Logs the report and attaches capture-phase click probes to every fragment
/// anchor. The probes live as long as the returned listeners.
pub fn run() -> Result<Vec<Listener>, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    log!("=== Scroll Debug Test ===");
    let report = collect(&window, &document);
    for line in report.lines() {
        log!(line);
    }
    if report.missing_sections() > 0 {
        log::warn!("{} expected sections missing", report.missing_sections());
    }

    let mut probes = Vec::new();
    for (i, anchor) in query_all(&document, "a[href^=\"#\"]").into_iter().enumerate() {
        let href = anchor.get_attribute("href").unwrap_or_default();
        let window = window.clone();
        let document = document.clone();
        probes.push(Listener::capture(anchor.as_ref(), "click", move |event| {
            log!(format!("Click detected on link {}:", i + 1));
            log!("  href:", href.clone());
            log!("  Default prevented:", event.default_prevented());

            let target = local_fragment(&href).and_then(|id| document.get_element_by_id(&id));
            log!("  Target found:", target.is_some());
            if let Some(target) = target {
                let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
                log!("  Target position:", top);
            }
        })?);
    }

    log!("=== Tests Complete ===");
    log!("Click on \"Dịch vụ\" or \"Portfolio\" links and watch console output");
    Ok(probes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> DebugReport {
        DebugReport {
            sections: vec![("hero".into(), true), ("faq".into(), false)],
            nav_links: vec![("#hero".into(), true), ("#blog".into(), false)],
            anchor_count: 9,
            header: Some(HeaderProbe {
                height: 80,
                position: "fixed".into(),
            }),
        }
    }

    #[test]
    fn report_marks_found_and_missing() {
        let lines = report().lines();
        assert!(lines.contains(&"#hero: ✓ Found".to_string()));
        assert!(lines.contains(&"#faq: ✗ Missing".to_string()));
        assert!(lines.contains(&"Found 2 navigation links".to_string()));
        assert!(lines.contains(&"2. #blog: ✗ Target missing".to_string()));
        assert!(lines.contains(&"Total anchor links: 9".to_string()));
        assert!(lines.contains(&"Header position: fixed".to_string()));
    }

    #[test]
    fn report_without_header() {
        let report = DebugReport {
            header: None,
            ..report()
        };
        assert_eq!(report.lines().last().map(String::as_str), Some("Header found: false"));
        assert_eq!(report.missing_sections(), 1);
    }
}
