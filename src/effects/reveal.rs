use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::dom::{add_class, observe_once, query_all, ObserverHandle, Visibility};

const GRIDS: &str =
    ".values-grid, .services-grid, .portfolio-grid, .pricing-grid, .testimonials-grid";
const REVEALED: &str = "in-view";

/// Cards in a grid cycle through six staggered delays.
pub fn stagger_class(index: usize) -> String {
    format!("delay-{}", index % 6 + 1)
}

/// Tags grid children and section headers with their animation classes.
/// Must run before [`observe`] so the new `.animate` elements are picked up.
pub fn prepare(document: &Document) {
    for grid in query_all(document, GRIDS) {
        let children = grid.children();
        for index in 0..children.length() {
            if let Some(item) = children.item(index) {
                let _ = item
                    .class_list()
                    .add_3("animate", "fade-in-up", &stagger_class(index as usize));
            }
        }
    }

    for header in query_all(document, ".section .section-header") {
        let _ = header.class_list().add_2("animate", "fade-in");
    }
}

pub fn observe(document: &Document) -> Result<ObserverHandle, JsValue> {
    let elements = query_all(document, ".animate");
    log::debug!("observing {} animated elements", elements.len());
    observe_once(
        &elements,
        Visibility {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
        },
        |el| add_class(el, REVEALED),
    )
}

/// Reveals everything in a section at once, used when jumping straight to it.
pub fn force_show_section(section: &Element) {
    for el in query_all(section, ".animate") {
        add_class(&el, REVEALED);
    }
}
