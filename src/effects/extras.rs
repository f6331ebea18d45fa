use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

use crate::config::{TILT_MEDIA_QUERY, TYPING_SPEED_MS};
use crate::dom::{add_class, observe_once, query_all, Listener, ObserverHandle, Visibility};

const TILT_CARDS: &str = ".service-card, .pricing-card, .testimonial-card";
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Pointer at (`x`, `y`) inside a `width` x `height` card.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> String {
    let rotate_x = (y - height / 2.0) / 20.0;
    let rotate_y = (width / 2.0 - x) / 20.0;
    format!(
        "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-5px)",
        rotate_x, rotate_y
    )
}

pub fn typed_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// `img[data-src]` get their real source once they come within 50px of the viewport.
pub fn lazy_images(document: &Document) -> Result<Option<ObserverHandle>, JsValue> {
    let images = query_all(document, "img[data-src]");
    if images.is_empty() {
        return Ok(None);
    }
    for img in &images {
        add_class(img, "img-reveal");
    }
    let handle = observe_once(
        &images,
        Visibility {
            threshold: 0.0,
            root_margin: "50px",
        },
        |img| {
            if let Some(src) = img.get_attribute("data-src") {
                let _ = img.set_attribute("src", &src);
            }
            add_class(img, "loaded");
            let _ = img.remove_attribute("data-src");
        },
    )?;
    Ok(Some(handle))
}

/// Cards lean towards the pointer. Wide screens only.
pub fn tilt_cards(window: &Window, document: &Document) -> Result<Vec<Listener>, JsValue> {
    let wide = window
        .match_media(TILT_MEDIA_QUERY)?
        .map_or(false, |query| query.matches());
    if !wide {
        return Ok(Vec::new());
    }

    let mut listeners = Vec::new();
    for card in query_all(document, TILT_CARDS) {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };

        let moving = card.clone();
        listeners.push(Listener::new(card.as_ref(), "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = moving.get_bounding_client_rect();
            let transform = tilt_transform(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
                rect.width(),
                rect.height(),
            );
            let _ = moving.style().set_property("transform", &transform);
        })?);

        let leaving = card.clone();
        listeners.push(Listener::new(card.as_ref(), "mouseleave", move |_| {
            let _ = leaving.style().set_property("transform", TILT_RESET);
        })?);
    }
    Ok(listeners)
}

/// Types `.typing-effect[data-text]` out character by character once visible.
pub fn typing_effect(document: &Document) -> Result<Option<ObserverHandle>, JsValue> {
    let Some(element) = document.query_selector(".typing-effect[data-text]")? else {
        return Ok(None);
    };
    element.set_text_content(Some(""));

    let handle = observe_once(
        &[element],
        Visibility {
            threshold: 0.0,
            root_margin: "0px",
        },
        |el| type_out(el.clone()),
    )?;
    Ok(Some(handle))
}

fn type_out(element: Element) {
    let text = element.get_attribute("data-text").unwrap_or_default();
    spawn_local(async move {
        let count = text.chars().count();
        for typed in 1..=count {
            element.set_text_content(Some(&typed_prefix(&text, typed)));
            if typed < count {
                TimeoutFuture::new(TYPING_SPEED_MS).await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_of_card_is_flat() {
        assert_eq!(
            tilt_transform(150.0, 100.0, 300.0, 200.0),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) translateY(-5px)"
        );
    }

    #[test]
    fn corner_leans_both_ways() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 300.0, 200.0),
            "perspective(1000px) rotateX(-5deg) rotateY(7.5deg) translateY(-5px)"
        );
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(typed_prefix("Xin chào", 7), "Xin chà");
        assert_eq!(typed_prefix("abc", 10), "abc");
        assert_eq!(typed_prefix("abc", 0), "");
    }
}
