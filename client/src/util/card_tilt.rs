//! Pointer-follow tilt on listing cards.
//!
//! Attaches `mousemove`/`mouseleave` listeners to every card matching
//! [`CARD_SELECTOR`]. Does nothing when the user prefers reduced motion,
//! and no-ops in native builds.

#[cfg(feature = "csr")]
use ratings::tilt::{CARD_SELECTOR, INNER_CARD_SELECTOR, TILT_CLASS, Tilt};

/// Whether the user asked the system for reduced motion.
#[cfg(feature = "csr")]
fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// Wire the tilt listeners onto the cards present on this page.
pub fn attach() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::{HtmlElement, MouseEvent};

        let Some(window) = web_sys::window() else {
            return;
        };
        if prefers_reduced_motion(&window) {
            return;
        }
        let Some(document) = window.document() else {
            return;
        };
        let Ok(nodes) = document.query_selector_all(CARD_SELECTOR) else {
            return;
        };

        for i in 0..nodes.length() {
            let Some(container) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let card = container
                .query_selector(INNER_CARD_SELECTOR)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .unwrap_or_else(|| container.clone());
            let _ = card.class_list().add_1(TILT_CLASS);

            let on_move = {
                let container = container.clone();
                let card = card.clone();
                Closure::wrap(Box::new(move |ev: MouseEvent| {
                    let rect = container.get_bounding_client_rect();
                    let tilt = Tilt::at(
                        f64::from(ev.client_x()) - rect.left(),
                        f64::from(ev.client_y()) - rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    let style = card.style();
                    let current = style.get_property_value("transform").unwrap_or_default();
                    let _ = style.set_property("transform", &tilt.transform(&current));
                }) as Box<dyn FnMut(MouseEvent)>)
            };
            let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
                let _ = card.style().remove_property("transform");
            }) as Box<dyn FnMut(MouseEvent)>);

            let _ = container.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
            let _ = container.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
            // Listeners live as long as the page.
            on_move.forget();
            on_leave.forget();
        }
    }
}
