//! Pointer-tracking spotlight: rewrite the spotlight element's inline
//! background gradient on every pointer move.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const SPOTLIGHT_SELECTOR: &str = ".spotlight";

pub fn wire(window: &web::Window, document: &web::Document) {
    let Ok(Some(el)) = document.query_selector(SPOTLIGHT_SELECTOR) else {
        log::info!("[spotlight] no spotlight element on this page");
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let css = fx_core::spotlight::gradient_css(ev.client_x() as f64, ev.client_y() as f64);
        let _ = el.style().set_property("background", &css);
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
