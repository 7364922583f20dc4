//! Wheel-driven section snapping: one section per wheel gesture,
//! smooth-scrolled into view, with native scrolling suppressed.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire(window: &web::Window, document: &web::Document) {
    let sections = crate::dom::query_all(document, "section");
    if sections.is_empty() {
        log::info!("[scroll] no sections on this page");
        return;
    }
    log::info!("[scroll] snapping across {} sections", sections.len());

    let mut current = 0usize;
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        current = fx_core::scroll::next_section(current, sections.len(), ev.delta_y());
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        sections[current].scroll_into_view_with_scroll_into_view_options(&opts);
    }) as Box<dyn FnMut(_)>);

    // prevent_default only works from a non-passive wheel listener.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
