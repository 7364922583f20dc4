//! DOM side of the per-character text glow: segment every glow-enabled
//! container into one span per character, then restyle each span from
//! its distance to the pointer on every move.

use fx_core::glow::SamplePolicy;
use fx_core::SAMPLE_POLICY;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CONTAINER_SELECTOR: &str = ".text-glow";
const CHAR_CLASS: &str = "glow-char";
const ACTIVE_CLASS: &str = "glow-active";

/// Rebuild every `.text-glow` container as a run of one-character
/// spans and return the flat registry of created spans, in document
/// and character order.
///
/// Runs once per page load; re-running it on an already segmented
/// container would re-segment the span soup, so callers wire it before
/// any pointer handling and never again.
pub fn segment_containers(document: &web::Document) -> Vec<web::HtmlElement> {
    let mut chars = Vec::new();
    for container in crate::dom::query_all(document, CONTAINER_SELECTOR) {
        let Ok(container) = container.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let text = container.inner_text();
        container.set_inner_html("");
        for glyph in fx_core::glow::segment_text(&text) {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            let _ = span.class_list().add_1(CHAR_CLASS);
            span.set_text_content(Some(glyph.rendered.encode_utf8(&mut [0u8; 4])));
            let _ = container.append_child(&span);
            if let Ok(span) = span.dyn_into::<web::HtmlElement>() {
                chars.push(span);
            }
        }
    }
    chars
}

/// Applies the proximity glow to a fixed registry of character spans.
/// Constructed from the segmenter's output rather than re-querying the
/// document, so the handoff between the two phases is explicit.
pub struct Illuminator {
    chars: Vec<web::HtmlElement>,
}

impl Illuminator {
    pub fn new(chars: Vec<web::HtmlElement>) -> Self {
        Self { chars }
    }

    /// Restyle every registered span for the given pointer position.
    /// Reads each span's live bounding box, so scroll and resize are
    /// reflected without any bookkeeping here. Pure with respect to
    /// current layout and `pointer`: the same inputs write the same
    /// styles.
    pub fn apply(&self, pointer: Vec2) {
        for ch in &self.chars {
            let rect = ch.get_bounding_client_rect();
            if rect.width() == 0.0 && rect.height() == 0.0 {
                // Detached or not laid out yet; skip this span only.
                continue;
            }
            let center = fx_core::glow::rect_center(
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );
            let style = ch.style();
            match fx_core::glow::style_at(pointer, center) {
                Some(css) => {
                    let _ = ch.class_list().add_1(ACTIVE_CLASS);
                    let _ = style.set_property("color", &css.color);
                    let _ = style.set_property("text-shadow", &css.text_shadow);
                }
                None => {
                    let _ = ch.class_list().remove_1(ACTIVE_CLASS);
                    let _ = style.remove_property("color");
                    let _ = style.remove_property("text-shadow");
                }
            }
        }
    }
}

/// Wire the pointer listener driving the glow. The listener is
/// permanent; the page owns it for its whole lifetime.
pub fn wire_pointer_glow(window: &web::Window, chars: Vec<web::HtmlElement>) {
    if chars.is_empty() {
        log::info!("[glow] no glow containers on this page");
        return;
    }
    log::info!("[glow] tracking {} characters", chars.len());
    let illuminator = Illuminator::new(chars);

    match SAMPLE_POLICY {
        SamplePolicy::EveryEvent => {
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                illuminator.apply(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
            }) as Box<dyn FnMut(_)>);
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        SamplePolicy::FrameAligned => wire_frame_aligned(window, illuminator),
    }
}

/// Frame-aligned variant: pointer events only record the latest
/// position, and one animation-frame callback per burst applies it.
/// Intermediate positions may be skipped but the final one never is.
fn wire_frame_aligned(window: &web::Window, illuminator: Illuminator) {
    let pending: Rc<RefCell<Option<Vec2>>> = Rc::new(RefCell::new(None));

    let apply: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending_apply = pending.clone();
    *apply.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(pos) = pending_apply.borrow_mut().take() {
            illuminator.apply(pos);
        }
    }) as Box<dyn FnMut()>));

    let pending_move = pending.clone();
    let apply_move = apply.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let had_pending = pending_move.borrow().is_some();
        *pending_move.borrow_mut() =
            Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        // One frame request per burst; the callback drains `pending`.
        if !had_pending {
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    apply_move
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}
