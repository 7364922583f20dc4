//! Copy-to-clipboard button on every code block: wrap each `pre` in a
//! container, float a button inside it, and flash a confirmation label
//! after a successful clipboard write.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";
const LABEL_RESET_MS: i32 = 2000;

pub fn wire(window: &web::Window, document: &web::Document) {
    for pre in crate::dom::query_all(document, "pre") {
        let Ok(pre) = pre.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        if let Err(e) = attach_button(window, document, &pre) {
            log::warn!("[copy] failed to attach copy button: {:?}", e);
        }
    }
}

fn attach_button(
    window: &web::Window,
    document: &web::Document,
    pre: &web::HtmlElement,
) -> Result<(), JsValue> {
    let container = document.create_element("div")?;
    container.class_list().add_2("col", "code-container")?;

    let button: web::HtmlElement = document.create_element("button")?.dyn_into()?;
    button.set_inner_text(COPY_LABEL);
    button.class_list().add_3("copy-btn", "btn", "btn-tag")?;

    // Swap the pre for the container, then move the pre inside it.
    if let Some(parent) = pre.parent_node() {
        parent.replace_child(&container, pre)?;
    }
    container.append_child(pre)?;

    // The button is absolutely positioned against the pre.
    pre.style().set_property("position", "relative")?;
    pre.append_child(&button)?;

    let window = window.clone();
    let pre = pre.clone();
    let button_in_click = button.clone();
    let closure = Closure::wrap(Box::new(move || {
        // The button itself sits inside the pre, so read the code
        // element rather than the pre's whole text.
        let code = pre
            .query_selector("code")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
            .map(|c| c.inner_text());
        let Some(code) = code else {
            log::warn!("[copy] pre without a code element");
            return;
        };
        let clipboard = window.navigator().clipboard();
        let button = button_in_click.clone();
        let window = window.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if JsFuture::from(clipboard.write_text(&code)).await.is_err() {
                log::warn!("[copy] clipboard write failed");
                return;
            }
            button.set_inner_text(COPIED_LABEL);
            let reset_button = button.clone();
            let reset = Closure::once(move || reset_button.set_inner_text(COPY_LABEL));
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                reset.as_ref().unchecked_ref(),
                LABEL_RESET_MS,
            );
            reset.forget();
        });
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
