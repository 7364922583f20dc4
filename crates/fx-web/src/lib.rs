#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod copy_code;
mod dom;
mod glow;
mod section_scroll;
mod spotlight;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    dom::on_document_ready(|| {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Segmentation must complete before the illuminator sees any pointer
    // event; the registry handoff below enforces that ordering.
    let chars = glow::segment_containers(&document);
    glow::wire_pointer_glow(&window, chars);

    spotlight::wire(&window, &document);
    section_scroll::wire(&window, &document);
    copy_code::wire(&window, &document);
    Ok(())
}
