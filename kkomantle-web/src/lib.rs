#![forbid(unsafe_code)]
//! Browser front-end for the Kkomantle companion page.
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod directory;
pub mod dom;
pub mod share;
pub mod storage;
pub mod theme;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Style the first paint before the app mounts.
    crate::theme::apply_dark_mode(crate::theme::initial_dark_mode());
    if let Err(err) = mount() {
        dom::console_error(&format!("{err:#}"));
    }
}

/// Mount the app on `#app`, or the body when the page has no such element.
#[cfg(target_arch = "wasm32")]
fn mount() -> anyhow::Result<()> {
    use anyhow::Context;
    let doc = dom::document().context("document unavailable")?;
    let root: web_sys::Element = match doc.get_element_by_id("app") {
        Some(root) => root,
        None => doc.body().context("page has no body to mount on")?.into(),
    };
    yew::Renderer::<app::App>::with_root(root).render();
    Ok(())
}
