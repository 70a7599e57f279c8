#![cfg(target_arch = "wasm32")]

use kkomantle_game::{KeyValueStore, SettingName, SettingsStore};
use kkomantle_web::app::App;
use kkomantle_web::dom;
use kkomantle_web::storage::WebStore;
use kkomantle_web::theme;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

// Yew flushes renders on the microtask queue.
async fn settle() {
    for _ in 0..3 {
        let promise = js_sys::Promise::resolve(&wasm_bindgen::JsValue::NULL);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .expect("resolve tick");
    }
}

#[wasm_bindgen_test]
fn web_store_round_trips_through_local_storage() {
    WebStore.set_item("shareTime", "false").expect("write");
    assert_eq!(
        WebStore.get_item("shareTime").expect("read").as_deref(),
        Some("false")
    );
    assert!(!SettingsStore::new(WebStore).get(SettingName::ShareTime));
    WebStore.remove_item("shareTime").expect("remove");
    assert!(SettingsStore::new(WebStore).get(SettingName::ShareTime));
}

#[wasm_bindgen_test]
fn dark_mode_toggles_root_class() {
    theme::set_dark_mode(true);
    let root = dom::document()
        .and_then(|d| d.document_element())
        .expect("document element");
    assert!(root.class_list().contains(theme::DARK_CLASS));
    assert_eq!(
        WebStore.get_item("darkMode").expect("read").as_deref(),
        Some("true")
    );

    theme::set_dark_mode(false);
    assert!(!root.class_list().contains(theme::DARK_CLASS));
    WebStore.remove_item("darkMode").expect("cleanup");
}

#[wasm_bindgen_test]
async fn settings_dialog_opens_from_header_button() {
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;

    let doc = dom::document().expect("document");
    let button = doc
        .get_element_by_id("settings-button")
        .expect("settings button")
        .dyn_into::<HtmlElement>()
        .expect("button element");
    button.click();
    settle().await;

    assert!(doc.get_element_by_id("share-top-guess").is_some());
}

#[wasm_bindgen_test]
async fn dark_toggle_matches_first_paint_without_stored_choice() {
    WebStore.remove_item("darkMode").expect("clear choice");
    theme::apply_dark_mode(theme::initial_dark_mode());
    Renderer::<App>::with_root(ensure_app_root()).render();
    settle().await;

    let doc = dom::document().expect("document");
    doc.get_element_by_id("settings-button")
        .expect("settings button")
        .dyn_into::<HtmlElement>()
        .expect("button element")
        .click();
    settle().await;

    let toggle = doc
        .get_element_by_id(theme::DARK_TOGGLE_ID)
        .expect("dark toggle")
        .dyn_into::<web_sys::HtmlInputElement>()
        .expect("checkbox");
    let root = doc.document_element().expect("document element");
    let was_dark = root.class_list().contains(theme::DARK_CLASS);
    assert_eq!(toggle.checked(), was_dark);

    toggle.click();
    settle().await;
    assert_eq!(root.class_list().contains(theme::DARK_CLASS), !was_dark);
    let stored = if was_dark { "false" } else { "true" };
    assert_eq!(
        WebStore.get_item("darkMode").expect("read").as_deref(),
        Some(stored)
    );
    WebStore.remove_item("darkMode").expect("cleanup");
}
