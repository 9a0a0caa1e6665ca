//! Browser tests; run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use leptos_router::Matcher;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use shop_web_leptos::app::App;
use shop_web_leptos::routes::{Page, Params};
use shop_web_leptos::state::theme::STORAGE_KEY;
use shop_web_leptos::state::{provide_notice_context, provide_theme_context, NoticeKind, Theme};

wasm_bindgen_test_configure!(run_in_browser);

fn local_storage() -> web_sys::Storage {
    window().local_storage().unwrap().unwrap()
}

/// Navigate the way the back button does, without a reload
fn go_to(path: &str) {
    window()
        .history()
        .unwrap()
        .push_state_with_url(&JsValue::NULL, "", Some(path))
        .unwrap();
    let event = web_sys::PopStateEvent::new("popstate").unwrap();
    window().dispatch_event(&event).unwrap();
}

fn text_of(selector: &str) -> Option<String> {
    document()
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
fn test_router_decodes_route_params() {
    let product = Matcher::new("/product/:productId")
        .test("/product/robe%20%C3%A9t%C3%A9")
        .unwrap();
    let product_id = product.params.get("productId").cloned().unwrap();
    assert_eq!(product_id, "robe été");
    let params = Params::default().with("productId", product_id);
    assert_eq!(Page::ProductDetails.check_params(&params), Ok(()));

    let reset = Matcher::new("/reset-password/:resetToken")
        .test("/reset-password/t%C3%B6ken%2042")
        .unwrap();
    let token = reset.params.get("resetToken").cloned().unwrap();
    assert_eq!(token, "töken 42");
    let params = Params::default().with("resetToken", token);
    assert_eq!(Page::ResetPassword.check_params(&params), Ok(()));
}

#[wasm_bindgen_test]
async fn test_toggle_updates_memory_storage_and_notices() {
    let _runtime = create_runtime();
    local_storage().remove_item(STORAGE_KEY).unwrap();

    let notices = provide_notice_context();
    let theme = provide_theme_context(notices, 20);
    assert_eq!(theme.theme.get_untracked(), Theme::Light);
    assert_eq!(local_storage().get_item(STORAGE_KEY).unwrap().as_deref(), Some("light"));

    theme.toggle();

    assert_eq!(theme.theme.get_untracked(), Theme::Dark);
    assert_eq!(local_storage().get_item(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
    let root = document().document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    let items = notices.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].1.kind, NoticeKind::Loading);
    assert_eq!(items[0].1.content, "Switching to dark mode...");

    TimeoutFuture::new(60).await;

    // the confirmation replaces the switching notice under the same key
    let items = notices.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].1.kind, NoticeKind::Success);
    assert_eq!(items[0].1.content, "Switched to dark mode");

    theme.toggle();
    assert_eq!(theme.theme.get_untracked(), Theme::Light);
    assert_eq!(local_storage().get_item(STORAGE_KEY).unwrap().as_deref(), Some("light"));
}

#[wasm_bindgen_test]
async fn test_error_page_clears_after_navigation() {
    // a whitespace-only product id fails at render time
    go_to("/product/%20");
    mount_to_body(|| view! { <App /> });
    TimeoutFuture::new(50).await;

    assert!(text_of(".error-banner").is_some());
    assert!(text_of(".navbar").is_some());

    go_to("/shop");
    TimeoutFuture::new(50).await;

    assert!(text_of(".error-banner").is_none());
    assert_eq!(text_of("section.page h2").as_deref(), Some("Shop"));
}
