#![cfg(target_arch = "wasm32")]

use a11y_widget_core::{
    DocumentReadiness, HIGH_CONTRAST_CLASS, MemoryStorage, PageSurface, STYLESHEET_ID, Settings,
    SettingsStore, WidgetConfig, apply,
};
use a11y_widget_web::bootstrap::{self, Inserted, MOUNT_ID};
use a11y_widget_web::dom;
use a11y_widget_web::host_config::config_from_js;
use a11y_widget_web::page::BodySurface;
use a11y_widget_web::storage::LocalSettingsStorage;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
    dom::body().expect("document body")
}

fn reset_page(key: &str) {
    let _ = bootstrap::teardown();
    let body = body();
    let _ = body.class_list().remove_1(HIGH_CONTRAST_CLASS);
    let _ = body.style().remove_property("font-size");
    if let Ok(storage) = dom::local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn config_with_key(key: &str) -> WidgetConfig {
    WidgetConfig {
        storage_key: key.to_string(),
        ..WidgetConfig::default()
    }
}

fn font_size(el: &HtmlElement) -> String {
    el.style().get_property_value("font-size").unwrap_or_default()
}

fn click(action: &str) {
    let doc = dom::document().expect("document");
    let button: HtmlElement = doc
        .query_selector(&format!("#{MOUNT_ID} button[data-action='{action}']"))
        .expect("query control")
        .expect("control exists")
        .dyn_into()
        .expect("button is an HtmlElement");
    button.click();
}

async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
fn body_surface_apply_is_idempotent() {
    let doc = dom::document().expect("document");
    let root: HtmlElement = doc
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div is an HtmlElement");
    let surface = BodySurface::new(root.clone());
    let settings = Settings {
        font_size: 1.3,
        contrast: true,
    };
    apply(&settings, &surface);
    let class_once = root.class_name();
    apply(&settings, &surface);
    assert_eq!(font_size(&root), "130%");
    assert_eq!(root.class_name(), class_once);
    assert!(root.class_list().contains(HIGH_CONTRAST_CLASS));

    surface.set_class(HIGH_CONTRAST_CLASS, false);
    assert!(!root.class_list().contains(HIGH_CONTRAST_CLASS));
}

#[wasm_bindgen_test]
fn rejected_class_tokens_leave_the_surface_untouched() {
    let doc = dom::document().expect("document");
    let root: HtmlElement = doc
        .create_element("div")
        .expect("create div")
        .dyn_into()
        .expect("div is an HtmlElement");
    root.set_class_name("keep");
    let surface = BodySurface::new(root.clone());
    // DOMTokenList throws on empty and whitespace tokens.
    surface.set_class("", true);
    surface.set_class("two words", true);
    assert_eq!(root.class_name(), "keep");
}

#[wasm_bindgen_test]
fn uncommitted_mount_nodes_are_removed() {
    let doc = dom::document().expect("document");
    let stylesheet = doc.create_element("style").expect("create style");
    let container = doc.create_element("div").expect("create div");
    body().append_child(&stylesheet).expect("append style");
    body().append_child(&container).expect("append div");

    let mut inserted = Inserted::new();
    inserted.set_stylesheet(Some(stylesheet.clone()));
    inserted.set_container(container.clone());
    drop(inserted);
    assert!(stylesheet.parent_node().is_none());
    assert!(container.parent_node().is_none());

    body().append_child(&container).expect("append div");
    let mut inserted = Inserted::new();
    inserted.set_container(container.clone());
    let (kept_style, kept_container) = inserted.keep();
    assert!(kept_style.is_none());
    assert!(kept_container.is_some());
    assert!(container.parent_node().is_some());
    container.remove();
}

#[wasm_bindgen_test]
async fn remount_after_teardown_renders_one_toolbar() {
    let key = "a11y.test.remount";
    reset_page(key);
    bootstrap::mount(config_with_key(key), LocalSettingsStorage, &body()).expect("mount");
    settle().await;
    assert!(bootstrap::teardown());

    let doc = dom::document().expect("document");
    assert!(doc.get_element_by_id(MOUNT_ID).is_none());
    assert!(doc.get_element_by_id(STYLESHEET_ID).is_none());
    bootstrap::mount(config_with_key(key), LocalSettingsStorage, &body()).expect("remount");
    settle().await;
    assert_eq!(
        doc.query_selector_all(&format!("#{MOUNT_ID}"))
            .expect("query mounts")
            .length(),
        1
    );
    assert!(bootstrap::teardown());
}

#[wasm_bindgen_test]
fn readiness_follows_the_live_document() {
    let doc = dom::document().expect("document");
    let readiness = dom::readiness();
    assert_eq!(readiness, DocumentReadiness::parse(&doc.ready_state()));
    // Test modules run after the document has been parsed.
    assert_ne!(readiness, DocumentReadiness::Loading);
}

#[wasm_bindgen_test]
fn local_storage_round_trips_settings() {
    let key = "a11y.test.roundtrip";
    reset_page(key);
    let store = SettingsStore::new(LocalSettingsStorage, key);
    assert!(store.load().is_none());
    let settings = Settings {
        font_size: 1.8,
        contrast: true,
    };
    store.try_save(&settings).expect("localStorage write");
    let loaded: Settings =
        serde_json::from_value(store.load().expect("stored record")).expect("settings shape");
    assert_eq!(loaded, settings);
}

#[wasm_bindgen_test]
fn host_config_object_is_merged_onto_defaults() {
    let raw = js_sys::Object::new();
    js_sys::Reflect::set(&raw, &"maxFontSize".into(), &JsValue::from_f64(3.0)).unwrap();
    js_sys::Reflect::set(&raw, &"position".into(), &"bottom-left".into()).unwrap();
    let config = config_from_js(&raw.into());
    assert!((config.max_font_size - 3.0).abs() < f64::EPSILON);
    assert_eq!(config.position, a11y_widget_core::Position::BottomLeft);
    assert_eq!(config.storage_key, "a11ySettings");

    let invalid = js_sys::Object::new();
    js_sys::Reflect::set(&invalid, &"minFontSize".into(), &JsValue::from_f64(4.0)).unwrap();
    assert_eq!(config_from_js(&invalid.into()), WidgetConfig::default());
    assert_eq!(config_from_js(&JsValue::UNDEFINED), WidgetConfig::default());
}

#[wasm_bindgen_test]
async fn mounted_controls_change_and_persist_settings() {
    let key = "a11y.test.mount";
    reset_page(key);
    bootstrap::mount(config_with_key(key), LocalSettingsStorage, &body()).expect("mount");
    settle().await;

    let doc = dom::document().expect("document");
    assert_eq!(
        doc.query_selector_all(&format!("#{MOUNT_ID} button"))
            .expect("query buttons")
            .length(),
        3
    );
    assert!(doc.get_element_by_id(STYLESHEET_ID).is_some());
    assert_eq!(font_size(&body()), "100%");

    for _ in 0..3 {
        click("increase");
    }
    assert_eq!(font_size(&body()), "130%");
    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item(key)
        .expect("read")
        .expect("written");
    assert!(stored.contains("\"fontSize\":1.3"));

    click("contrast");
    assert!(body().class_list().contains(HIGH_CONTRAST_CLASS));
    click("contrast");
    assert!(!body().class_list().contains(HIGH_CONTRAST_CLASS));

    assert!(bootstrap::teardown());
    assert!(doc.get_element_by_id(MOUNT_ID).is_none());
    assert!(doc.get_element_by_id(STYLESHEET_ID).is_none());
}

#[wasm_bindgen_test]
async fn stored_settings_are_applied_on_mount() {
    let key = "a11y.test.restore";
    reset_page(key);
    dom::local_storage()
        .expect("localStorage")
        .set_item(key, r#"{"fontSize":1.5,"contrast":true}"#)
        .expect("seed");
    bootstrap::mount(config_with_key(key), LocalSettingsStorage, &body()).expect("mount");
    settle().await;

    assert_eq!(font_size(&body()), "150%");
    assert!(body().class_list().contains(HIGH_CONTRAST_CLASS));
    assert_eq!(
        bootstrap::current_settings(),
        Some(Settings {
            font_size: 1.5,
            contrast: true
        })
    );
    assert!(bootstrap::teardown());
}

#[wasm_bindgen_test]
async fn content_changes_reapply_settings() {
    let key = "a11y.test.observer";
    reset_page(key);
    bootstrap::mount(config_with_key(key), LocalSettingsStorage, &body()).expect("mount");
    settle().await;
    click("increase");
    assert_eq!(font_size(&body()), "110%");

    // Something else on the page overrides the font size, then injects content.
    let _ = body().style().set_property("font-size", "42%");
    let doc = dom::document().expect("document");
    let late = doc.create_element("p").expect("create p");
    body().append_child(&late).expect("append");
    settle().await;
    assert_eq!(font_size(&body()), "110%");

    late.remove();
    assert!(bootstrap::teardown());
    assert!(!bootstrap::teardown());
}

#[wasm_bindgen_test]
async fn failing_storage_keeps_session_working() {
    let key = "a11y.test.failing";
    reset_page(key);
    let memory = MemoryStorage::new();
    memory.set_fail_writes(true);
    bootstrap::mount(config_with_key(key), memory.clone(), &body()).expect("mount");
    settle().await;

    click("decrease");
    click("contrast");
    assert_eq!(font_size(&body()), "90%");
    assert!(body().class_list().contains(HIGH_CONTRAST_CLASS));
    assert_eq!(memory.writes(), 0);
    assert!(bootstrap::teardown());
}
