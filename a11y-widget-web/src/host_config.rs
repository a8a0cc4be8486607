//! Configuration published by the host page before the widget loads.
use a11y_widget_core::WidgetConfig;
use wasm_bindgen::JsValue;

use crate::dom;

/// Global the host assigns its configuration object to.
pub const CONFIG_GLOBAL: &str = "A11Y_CONFIG";

/// Read `window.A11Y_CONFIG`, falling back to defaults when it is missing or unusable.
#[must_use]
pub fn read_host_config() -> WidgetConfig {
    let Some(win) = dom::window() else {
        return WidgetConfig::default();
    };
    match js_sys::Reflect::get(&JsValue::from(win), &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) => config_from_js(&raw),
        Err(err) => {
            log::debug!(
                "A11Y: {CONFIG_GLOBAL} unreadable: {}",
                dom::js_error_message(&err)
            );
            WidgetConfig::default()
        }
    }
}

/// Convert a host-supplied JS object into a validated configuration.
#[must_use]
pub fn config_from_js(raw: &JsValue) -> WidgetConfig {
    if raw.is_undefined() || raw.is_null() {
        return WidgetConfig::default();
    }
    let value = match serde_wasm_bindgen::from_value::<serde_json::Value>(raw.clone()) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("A11Y: ignoring {CONFIG_GLOBAL}: {err}");
            return WidgetConfig::default();
        }
    };
    WidgetConfig::from_value(value).unwrap_or_else(|err| {
        log::warn!("A11Y: ignoring invalid {CONFIG_GLOBAL}: {err}");
        WidgetConfig::default()
    })
}
