//! The three user-facing controls and the toolbar stylesheet.
use crate::config::Icons;

/// Class on the toolbar container.
pub const CONTROLS_CLASS: &str = "a11y-controls";
/// Id of the injected `<style>` element.
pub const STYLESHEET_ID: &str = "a11y-widget-styles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    Decrease,
    Increase,
    ToggleContrast,
}

impl ControlAction {
    /// Render order.
    pub const ALL: [Self; 3] = [Self::Decrease, Self::Increase, Self::ToggleContrast];

    /// Tooltip text, also used as the accessible label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decrease => "Decrease text size",
            Self::Increase => "Increase text size",
            Self::ToggleContrast => "Toggle high contrast",
        }
    }

    #[must_use]
    pub fn glyph(self, icons: &Icons) -> &str {
        match self {
            Self::Decrease => &icons.decrease,
            Self::Increase => &icons.increase,
            Self::ToggleContrast => &icons.contrast,
        }
    }

    /// Stable token for `data-action` attributes and test selectors.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Decrease => "decrease",
            Self::Increase => "increase",
            Self::ToggleContrast => "contrast",
        }
    }
}

/// Inline size for a control button.
#[must_use]
pub fn button_style(button_size: &str) -> String {
    format!("width:{button_size};height:{button_size};")
}

/// CSS for the toolbar and the high-contrast mode.
///
/// The high-contrast rules cover the marked root and all descendants except
/// the toolbar and its buttons, so the controls stay readable.
#[must_use]
pub const fn stylesheet() -> &'static str {
    ".a11y-controls{position:fixed;z-index:9999;display:flex;gap:8px;padding:12px;\
        background:rgba(255,255,255,0.9);border-radius:8px;\
        box-shadow:0 2px 10px rgba(0,0,0,0.1);transition:opacity 0.3s}\
    .a11y-controls:hover{opacity:1 !important}\
    .a11y-controls button{border:1px solid #ddd;border-radius:4px;background:white;\
        cursor:pointer;font-size:16px;line-height:1}\
    .a11y-controls button:hover{background:#f8f8f8}\
    .a11y-high-contrast{background:#000 !important;color:#fff !important}\
    .a11y-high-contrast *:not(.a11y-controls):not(button){background:#000 !important;\
        color:#fff !important;border-color:#fff !important}"
}
