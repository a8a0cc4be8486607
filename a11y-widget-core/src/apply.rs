//! Projection of [`Settings`] onto the page.
use crate::settings::Settings;

/// Marker class toggled on the page root while high contrast is on.
pub const HIGH_CONTRAST_CLASS: &str = "a11y-high-contrast";

/// The two properties of the host page the widget controls.
pub trait PageSurface {
    /// Set the root font size, given as a CSS percentage such as `130%`.
    fn set_font_scale(&self, css: &str);

    /// Add or remove `class` on the page root.
    fn set_class(&self, class: &str, present: bool);
}

/// Apply `settings` to `surface`. Idempotent; performs exactly two writes.
pub fn apply(settings: &Settings, surface: &impl PageSurface) {
    surface.set_font_scale(&settings.font_scale_css());
    surface.set_class(HIGH_CONTRAST_CLASS, settings.contrast);
}
