use a11y_widget_core::PageSurface;
use web_sys::HtmlElement;

/// The page root the settings are projected onto (normally `document.body`).
#[derive(Debug, Clone)]
pub struct BodySurface {
    root: HtmlElement,
}

impl BodySurface {
    #[must_use]
    pub const fn new(root: HtmlElement) -> Self {
        Self { root }
    }
}

impl PageSurface for BodySurface {
    fn set_font_scale(&self, css: &str) {
        if let Err(err) = self.root.style().set_property("font-size", css) {
            log::debug!(
                "A11Y: font-size rejected: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }

    fn set_class(&self, class: &str, present: bool) {
        if let Err(err) = self.root.class_list().toggle_with_force(class, present) {
            log::debug!(
                "A11Y: class {class} rejected: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
}
