//! Startup: wait for the page, mount the toolbar, keep the page styled.
use std::cell::RefCell;
use std::rc::Rc;

use a11y_widget_core::controls::stylesheet;
use a11y_widget_core::{
    BootStep, Bootstrap, Change, ControlAction, STYLESHEET_ID, Settings, SettingsStorage,
    StartTrigger, Widget, WidgetConfig,
};
use anyhow::{Context, anyhow};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};
use yew::{AppHandle, Callback};

use crate::components::{A11yControls, ControlsProps};
use crate::dom;
use crate::host_config::read_host_config;
use crate::observer::ContentObserver;
use crate::page::BodySurface;
use crate::storage::LocalSettingsStorage;

/// Id of the element the toolbar is rendered into.
pub const MOUNT_ID: &str = "a11y-widget-root";

/// The mounted widget with its storage backend erased.
trait MountedWidget {
    fn apply(&self);
    fn perform(&self, action: ControlAction) -> Change;
    fn settings(&self) -> Option<Settings>;
}

impl<S: SettingsStorage> MountedWidget for RefCell<Widget<S, BodySurface>> {
    fn apply(&self) {
        // Skip if a click handler is mid-update; it applies on its own.
        if let Ok(widget) = self.try_borrow() {
            widget.apply();
        }
    }

    fn perform(&self, action: ControlAction) -> Change {
        self.borrow_mut().perform(action)
    }

    fn settings(&self) -> Option<Settings> {
        self.try_borrow().ok().map(|widget| *widget.settings())
    }
}

struct Mounted {
    widget: Rc<dyn MountedWidget>,
    observer: ContentObserver,
    app: AppHandle<A11yControls>,
    container: Element,
    stylesheet: Option<Element>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

fn js_err(err: JsValue) -> anyhow::Error {
    anyhow!(dom::js_error_message(&err))
}

/// Start the widget with the host configuration and `localStorage`.
pub fn launch() {
    launch_with(read_host_config());
}

/// Start the widget once the page has loaded and has a body.
pub fn launch_with(config: WidgetConfig) {
    match dom::readiness().start_trigger() {
        StartTrigger::Immediate => wait_for_body(config, Bootstrap::new()),
        StartTrigger::OnLoad => {
            let Some(win) = dom::window() else {
                log::warn!("A11Y: no window; controls disabled");
                return;
            };
            EventListener::once(&win, "load", move |_| {
                wait_for_body(config, Bootstrap::new());
            })
            .forget();
        }
    }
}

fn wait_for_body(config: WidgetConfig, mut boot: Bootstrap) {
    let body = dom::body();
    match boot.poll(body.is_some()) {
        BootStep::Ready => {
            if let Some(body) = body
                && let Err(err) = mount(config, LocalSettingsStorage, &body)
            {
                log::error!("A11Y: failed to mount controls: {err:#}");
            }
        }
        BootStep::RetryAfter(delay_ms) => {
            Timeout::new(delay_ms, move || wait_for_body(config, boot)).forget();
        }
    }
}

/// Nodes inserted by a mount in progress. Dropping it removes them again;
/// [`Inserted::keep`] hands them over once the mount has completed.
pub struct Inserted {
    stylesheet: Option<Element>,
    container: Option<Element>,
}

impl Inserted {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stylesheet: None,
            container: None,
        }
    }

    pub fn set_stylesheet(&mut self, stylesheet: Option<Element>) {
        self.stylesheet = stylesheet;
    }

    pub fn set_container(&mut self, container: Element) {
        self.container = Some(container);
    }

    /// Release ownership: `(stylesheet, container)`.
    #[must_use]
    pub fn keep(mut self) -> (Option<Element>, Option<Element>) {
        (self.stylesheet.take(), self.container.take())
    }
}

impl Default for Inserted {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Inserted {
    fn drop(&mut self) {
        if let Some(container) = self.container.take() {
            container.remove();
        }
        if let Some(stylesheet) = self.stylesheet.take() {
            stylesheet.remove();
        }
    }
}

/// Mount the toolbar on `body` right away.
///
/// Loads stored settings, injects the stylesheet, renders the controls,
/// applies the settings and starts re-applying them whenever nodes are added
/// to or removed from the body. Mounting twice is a no-op. A failed mount
/// leaves no nodes behind.
///
/// # Errors
/// Returns an error if the DOM rejects any of the element insertions or the
/// mutation observer cannot be attached.
pub fn mount<S>(config: WidgetConfig, storage: S, body: &HtmlElement) -> anyhow::Result<()>
where
    S: SettingsStorage + 'static,
{
    if is_mounted() {
        log::debug!("A11Y: controls already mounted");
        return Ok(());
    }
    let doc = dom::document().context("document unavailable")?;
    let mut inserted = Inserted::new();
    inserted.set_stylesheet(inject_stylesheet(&doc, body).map_err(js_err)?);

    let widget = Widget::new(config, storage, BodySurface::new(body.clone()));
    let props_config = widget.config().clone();
    let widget: Rc<dyn MountedWidget> = Rc::new(RefCell::new(widget));

    let container = doc.create_element("div").map_err(js_err)?;
    container.set_id(MOUNT_ID);
    body.append_child(&container).map_err(js_err)?;
    inserted.set_container(container.clone());

    // Last fallible step; rendering below cannot fail.
    let observer = {
        let widget = Rc::clone(&widget);
        ContentObserver::observe(body, move || widget.apply()).map_err(js_err)?
    };

    let on_action = {
        let widget = Rc::clone(&widget);
        Callback::from(move |action: ControlAction| {
            let change = widget.perform(action);
            log::debug!("A11Y: {} -> {change:?}", action.token());
        })
    };
    let props = ControlsProps::from_config(&props_config, on_action);
    let app = yew::Renderer::<A11yControls>::with_root_and_props(container.clone(), props)
        .render();

    widget.apply();

    let (stylesheet, _) = inserted.keep();
    MOUNTED.with(|slot| {
        *slot.borrow_mut() = Some(Mounted {
            widget,
            observer,
            app,
            container,
            stylesheet,
        });
    });
    Ok(())
}

fn inject_stylesheet(doc: &Document, body: &HtmlElement) -> Result<Option<Element>, JsValue> {
    if doc.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(None);
    }
    let style = doc.create_element("style")?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(stylesheet()));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => body.append_child(&style)?,
    };
    Ok(Some(style))
}

#[must_use]
pub fn is_mounted() -> bool {
    MOUNTED.with(|slot| slot.borrow().is_some())
}

/// Settings of the mounted widget.
#[must_use]
pub fn current_settings() -> Option<Settings> {
    MOUNTED.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|mounted| mounted.widget.settings())
    })
}

/// Stop observing the page and remove the toolbar and stylesheet.
///
/// The last applied font size and contrast class stay on the page.
/// Returns `false` when nothing was mounted.
pub fn teardown() -> bool {
    let Some(mounted) = MOUNTED.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };
    mounted.observer.disconnect();
    mounted.app.destroy();
    mounted.container.remove();
    if let Some(style) = mounted.stylesheet {
        style.remove();
    }
    true
}
