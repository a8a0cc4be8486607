//! The widget's single mutable context.
use crate::apply::{PageSurface, apply};
use crate::config::WidgetConfig;
use crate::controls::ControlAction;
use crate::settings::{Settings, Step, same_scale};
use crate::storage::{SettingsStorage, SettingsStore};

/// Result of a control interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Changed,
    /// Nothing moved; the page was not touched and nothing was written.
    Unchanged,
}

/// Owns configuration, current settings, storage and the page handle.
///
/// Every mutation that changes settings re-applies them and persists them.
pub struct Widget<S, P> {
    config: WidgetConfig,
    settings: Settings,
    store: SettingsStore<S>,
    surface: P,
}

impl<S, P> Widget<S, P>
where
    S: SettingsStorage,
    P: PageSurface,
{
    /// Build the widget, merging any stored record onto the defaults.
    ///
    /// A configuration that fails [`WidgetConfig::validate`] is replaced by
    /// the default one. Nothing is applied to the page yet; call
    /// [`Widget::apply`] once the controls are in place.
    pub fn new(config: WidgetConfig, storage: S, surface: P) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("A11Y: invalid configuration, using defaults: {err}");
                WidgetConfig::default()
            }
        };
        let store = SettingsStore::new(storage, config.storage_key.clone());
        let mut settings = Settings::default();
        if let Some(record) = store.load() {
            settings.merge_persisted(&record, &config);
        }
        Self {
            config,
            settings,
            store,
            surface,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &SettingsStore<S> {
        &self.store
    }

    #[must_use]
    pub const fn surface(&self) -> &P {
        &self.surface
    }

    /// Project the current settings onto the page.
    pub fn apply(&self) {
        apply(&self.settings, &self.surface);
    }

    pub fn decrease_font_size(&mut self) -> Change {
        self.step_font_size(Step::Down)
    }

    pub fn increase_font_size(&mut self) -> Change {
        self.step_font_size(Step::Up)
    }

    pub fn toggle_contrast(&mut self) -> Change {
        self.settings.contrast = !self.settings.contrast;
        self.commit();
        Change::Changed
    }

    pub fn perform(&mut self, action: ControlAction) -> Change {
        match action {
            ControlAction::Decrease => self.decrease_font_size(),
            ControlAction::Increase => self.increase_font_size(),
            ControlAction::ToggleContrast => self.toggle_contrast(),
        }
    }

    fn step_font_size(&mut self, step: Step) -> Change {
        let next = self.settings.stepped_font_size(step, &self.config);
        if same_scale(next, self.settings.font_size) {
            return Change::Unchanged;
        }
        self.settings.font_size = next;
        self.commit();
        Change::Changed
    }

    fn commit(&self) {
        self.apply();
        self.store.save(&self.settings);
    }
}
