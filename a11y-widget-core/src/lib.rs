#![forbid(unsafe_code)]
//! Platform-agnostic core of the text-size and contrast widget.
//!
//! Browser front-ends provide a [`SettingsStorage`] and a [`PageSurface`] and
//! drive a [`Widget`]; everything else lives here.

pub mod apply;
pub mod config;
pub mod controls;
pub mod lifecycle;
pub mod session;
pub mod settings;
pub mod storage;

pub use apply::{HIGH_CONTRAST_CLASS, PageSurface, apply};
pub use config::{ConfigError, Icons, Position, WidgetConfig};
pub use controls::{CONTROLS_CLASS, ControlAction, STYLESHEET_ID};
pub use lifecycle::{BootPhase, BootStep, Bootstrap, DocumentReadiness, StartTrigger};
pub use session::{Change, Widget};
pub use settings::Settings;
pub use storage::{MemoryStorage, PersistError, SettingsStorage, SettingsStore};
