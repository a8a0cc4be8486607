pub mod controls;

pub use controls::{A11yControls, Props as ControlsProps};
