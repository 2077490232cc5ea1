//! Framework-free logic for the character-limit comment field control.
//!
//! The host runtime binds two properties to the control, `wordLimit` and
//! `commentField`. This crate owns the configuration snapshot for those
//! bindings and the derived remaining-count state; it has no dependency on
//! any UI toolkit so the counting behavior can be tested on its own. The
//! terminal adapter lives in `textcounter-tui`.

mod config;
mod counter;

pub use config::ControlConfig;
pub use config::ControlOutputs;
pub use counter::LimitStatus;
pub use counter::char_count;
pub use counter::remaining;
pub use counter::status_label;
