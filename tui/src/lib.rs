//! Terminal adapter for the character-limit comment field control.
//!
//! The host runtime owns the event loop and the screen region the control
//! lives in. It drives the control through a fixed lifecycle: construct via
//! [`TextCounterControl::init`], forward keystrokes to
//! [`TextCounterControl::handle_key_event`], push refreshed configuration
//! through [`TextCounterControl::update_view`], pull the bound value with
//! [`TextCounterControl::get_outputs`] after each
//! [`HostEvent::OutputsReady`] notification, and finish with
//! [`TextCounterControl::destroy`].

mod control;
mod counter_label;
mod host_event;
mod textarea;

pub use control::TextCounterControl;
pub use counter_label::CounterLabel;
pub use host_event::HostEvent;
pub use textarea::TextArea;
