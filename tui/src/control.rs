//! The host-driven comment field control.
//!
//! This widget owns everything the host mounts for the field: the multiline
//! [`TextArea`] input surface and the [`CounterLabel`] underneath it. The
//! host only forwards events and render calls; all state and key-handling
//! logic specific to those two elements lives here.

use std::sync::mpsc::Sender;

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::WidgetRef;
use textcounter_core::ControlConfig;
use textcounter_core::ControlOutputs;
use textcounter_core::LimitStatus;
use textcounter_core::remaining;

use crate::counter_label::CounterLabel;
use crate::host_event::HostEvent;
use crate::textarea::TextArea;

/// Number of terminal rows the input surface occupies inside the mount rect.
const TEXTAREA_ROWS: u16 = 5;

/// A text area with a character-limit counter, driven by a host runtime.
///
/// Lifecycle, in the order the host calls it: [`init`](Self::init) once,
/// then any number of [`handle_key_event`](Self::handle_key_event) /
/// [`update_view`](Self::update_view) / [`get_outputs`](Self::get_outputs)
/// calls, then [`destroy`](Self::destroy) once. Every handled keystroke
/// sends [`HostEvent::OutputsReady`] so the host knows to pull outputs.
pub struct TextCounterControl {
    /// Live input surface; the single source of truth for the bound text.
    textarea: TextArea,
    /// Most recent configuration snapshot pushed by the host.
    config: ControlConfig,
    label: CounterLabel,
    /// Present until `destroy`; dropping it severs the host notification
    /// channel and marks the control as torn down.
    host_tx: Option<Sender<HostEvent>>,
}

impl TextCounterControl {
    /// Build the control from the initial configuration. The text surface is
    /// seeded from `config.comment_field`; only this call consumes it.
    /// Malformed host values never fail here, they fall back to zero/empty
    /// before this point.
    pub fn init(config: ControlConfig, host_tx: Sender<HostEvent>) -> Self {
        let textarea = TextArea::with_text(&config.comment_field);
        let left = remaining(config.word_limit, textarea.text());
        let label = CounterLabel::new(config.word_limit, left);
        tracing::debug!(
            word_limit = config.word_limit,
            remaining = left,
            "control initialized"
        );
        Self {
            textarea,
            config,
            label,
            host_tx: Some(host_tx),
        }
    }

    /// Forward one keystroke to the input surface, then recompute the
    /// remaining count and notify the host that outputs changed.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        if self.is_destroyed() {
            tracing::debug!("key event after destroy ignored: {key_event:?}");
            return;
        }
        self.textarea.input(key_event);
        self.on_text_changed();
    }

    /// Called when any bound value changes on the host side. Recomputes the
    /// remaining count against the *live* text, never against the config's
    /// text snapshot, and leaves the input surface content untouched.
    pub fn update_view(&mut self, config: ControlConfig) {
        self.config = config;
        let left = remaining(self.config.word_limit, self.textarea.text());
        self.label = CounterLabel::new(self.config.word_limit, left);
    }

    /// Current value of the bound output property. Always succeeds,
    /// regardless of whether the limit has been exceeded.
    pub fn get_outputs(&self) -> ControlOutputs {
        ControlOutputs {
            comment_field: self.textarea.text().to_string(),
        }
    }

    /// Terminal teardown: release the notification channel and stop
    /// rendering. Safe to call more than once; repeat calls are no-ops.
    pub fn destroy(&mut self) {
        if self.host_tx.take().is_some() {
            tracing::debug!("control destroyed");
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.host_tx.is_none()
    }

    pub fn status(&self) -> LimitStatus {
        self.label.status()
    }

    pub fn label_message(&self) -> &str {
        self.label.message()
    }

    fn on_text_changed(&mut self) {
        let limit = self.config.word_limit;
        let left = remaining(limit, self.textarea.text());
        self.label = CounterLabel::new(limit, left);
        match self.label.status() {
            LimitStatus::Reached => self.textarea.set_max_chars(Some(limit)),
            LimitStatus::Below => self.textarea.set_max_chars(None),
        }
        if let Some(tx) = &self.host_tx {
            // The host may already be gone during shutdown; a disconnected
            // receiver is not an error.
            let _ = tx.send(HostEvent::OutputsReady);
        }
    }
}

impl WidgetRef for &TextCounterControl {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if self.is_destroyed() {
            return;
        }
        let input_height = TEXTAREA_ROWS.min(area.height);
        let input_area = Rect {
            height: input_height,
            ..area
        };
        (&self.textarea).render_ref(input_area, buf);

        if area.height > input_height {
            let label_area = Rect {
                y: area.y + input_height,
                height: 1,
                ..area
            };
            self.label.render_ref(label_area, buf);
        }
    }
}
