//! Minimal host harness for the comment field control.
//!
//! Plays the host runtime's role: constructs the control, forwards key
//! events, drains the outputs-ready notifications, and pulls outputs before
//! tearing the control down. Esc exits.

use std::sync::mpsc::channel;

use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use ratatui::widgets::WidgetRef;
use textcounter_core::ControlConfig;
use textcounter_tui::HostEvent;
use textcounter_tui::TextCounterControl;

fn main() -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let (host_tx, host_rx) = channel();

    let config = ControlConfig::new(40, "");
    let mut control = TextCounterControl::init(config, host_tx);
    let mut last_outputs = control.get_outputs();

    loop {
        terminal.draw(|frame| {
            (&control).render_ref(frame.area(), frame.buffer_mut());
        })?;

        if let Event::Key(key) = crossterm::event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if key.code == KeyCode::Esc {
                break;
            }
            control.handle_key_event(key);
        }

        // The control signalled new outputs; pull them like the host would.
        for event in host_rx.try_iter() {
            match event {
                HostEvent::OutputsReady => last_outputs = control.get_outputs(),
            }
        }
    }

    control.destroy();
    ratatui::restore();
    println!("commentField: {:?}", last_outputs.comment_field);
    Ok(())
}
