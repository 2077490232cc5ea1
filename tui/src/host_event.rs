/// Notifications the control sends back to its host.
///
/// Using a channel for this avoids threading a callback through layers of
/// widgets; the host keeps the receiving end and reacts after the current
/// event has been fully handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// New outputs are ready to be pulled via
    /// [`TextCounterControl::get_outputs`](crate::TextCounterControl::get_outputs).
    /// Carries no value: it is a signal, not a data channel.
    OutputsReady,
}
