use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::WidgetRef;
use textcounter_core::LimitStatus;
use textcounter_core::status_label;

/// One-line status label under the input surface.
///
/// Shows how much allowance is left against the configured limit and flips
/// to an alert presentation once the remaining count drops to zero or below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLabel {
    message: String,
    status: LimitStatus,
}

impl CounterLabel {
    pub fn new(word_limit: usize, remaining: i64) -> Self {
        Self {
            message: status_label(word_limit, remaining),
            status: LimitStatus::of(remaining),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> LimitStatus {
        self.status
    }

    fn style(&self) -> Style {
        let bg = match self.status {
            LimitStatus::Below => Color::Yellow,
            LimitStatus::Reached => Color::Red,
        };
        Style::default().fg(Color::Black).bg(bg)
    }
}

impl WidgetRef for CounterLabel {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_string(area.x, area.y, &self.message, self.style());
    }
}
