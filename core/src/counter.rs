/// Number of characters in the bound text, counted as Unicode scalar values.
#[inline]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Remaining allowance against the configured limit. Recomputed from the
/// live text on every change; may go negative when the text already exceeds
/// the limit (e.g. after the limit shrinks on a refresh).
#[inline]
pub fn remaining(word_limit: usize, text: &str) -> i64 {
    word_limit as i64 - char_count(text) as i64
}

/// The two visible modes of the control, derived solely from the sign of the
/// remaining count on every text change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LimitStatus {
    /// Typing room left: normal emphasis, input unconstrained.
    #[default]
    Below,
    /// Remaining count is zero or negative: alert emphasis, input length
    /// constrained to the configured limit.
    Reached,
}

impl LimitStatus {
    pub fn of(remaining: i64) -> Self {
        if remaining <= 0 {
            LimitStatus::Reached
        } else {
            LimitStatus::Below
        }
    }
}

/// Status label text for the current limit and remaining count.
///
/// Both branches interpolate the configured limit. The reached branch keeps
/// the host control's original phrasing but drops its hardcoded `500`
/// literal, which disagreed with the limit the normal branch reported.
/// Building the string with `format!` also guarantees a remaining count of
/// exactly zero still renders a full message.
pub fn status_label(word_limit: usize, remaining: i64) -> String {
    match LimitStatus::of(remaining) {
        LimitStatus::Reached => format!("Character limit reached to {word_limit}"),
        LimitStatus::Below => {
            format!("Maximum limit is {word_limit} Remaining : {remaining}")
        }
    }
}
