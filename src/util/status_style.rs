//! Status palette for badges.

#[cfg(test)]
#[path = "status_style_test.rs"]
mod status_style_test;

use crate::model::CustomerStatus;

/// Color family a status is rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Green,
    Red,
    Yellow,
}

impl StatusTone {
    fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
        }
    }
}

/// Hot customers are green, cold ones red, neutral ones yellow.
pub fn status_tone(status: CustomerStatus) -> StatusTone {
    match status {
        CustomerStatus::Hot => StatusTone::Green,
        CustomerStatus::Cold => StatusTone::Red,
        CustomerStatus::Neutral => StatusTone::Yellow,
    }
}

/// Class list for the status badge, e.g. `status-badge status-badge--green`.
pub fn status_badge_class(status: CustomerStatus) -> String {
    format!("status-badge status-badge--{}", status_tone(status).as_str())
}
