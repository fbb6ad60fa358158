//! Customer records and the values passed to the injected update operations.
//!
//! DESIGN
//! ======
//! The wire shape is camelCase JSON with RFC 3339 timestamps so records can be
//! handed over from a JSON data source unchanged. Components only read these
//! types; changes travel back to the owner as `StatusUpdate` / `CustomerPatch`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::Error;

/// Sales temperature of a customer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Hot,
    Cold,
    #[default]
    Neutral,
}

impl CustomerStatus {
    /// All statuses in selector order.
    pub const ALL: [CustomerStatus; 3] = [Self::Hot, Self::Cold, Self::Neutral];

    /// Lowercase wire value, also used as the `<option>` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Neutral => "neutral",
        }
    }

    /// Label of the selector option for this status.
    #[must_use]
    pub fn select_label(self) -> &'static str {
        match self {
            Self::Hot => "Mark as Hot",
            Self::Cold => "Mark as Cold",
            Self::Neutral => "Mark as Neutral",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Self::Hot),
            "cold" => Ok(Self::Cold),
            "neutral" => Ok(Self::Neutral),
            _ => Err(Error::UnknownStatus(s.to_owned())),
        }
    }
}

/// A customer record as owned by the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Stable identifier used by the update operations.
    pub id: String,
    /// Display name; initials are derived from it.
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub status: CustomerStatus,
    /// Free-form segment label (e.g. `"Retail"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Newline-separated note log, oldest entry first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub last_contacted: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Arguments of the status update operation: `(customer_id, status, note?)`.
///
/// `note` is trimmed and never empty when present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub customer_id: String,
    pub status: CustomerStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl StatusUpdate {
    /// Build an update, trimming the note and dropping it when blank.
    pub fn new(customer_id: impl Into<String>, status: CustomerStatus, note: Option<&str>) -> Self {
        let note = note.map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned);
        Self {
            customer_id: customer_id.into(),
            status,
            note,
        }
    }
}

/// Replacement values for the editable customer fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub status: CustomerStatus,
}
