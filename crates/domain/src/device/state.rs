//! Device state: where a device is in its lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lifecycle state of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceState {
    Available,
    InUse,
    Inactive,
}

impl DeviceState {
    /// Every state, in declaration order.
    pub const ALL: [Self; 3] = [Self::Available, Self::InUse, Self::Inactive];

    /// Wire and storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Whether the device is currently in active use.
    #[must_use]
    pub fn is_in_use(self) -> bool {
        matches!(self, Self::InUse)
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "state",
                value: s.to_string(),
            })
    }
}
