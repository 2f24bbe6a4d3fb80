//! Device: a physical item tracked by the catalog.
//!
//! A device carries identity fields (`name`, `brand`) and a lifecycle
//! [`DeviceState`]. While a device is [`DeviceState::InUse`] its identity
//! fields are locked, but its state can always change so that it can be
//! released again.

mod state;

use serde::{Deserialize, Serialize};

pub use self::state::DeviceState;
use crate::error::{ConflictError, DevicesError, InUseAction, ValidationError};
use crate::id::DeviceId;
use crate::time::{self, Timestamp};

/// A persisted device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    pub creation_time: Timestamp,
}

impl Device {
    /// Whether `name` and `brand` may be changed in the current state.
    #[must_use]
    pub fn can_update_name_and_brand(&self) -> bool {
        !self.state.is_in_use()
    }

    /// Whether the device may be removed from the catalog.
    #[must_use]
    pub fn can_be_deleted(&self) -> bool {
        !self.state.is_in_use()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::Validation`] when `name` or `brand` is blank.
    pub fn validate(&self) -> Result<(), DevicesError> {
        require_text("name", &self.name)?;
        require_text("brand", &self.brand)?;
        Ok(())
    }

    /// Merge a partial update into this device.
    ///
    /// The update is all-or-nothing: when it is rejected the device is left
    /// untouched. A field counts as changing only if it differs from the
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::Validation`] if a supplied name or brand is
    /// blank, or [`DevicesError::Conflict`] if the name or brand would change
    /// while the device is in use.
    pub fn apply(&mut self, update: DeviceUpdate) -> Result<(), DevicesError> {
        if let Some(name) = &update.name {
            require_text("name", name)?;
        }
        if let Some(brand) = &update.brand {
            require_text("brand", brand)?;
        }

        if !self.can_update_name_and_brand() && update.changes_identity_of(self) {
            return Err(ConflictError::DeviceInUse(InUseAction::UpdateNameOrBrand).into());
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(state) = update.state {
            self.state = state;
        }
        Ok(())
    }
}

/// A device that has not been persisted yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevice {
    pub name: String,
    pub brand: String,
    pub state: DeviceState,
    pub creation_time: Timestamp,
}

impl NewDevice {
    /// Create a builder for constructing a [`NewDevice`].
    #[must_use]
    pub fn builder() -> NewDeviceBuilder {
        NewDeviceBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::Validation`] when `name` or `brand` is blank.
    pub fn validate(&self) -> Result<(), DevicesError> {
        require_text("name", &self.name)?;
        require_text("brand", &self.brand)?;
        Ok(())
    }

    /// Attach the id the store assigned on insert.
    #[must_use]
    pub fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            brand: self.brand,
            state: self.state,
            creation_time: self.creation_time,
        }
    }
}

/// Step-by-step builder for [`NewDevice`].
///
/// The creation time is stamped when [`build`](Self::build) succeeds.
#[derive(Debug, Default)]
pub struct NewDeviceBuilder {
    name: Option<String>,
    brand: Option<String>,
    state: Option<DeviceState>,
}

impl NewDeviceBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: DeviceState) -> Self {
        self.state = Some(state);
        self
    }

    /// Consume the builder, validate, and return a [`NewDevice`].
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::Validation`] if `name` or `brand` is missing
    /// or blank, or if `state` is missing.
    pub fn build(self) -> Result<NewDevice, DevicesError> {
        let state = self
            .state
            .ok_or(ValidationError::MissingField { field: "state" })?;
        let device = NewDevice {
            name: self.name.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            state,
            creation_time: time::now(),
        };
        device.validate()?;
        Ok(device)
    }
}

/// Partial update of a device. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

impl DeviceUpdate {
    fn changes_identity_of(&self, device: &Device) -> bool {
        let name_changing = self.name.as_ref().is_some_and(|name| *name != device.name);
        let brand_changing = self
            .brand
            .as_ref()
            .is_some_and(|brand| *brand != device.brand);
        name_changing || brand_changing
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { field });
    }
    Ok(())
}
