//! Device service: use-cases for managing the device catalog.

use devices_domain::device::{Device, DeviceState, DeviceUpdate, NewDevice};
use devices_domain::error::{ConflictError, DevicesError, InUseAction, NotFoundError};
use devices_domain::id::DeviceId;

use crate::ports::DeviceRepository;

/// Application service for device lifecycle operations.
///
/// Every error is returned to the caller as-is; nothing is logged, retried,
/// or suppressed here.
pub struct DeviceService<R> {
    repo: R,
}

impl<R: DeviceRepository> DeviceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new device after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, device), fields(device_name = %device.name, device_brand = %device.brand))]
    pub async fn create_device(&self, device: NewDevice) -> Result<Device, DevicesError> {
        device.validate()?;
        self.repo.insert(device).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, DevicesError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, DevicesError> {
        self.repo.get_all().await
    }

    /// List devices whose brand matches `brand` exactly.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices_by_brand(&self, brand: &str) -> Result<Vec<Device>, DevicesError> {
        self.repo.find_by_brand(brand).await
    }

    /// List devices currently in `state`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices_by_state(
        &self,
        state: DeviceState,
    ) -> Result<Vec<Device>, DevicesError> {
        self.repo.find_by_state(state).await
    }

    /// Apply a partial update to an existing device and persist the result.
    ///
    /// Name and brand are locked while the device is in use; state is not.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::NotFound`] when no device with `id` exists,
    /// [`DevicesError::Conflict`] when the name or brand of an in-use device
    /// would change, [`DevicesError::Validation`] when a supplied name or
    /// brand is blank, or a storage error from the repository.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_device(
        &self,
        id: DeviceId,
        update: DeviceUpdate,
    ) -> Result<Device, DevicesError> {
        let mut device = self.get_device(id).await?;
        device.apply(update)?;
        self.repo.update(device).await
    }

    /// Delete a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`DevicesError::NotFound`] when no device with `id` exists,
    /// [`DevicesError::Conflict`] when the device is in use, or a storage
    /// error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<(), DevicesError> {
        let device = self.get_device(id).await?;
        if !device.can_be_deleted() {
            return Err(ConflictError::DeviceInUse(InUseAction::Delete).into());
        }
        self.repo.delete(id).await
    }
}
