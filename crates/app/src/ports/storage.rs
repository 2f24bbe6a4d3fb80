//! Storage port: repository trait for device persistence.

use std::future::Future;

use devices_domain::device::{Device, DeviceState, NewDevice};
use devices_domain::error::DevicesError;
use devices_domain::id::DeviceId;

/// Persistence gateway for devices.
///
/// Implementations report backend failures as [`DevicesError::Storage`] and
/// never interpret business rules.
pub trait DeviceRepository {
    /// Persist a new device. The store assigns and returns its id.
    fn insert(&self, device: NewDevice) -> impl Future<Output = Result<Device, DevicesError>> + Send;

    /// Replace the mutable fields (`name`, `brand`, `state`) of an existing device.
    ///
    /// `creation_time` is never rewritten.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DevicesError>> + Send;

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevicesError>> + Send;

    /// All devices, in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send;

    /// Devices whose brand equals `brand` exactly (case-sensitive).
    fn find_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send;

    fn find_by_state(
        &self,
        state: DeviceState,
    ) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send;

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DevicesError>> + Send;
}
