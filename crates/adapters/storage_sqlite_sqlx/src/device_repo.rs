//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use devices_app::ports::DeviceRepository;
use devices_domain::device::{Device, DeviceState, NewDevice};
use devices_domain::error::{DevicesError, NotFoundError};
use devices_domain::id::DeviceId;
use devices_domain::time;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }

    fn unwrap_all(rows: Vec<Self>) -> Vec<Device> {
        rows.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let brand: String = row.try_get("brand")?;
        let state: String = row.try_get("state")?;
        let creation_time: String = row.try_get("creation_time")?;

        let state: DeviceState = state
            .parse()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let creation_time = time::parse_rfc3339(&creation_time)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Device {
            id: DeviceId::from_raw(id),
            name,
            brand,
            state,
            creation_time,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (name, brand, state, creation_time) VALUES (?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM devices WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY id";
const SELECT_BY_BRAND: &str = "SELECT * FROM devices WHERE brand = ? ORDER BY id";
const SELECT_BY_STATE: &str = "SELECT * FROM devices WHERE state = ? ORDER BY id";
const UPDATE: &str = "UPDATE devices SET name = ?, brand = ?, state = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn insert(&self, device: NewDevice) -> impl Future<Output = Result<Device, DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&device.name)
                .bind(&device.brand)
                .bind(device.state.as_str())
                .bind(time::to_rfc3339(&device.creation_time))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = DeviceId::from_raw(result.last_insert_rowid());
            tracing::debug!(%id, "inserted device row");
            Ok(device.into_device(id))
        }
    }

    fn update(&self, device: Device) -> impl Future<Output = Result<Device, DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&device.name)
                .bind(&device.brand)
                .bind(device.state.as_str())
                .bind(device.id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Device",
                    id: device.id.to_string(),
                }
                .into());
            }
            Ok(device)
        }
    }

    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_brand(
        &self,
        brand: &str,
    ) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        let pool = self.pool.clone();
        let brand = brand.to_string();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_BRAND)
                .bind(brand)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn find_by_state(
        &self,
        state: DeviceState,
    ) -> impl Future<Output = Result<Vec<Device>, DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_STATE)
                .bind(state.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::unwrap_all(rows))
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), DevicesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
