//! JSON REST handlers for devices.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use devices_app::ports::DeviceRepository;
use devices_domain::device::{Device, DeviceState, DeviceUpdate, NewDevice};
use devices_domain::error::ValidationError;
use devices_domain::id::DeviceId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a device.
///
/// Every field is optional at the decoding stage so that a missing field is
/// reported as a validation error rather than a decoding failure.
#[derive(Deserialize)]
pub struct CreateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

/// Request body for partially updating a device.
#[derive(Deserialize)]
pub struct UpdateDeviceRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub state: Option<DeviceState>,
}

impl From<UpdateDeviceRequest> for DeviceUpdate {
    fn from(req: UpdateDeviceRequest) -> Self {
        Self {
            name: req.name,
            brand: req.brand,
            state: req.state,
        }
    }
}

/// Optional filters for the list endpoint. `brand` wins over `state`.
#[derive(Deserialize)]
pub struct ListParams {
    pub brand: Option<String>,
    pub state: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Device>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Device>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Device>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<DeviceId, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidValue {
        field: "id",
        value: raw.to_string(),
    })
}

/// `GET /api/devices[?brand=..|?state=..]`
pub async fn list<DR>(
    State(state): State<AppState<DR>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    tracing::info!(brand = ?params.brand, state = ?params.state, "listing devices");

    let devices = if let Some(brand) = params.brand {
        state.device_service.list_devices_by_brand(&brand).await?
    } else if let Some(device_state) = params.state {
        let device_state: DeviceState = device_state.parse()?;
        state
            .device_service
            .list_devices_by_state(device_state)
            .await?
    } else {
        state.device_service.list_devices().await?
    };

    tracing::debug!(count = devices.len(), "found devices");
    Ok(ListResponse::Ok(Json(devices)))
}

/// `GET /api/devices/:id`
pub async fn get<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    let device = state.device_service.get_device(device_id).await?;
    Ok(GetResponse::Ok(Json(device)))
}

/// `POST /api/devices`
pub async fn create<DR>(
    State(state): State<AppState<DR>>,
    body: Result<Json<CreateDeviceRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let Json(req) = body?;
    tracing::info!(name = ?req.name, brand = ?req.brand, "creating device");

    let mut builder = NewDevice::builder();
    if let Some(name) = req.name {
        builder = builder.name(name);
    }
    if let Some(brand) = req.brand {
        builder = builder.brand(brand);
    }
    if let Some(device_state) = req.state {
        builder = builder.state(device_state);
    }

    let device = builder.build()?;
    let created = state.device_service.create_device(device).await?;
    tracing::debug!(id = %created.id, "device created");
    Ok(CreateResponse::Created(Json(created)))
}

/// `PATCH /api/devices/:id`
pub async fn update<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
    body: Result<Json<UpdateDeviceRequest>, JsonRejection>,
) -> Result<GetResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    let Json(req) = body?;
    tracing::info!(id = %device_id, "updating device");

    let updated = state
        .device_service
        .update_device(device_id, req.into())
        .await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/devices/:id`
pub async fn delete<DR>(
    State(state): State<AppState<DR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    DR: DeviceRepository + Send + Sync + 'static,
{
    let device_id = parse_id(&id)?;
    tracing::info!(id = %device_id, "deleting device");
    state.device_service.delete_device(device_id).await?;
    Ok(DeleteResponse::NoContent)
}
