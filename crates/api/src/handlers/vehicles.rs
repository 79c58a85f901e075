//! Handlers for the vehicle power checker.
//!
//! Each public list endpoint answers one step of the cascade. Keys that match
//! nothing give an empty list (or, for `/power`, `{"data": null}`), never an
//! error status.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use tuneshop_core::error::CoreError;
use tuneshop_core::types::DbId;
use tuneshop_core::vehicle::{PowerReport, VehicleSelection};
use tuneshop_db::models::vehicle::{CreateVehicle, UpdateVehicle, VehicleFilter};
use tuneshop_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /vehicles/lookup`. Any suffix may be omitted.
#[derive(Debug, Default, Deserialize)]
pub struct LookupParams {
    pub vehicle_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub generation: Option<String>,
    pub engine: Option<String>,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Vehicle",
        id,
    })
}

// ---------------------------------------------------------------------------
// Public cascade
// ---------------------------------------------------------------------------

/// GET /api/v1/vehicles/{vehicle_type}/brands
pub async fn list_brands(
    State(state): State<AppState>,
    Path(vehicle_type): Path<String>,
) -> AppResult<impl IntoResponse> {
    let data = state.vehicles.list_brands(&state.pool, &vehicle_type).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/vehicles/{vehicle_type}/{brand}/models
pub async fn list_models(
    State(state): State<AppState>,
    Path((vehicle_type, brand)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let data = state
        .vehicles
        .list_models(&state.pool, &vehicle_type, &brand)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/vehicles/{vehicle_type}/{brand}/{model}/generations
pub async fn list_generations(
    State(state): State<AppState>,
    Path((vehicle_type, brand, model)): Path<(String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let data = state
        .vehicles
        .list_generations(&state.pool, &vehicle_type, &brand, &model)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/vehicles/{vehicle_type}/{brand}/{model}/{generation}/engines
pub async fn list_engines(
    State(state): State<AppState>,
    Path((vehicle_type, brand, model, generation)): Path<(String, String, String, String)>,
) -> AppResult<impl IntoResponse> {
    let data = state
        .vehicles
        .list_engines(&state.pool, &vehicle_type, &brand, &model, &generation)
        .await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/vehicles/{vehicle_type}/{brand}/{model}/{generation}/{engine}/power
///
/// `{"data": null}` when no entry exists for the exact five-part key; the
/// site shows its "no data for this vehicle" state.
pub async fn get_power(
    State(state): State<AppState>,
    Path((vehicle_type, brand, model, generation, engine)): Path<(
        String,
        String,
        String,
        String,
        String,
    )>,
) -> AppResult<impl IntoResponse> {
    let entry = state
        .vehicles
        .get_power(&state.pool, &vehicle_type, &brand, &model, &generation, &engine)
        .await?;
    if entry.is_none() {
        tracing::debug!(%vehicle_type, %brand, %model, %generation, %engine, "No power data");
    }
    Ok(Json(DataResponse {
        data: entry.map(PowerReport::from),
    }))
}

/// GET /api/v1/vehicles/lookup
///
/// Combined cascade step: echoes the accepted selection, names the next
/// level, lists its options and, once complete, carries the power figures.
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<impl IntoResponse> {
    let selection = VehicleSelection::from_partial(
        params.vehicle_type.as_deref(),
        params.brand.as_deref(),
        params.model.as_deref(),
        params.generation.as_deref(),
        params.engine.as_deref(),
    );
    let data = state.vehicles.lookup(&state.pool, selection).await?;
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/vehicles
pub async fn admin_list_vehicles(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<VehicleFilter>,
) -> AppResult<impl IntoResponse> {
    let vehicles = VehicleRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: vehicles }))
}

/// GET /api/v1/admin/vehicles/{id}
pub async fn get_vehicle(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: vehicle }))
}

/// POST /api/v1/admin/vehicles
pub async fn create_vehicle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let vehicle = VehicleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        vehicle_id = vehicle.id,
        brand = %vehicle.brand,
        model = %vehicle.model,
        engine = %vehicle.engine,
        user_id = admin.user_id,
        source = state.vehicles.name(),
        "Vehicle created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: vehicle })))
}

/// PUT /api/v1/admin/vehicles/{id}
pub async fn update_vehicle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVehicle>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(vehicle_id = id, user_id = admin.user_id, "Vehicle updated");

    Ok(Json(DataResponse { data: vehicle }))
}

/// DELETE /api/v1/admin/vehicles/{id}
pub async fn delete_vehicle(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !VehicleRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(vehicle_id = id, user_id = admin.user_id, "Vehicle deleted");
    Ok(StatusCode::NO_CONTENT)
}
