//! Vehicle REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateVehicleRequest, DeletedVehicleResponse, UpdateVehicleRequest, VehicleResponse,
    VehicleSearchParams,
};
use crate::interfaces::http::common::{error_response, ApiResponse, ListParams, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

#[utoipa::path(
    get,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    params(ListParams),
    responses(
        (status = 200, description = "Vehicle list", body = ApiResponse<Vec<VehicleResponse>>)
    )
)]
pub async fn list_vehicles(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().list(params.skip, params.limit).await {
        Ok(vehicles) => {
            let responses: Vec<VehicleResponse> = vehicles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle details", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_vehicle(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VehicleResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().find_by_id(id).await {
        Ok(Some(vehicle)) => Ok(Json(ApiResponse::success(vehicle.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Vehicle {} not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/search",
    tag = "Vehicles",
    params(VehicleSearchParams),
    responses(
        (status = 200, description = "Matching vehicles", body = ApiResponse<Vec<VehicleResponse>>),
        (status = 404, description = "No vehicles match")
    )
)]
pub async fn search_vehicles(
    State(state): State<ApiState>,
    Query(params): Query<VehicleSearchParams>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().search_by_model(&params.model).await {
        Ok(vehicles) if vehicles.is_empty() => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("No vehicles match that model")),
        )),
        Ok(vehicles) => {
            let responses: Vec<VehicleResponse> = vehicles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/vehicles",
    tag = "Vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<VehicleResponse>),
        (status = 400, description = "Duplicate (model, year)"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_vehicle(
    State(state): State<ApiState>,
    ValidatedJson(req): ValidatedJson<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match state.repos.vehicles().create(req.into()).await {
        Ok(vehicle) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(vehicle.into())),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<VehicleResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_vehicle(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().update(id, req.into()).await {
        Ok(vehicle) => Ok(Json(ApiResponse::success(vehicle.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/vehicles/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 204, description = "Moved to history"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_vehicle(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().delete(id).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/deleted",
    tag = "Vehicles",
    params(ListParams),
    responses(
        (status = 200, description = "Deleted vehicle history", body = ApiResponse<Vec<DeletedVehicleResponse>>)
    )
)]
pub async fn list_deleted_vehicles(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<DeletedVehicleResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .vehicles()
        .list_deleted(params.skip, params.limit)
        .await
    {
        Ok(vehicles) => {
            let responses: Vec<DeletedVehicleResponse> =
                vehicles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/vehicles/deleted/{id}",
    tag = "Vehicles",
    params(("id" = i32, Path, description = "Original vehicle ID")),
    responses(
        (status = 200, description = "Deleted vehicle", body = ApiResponse<DeletedVehicleResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_deleted_vehicle(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<DeletedVehicleResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().find_deleted(id).await {
        Ok(Some(vehicle)) => Ok(Json(ApiResponse::success(vehicle.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Deleted vehicle {} not found",
                id
            ))),
        )),
        Err(e) => Err(error_response(e)),
    }
}
