//! Station REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    CreateStationRequest, DeletedStationResponse, StationResponse, StationSearchParams,
    UpdateStationRequest,
};
use crate::domain::station::{ConnectorType, NewStation, StationPatch};
use crate::interfaces::http::common::{error_response, ApiResponse, ListParams, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

fn parse_connector(s: &str) -> Result<ConnectorType, (StatusCode, Json<ApiResponse<()>>)> {
    ConnectorType::parse(s).ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(
            "connector_type must be one of CCS, CHAdeMO, Type2, Schuko, Tesla, Other",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "Stations",
    params(ListParams),
    responses(
        (status = 200, description = "Station list", body = ApiResponse<Vec<StationResponse>>)
    )
)]
pub async fn list_stations(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<StationResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().list(params.skip, params.limit).await {
        Ok(stations) => {
            let responses: Vec<StationResponse> = stations.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station details", body = ApiResponse<StationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_station(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<StationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().find_by_id(id).await {
        Ok(Some(station)) => Ok(Json(ApiResponse::success(station.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Station {} not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/search",
    tag = "Stations",
    params(StationSearchParams),
    responses(
        (status = 200, description = "Matching stations", body = ApiResponse<Vec<StationResponse>>),
        (status = 404, description = "No stations match")
    )
)]
pub async fn search_stations(
    State(state): State<ApiState>,
    Query(params): Query<StationSearchParams>,
) -> Result<Json<ApiResponse<Vec<StationResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().search_by_name(&params.name).await {
        Ok(stations) if stations.is_empty() => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("No stations match that name")),
        )),
        Ok(stations) => {
            let responses: Vec<StationResponse> = stations.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/stations",
    tag = "Stations",
    request_body = CreateStationRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<StationResponse>),
        (status = 400, description = "Duplicate (name, location)"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_station(
    State(state): State<ApiState>,
    ValidatedJson(req): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StationResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let draft = NewStation {
        name: req.name,
        location: req.location,
        connector_type: parse_connector(&req.connector_type)?,
        power_kw: req.power_kw,
        connector_count: req.connector_count,
        public_access: req.public_access,
        opening_hours: req.opening_hours,
        cost_per_kwh: req.cost_per_kwh,
        operator: req.operator,
        image_url: req.image_url,
    };

    match state.repos.stations().create(draft).await {
        Ok(station) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(station.into())),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(("id" = i32, Path, description = "Station ID")),
    request_body = UpdateStationRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<StationResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_station(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateStationRequest>,
) -> Result<Json<ApiResponse<StationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let connector_type = match &req.connector_type {
        Some(s) => Some(parse_connector(s)?),
        None => None,
    };

    let patch = StationPatch {
        name: req.name,
        location: req.location,
        connector_type,
        power_kw: req.power_kw,
        connector_count: req.connector_count,
        public_access: req.public_access,
        opening_hours: req.opening_hours,
        cost_per_kwh: req.cost_per_kwh,
        operator: req.operator,
        image_url: req.image_url,
    };

    match state.repos.stations().update(id, patch).await {
        Ok(station) => Ok(Json(ApiResponse::success(station.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    params(("id" = i32, Path, description = "Station ID")),
    responses(
        (status = 204, description = "Moved to history"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_station(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().delete(id).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/deleted",
    tag = "Stations",
    params(ListParams),
    responses(
        (status = 200, description = "Deleted station history", body = ApiResponse<Vec<DeletedStationResponse>>)
    )
)]
pub async fn list_deleted_stations(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<DeletedStationResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .stations()
        .list_deleted(params.skip, params.limit)
        .await
    {
        Ok(stations) => {
            let responses: Vec<DeletedStationResponse> =
                stations.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/deleted/{id}",
    tag = "Stations",
    params(("id" = i32, Path, description = "Original station ID")),
    responses(
        (status = 200, description = "Deleted station", body = ApiResponse<DeletedStationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_deleted_station(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<DeletedStationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().find_deleted(id).await {
        Ok(Some(station)) => Ok(Json(ApiResponse::success(station.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Deleted station {} not found",
                id
            ))),
        )),
        Err(e) => Err(error_response(e)),
    }
}
