//! Charge profile REST API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    ChargeProfileResponse, ChargeProfileSearchParams, CreateChargeProfileRequest,
    DeletedChargeProfileResponse, UpdateChargeProfileRequest,
};
use crate::domain::charge_profile::{
    ChargeDifficulty, ChargeProfilePatch, NewChargeProfile, RangeStandard,
};
use crate::interfaces::http::common::{error_response, ApiResponse, ListParams, ValidatedJson};
use crate::interfaces::http::modules::ApiState;

fn parse_standard(s: &str) -> Result<RangeStandard, (StatusCode, Json<ApiResponse<()>>)> {
    RangeStandard::parse(s).ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(
            "range_standard must be one of WLTP, EPA, NEDC, Other",
        )),
    ))
}

fn parse_difficulty(s: &str) -> Result<ChargeDifficulty, (StatusCode, Json<ApiResponse<()>>)> {
    ChargeDifficulty::parse(s).ok_or((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(
            "charge_difficulty must be one of low, medium, high",
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/charge-profiles",
    tag = "Charge Profiles",
    params(ListParams),
    responses(
        (status = 200, description = "Charge profile list", body = ApiResponse<Vec<ChargeProfileResponse>>)
    )
)]
pub async fn list_charge_profiles(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<ChargeProfileResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .charge_profiles()
        .list(params.skip, params.limit)
        .await
    {
        Ok(profiles) => {
            let responses: Vec<ChargeProfileResponse> =
                profiles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/charge-profiles/{id}",
    tag = "Charge Profiles",
    params(("id" = i32, Path, description = "Charge profile ID")),
    responses(
        (status = 200, description = "Charge profile details", body = ApiResponse<ChargeProfileResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_charge_profile(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ChargeProfileResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.charge_profiles().find_by_id(id).await {
        Ok(Some(profile)) => Ok(Json(ApiResponse::success(profile.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Charge profile {} not found",
                id
            ))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/charge-profiles/search",
    tag = "Charge Profiles",
    params(ChargeProfileSearchParams),
    responses(
        (status = 200, description = "Matching profiles", body = ApiResponse<Vec<ChargeProfileResponse>>),
        (status = 404, description = "No profiles match")
    )
)]
pub async fn search_charge_profiles(
    State(state): State<ApiState>,
    Query(params): Query<ChargeProfileSearchParams>,
) -> Result<Json<ApiResponse<Vec<ChargeProfileResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .repos
        .charge_profiles()
        .search_by_vehicle_model(&params.vehicle_model)
        .await
    {
        Ok(profiles) if profiles.is_empty() => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(
                "No charge profiles match that vehicle model",
            )),
        )),
        Ok(profiles) => {
            let responses: Vec<ChargeProfileResponse> =
                profiles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/charge-profiles",
    tag = "Charge Profiles",
    request_body = CreateChargeProfileRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<ChargeProfileResponse>),
        (status = 400, description = "Duplicate (vehicle_model, range_standard)"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_charge_profile(
    State(state): State<ApiState>,
    ValidatedJson(req): ValidatedJson<CreateChargeProfileRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ChargeProfileResponse>>),
    (StatusCode, Json<ApiResponse<()>>),
> {
    let draft = NewChargeProfile {
        vehicle_model: req.vehicle_model,
        range_standard: parse_standard(&req.range_standard)?,
        consumption_kwh_100km: req.consumption_kwh_100km,
        charge_time_hours: req.charge_time_hours,
        charge_difficulty: parse_difficulty(&req.charge_difficulty)?,
        home_install_required: req.home_install_required,
        image_url: req.image_url,
    };

    match state.repos.charge_profiles().create(draft).await {
        Ok(profile) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(profile.into())),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/v1/charge-profiles/{id}",
    tag = "Charge Profiles",
    params(("id" = i32, Path, description = "Charge profile ID")),
    request_body = UpdateChargeProfileRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<ChargeProfileResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_charge_profile(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
    ValidatedJson(req): ValidatedJson<UpdateChargeProfileRequest>,
) -> Result<Json<ApiResponse<ChargeProfileResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let range_standard = match &req.range_standard {
        Some(s) => Some(parse_standard(s)?),
        None => None,
    };
    let charge_difficulty = match &req.charge_difficulty {
        Some(s) => Some(parse_difficulty(s)?),
        None => None,
    };

    let patch = ChargeProfilePatch {
        vehicle_model: req.vehicle_model,
        range_standard,
        consumption_kwh_100km: req.consumption_kwh_100km,
        charge_time_hours: req.charge_time_hours,
        charge_difficulty,
        home_install_required: req.home_install_required,
        image_url: req.image_url,
    };

    match state.repos.charge_profiles().update(id, patch).await {
        Ok(profile) => Ok(Json(ApiResponse::success(profile.into()))),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/charge-profiles/{id}",
    tag = "Charge Profiles",
    params(("id" = i32, Path, description = "Charge profile ID")),
    responses(
        (status = 204, description = "Moved to history"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_charge_profile(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.charge_profiles().delete(id).await {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/charge-profiles/deleted",
    tag = "Charge Profiles",
    params(ListParams),
    responses(
        (status = 200, description = "Deleted profile history", body = ApiResponse<Vec<DeletedChargeProfileResponse>>)
    )
)]
pub async fn list_deleted_charge_profiles(
    State(state): State<ApiState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<Vec<DeletedChargeProfileResponse>>>, (StatusCode, Json<ApiResponse<()>>)>
{
    match state
        .repos
        .charge_profiles()
        .list_deleted(params.skip, params.limit)
        .await
    {
        Ok(profiles) => {
            let responses: Vec<DeletedChargeProfileResponse> =
                profiles.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/charge-profiles/deleted/{id}",
    tag = "Charge Profiles",
    params(("id" = i32, Path, description = "Original charge profile ID")),
    responses(
        (status = 200, description = "Deleted profile", body = ApiResponse<DeletedChargeProfileResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_deleted_charge_profile(
    State(state): State<ApiState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<DeletedChargeProfileResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.charge_profiles().find_deleted(id).await {
        Ok(Some(profile)) => Ok(Json(ApiResponse::success(profile.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!(
                "Deleted charge profile {} not found",
                id
            ))),
        )),
        Err(e) => Err(error_response(e)),
    }
}
