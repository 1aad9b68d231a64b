//! Statistics API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{BrandCount, ConnectorPower, DifficultyCount, StatsSummary};
use crate::interfaces::http::common::{error_response, ApiResponse};
use crate::interfaces::http::modules::ApiState;

#[utoipa::path(
    get,
    path = "/api/v1/stats/summary",
    tag = "Statistics",
    responses(
        (status = 200, description = "Catalog summary", body = ApiResponse<StatsSummary>)
    )
)]
pub async fn stats_summary(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<StatsSummary>>, (StatusCode, Json<ApiResponse<()>>)> {
    let total_vehicles = state
        .repos
        .vehicles()
        .count()
        .await
        .map_err(error_response)?;
    let total_charge_profiles = state
        .repos
        .charge_profiles()
        .count()
        .await
        .map_err(error_response)?;
    let total_stations = state
        .repos
        .stations()
        .count()
        .await
        .map_err(error_response)?;
    let average_range_km = state
        .repos
        .vehicles()
        .average_range_km()
        .await
        .map_err(error_response)?;

    Ok(Json(ApiResponse::success(StatsSummary {
        total_vehicles,
        total_charge_profiles,
        total_stations,
        average_range_km,
    })))
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/vehicles-by-brand",
    tag = "Statistics",
    responses(
        (status = 200, description = "Vehicle counts per brand", body = ApiResponse<Vec<BrandCount>>)
    )
)]
pub async fn vehicles_by_brand(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<BrandCount>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.vehicles().count_by_brand().await {
        Ok(counts) => {
            let items = counts
                .into_iter()
                .map(|(brand, count)| BrandCount { brand, count })
                .collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/station-power-by-connector",
    tag = "Statistics",
    responses(
        (status = 200, description = "Average station power per connector type", body = ApiResponse<Vec<ConnectorPower>>)
    )
)]
pub async fn station_power_by_connector(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<ConnectorPower>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.stations().average_power_by_connector().await {
        Ok(averages) => {
            let items = averages
                .into_iter()
                .map(|(connector, average_power_kw)| ConnectorPower {
                    connector_type: connector.to_string(),
                    average_power_kw,
                })
                .collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stats/charge-difficulty",
    tag = "Statistics",
    responses(
        (status = 200, description = "Charge profile counts per difficulty", body = ApiResponse<Vec<DifficultyCount>>)
    )
)]
pub async fn charge_difficulty_distribution(
    State(state): State<ApiState>,
) -> Result<Json<ApiResponse<Vec<DifficultyCount>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.repos.charge_profiles().count_by_difficulty().await {
        Ok(counts) => {
            let items = counts
                .into_iter()
                .map(|(difficulty, count)| DifficultyCount {
                    difficulty: difficulty.to_string(),
                    count,
                })
                .collect();
            Ok(Json(ApiResponse::success(items)))
        }
        Err(e) => Err(error_response(e)),
    }
}
