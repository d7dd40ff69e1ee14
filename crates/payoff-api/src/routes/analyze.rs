//! Payoff analysis endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use payoff_core::ContractInput;

use crate::dto::{AnalysisResponse, ContractRequest};
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::state::AppState;

/// Analyze a portfolio of option contracts.
///
/// All contracts are validated before anything is computed; the first
/// invalid one rejects the whole request.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = Vec<ContractRequest>,
    responses(
        (status = 200, description = "Payoff curve and statistics", body = AnalysisResponse),
        (status = 400, description = "Malformed body or invalid contract", body = ErrorResponse)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<Vec<ContractRequest>>, JsonRejection>,
) -> ApiResult<Json<AnalysisResponse>> {
    let Json(contracts) = payload?;
    let inputs: Vec<ContractInput> = contracts.into_iter().map(ContractInput::from).collect();

    let result = state.analyzer.analyze_inputs(&inputs).map_err(|err| {
        tracing::warn!("Rejected {} contracts: {}", inputs.len(), err);
        ApiError::from(err)
    })?;

    tracing::debug!(
        contracts = inputs.len(),
        break_even_points = result.break_even_prices.len(),
        "Analysis complete"
    );

    Ok(Json(result.into()))
}
