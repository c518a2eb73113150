use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::{parse_month, parse_year, HolidaysApiError};
use crate::data::Holiday;
use crate::server::AppState;

pub const PATH: &str = "/api/holidays/worldwide";

#[derive(Deserialize, Debug)]
pub struct WorldwideParams {
    pub year: Option<String>,
    pub month: Option<String>,
}

#[tracing::instrument(fields(?params), skip_all)]
pub async fn handler(
    State(AppState { holidays }): State<AppState>,
    Query(params): Query<WorldwideParams>,
) -> Result<Json<Vec<Holiday>>, HolidaysApiError> {
    let year = parse_year(params.year.as_deref())?;
    let month = parse_month(params.month.as_deref())?;

    let result = holidays.worldwide(year, month).await;
    tracing::info!(count = result.len(), "worldwide holidays");

    Ok(Json(result))
}
