use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::{parse_year, HolidaysApiError};
use crate::data::{normalize_country_code, Holiday};
use crate::server::AppState;

pub const PATH: &str = "/api/holidays/{country_code}";

#[derive(Deserialize, Debug)]
pub struct CountryParams {
    pub year: Option<String>,
}

#[tracing::instrument(fields(%country_code, ?params), skip_all)]
pub async fn handler(
    State(AppState { holidays }): State<AppState>,
    Path(country_code): Path<String>,
    Query(params): Query<CountryParams>,
) -> Result<Json<Vec<Holiday>>, HolidaysApiError> {
    let country_code = normalize_country_code(&country_code).ok_or(
        HolidaysApiError::InvalidParams("country code must be two ASCII letters"),
    )?;
    let year = parse_year(params.year.as_deref())?;

    Ok(Json(holidays.country(year, &country_code).await))
}
