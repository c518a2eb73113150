pub mod country;
pub mod worldwide;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::server::json_error_response;

#[derive(thiserror::Error, Debug)]
pub enum HolidaysApiError {
    #[error("{0}")]
    InvalidParams(&'static str),
}

impl IntoResponse for HolidaysApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            HolidaysApiError::InvalidParams(_) => {
                tracing::info!("{:?}", self);
                (StatusCode::BAD_REQUEST, Json(json_error_response(self))).into_response()
            }
        }
    }
}

/// `year` is required and must be a positive integer
fn parse_year(year: Option<&str>) -> Result<i32, HolidaysApiError> {
    let year = year
        .map(str::trim)
        .filter(|year| !year.is_empty())
        .ok_or(HolidaysApiError::InvalidParams("year is required"))?;

    match year.parse::<i32>() {
        Ok(year) if year > 0 => Ok(year),
        _ => Err(HolidaysApiError::InvalidParams(
            "year must be a positive integer",
        )),
    }
}

/// `month` is optional; an empty value counts as absent
fn parse_month(month: Option<&str>) -> Result<Option<u32>, HolidaysApiError> {
    let Some(month) = month.map(str::trim).filter(|month| !month.is_empty()) else {
        return Ok(None);
    };

    match month.parse::<u32>() {
        Ok(month @ 1..=12) => Ok(Some(month)),
        _ => Err(HolidaysApiError::InvalidParams(
            "month must be an integer between 1 and 12",
        )),
    }
}
