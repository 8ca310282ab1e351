//! Route handlers, grouped by resource

pub mod habits;
pub mod health;
pub mod sleep;
pub mod stats;

use chrono::{Local, NaiveDate};

use crate::analytics::dates;
use crate::api::dto::AsOfParams;
use crate::api::error::{ApiError, ApiResult};

/// Resolve the reference date for an analytics request
///
/// The engine never reads the clock; when the client omits `as_of`, the
/// local calendar date is resolved once here and threaded through.
pub(crate) fn resolve_as_of(params: &AsOfParams) -> ApiResult<NaiveDate> {
    match params.as_of.as_deref() {
        None => Ok(Local::now().date_naive()),
        Some(raw) => dates::parse_date(raw)
            .ok_or_else(|| ApiError::Validation(format!("Invalid as_of date: {raw}"))),
    }
}

/// Reject month numbers outside 1-12
pub(crate) fn validate_month(month: u32) -> ApiResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "Invalid month: {month}. Use 1-12"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_as_of_parses_explicit_date() {
        let params = AsOfParams {
            as_of: Some("2025-06-10".to_string()),
        };
        assert_eq!(
            resolve_as_of(&params).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
    }

    #[test]
    fn test_resolve_as_of_rejects_garbage() {
        let params = AsOfParams {
            as_of: Some("June 10th".to_string()),
        };
        assert!(resolve_as_of(&params).is_err());
    }

    #[test]
    fn test_validate_month_bounds() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }
}
