//! Request DTOs for pricing API endpoints.
//!
//! Query values are taken as raw strings so that every malformed value is
//! reported through `PricingError` with the same JSON error body.

use chrono::NaiveDate;
use serde::Deserialize;

use super::models::PassType;
use super::services::PricingError;

/// Query string for `GET /prices`
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "type")]
    pub pass_type: Option<String>,
    pub age: Option<String>,
    pub date: Option<String>,
}

/// Query string for `PUT /prices`
#[derive(Debug, Default, Deserialize)]
pub struct SetPriceQuery {
    #[serde(rename = "type")]
    pub pass_type: Option<String>,
    pub cost: Option<String>,
}

/// Validated quote request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteInput {
    pub pass_type: PassType,
    pub age: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Validated base price update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasePriceUpdate {
    pub pass_type: PassType,
    pub cost: i32,
}

impl TryFrom<PriceQuery> for QuoteInput {
    type Error = PricingError;

    fn try_from(query: PriceQuery) -> Result<Self, Self::Error> {
        let pass_type = parse_pass_type(query.pass_type.as_deref())?;

        let age = match non_blank(query.age.as_deref()) {
            // Negative ages are rejected here; the legacy service priced them as under-6 (free).
            Some(raw) => Some(
                raw.parse::<u32>()
                    .map_err(|_| PricingError::InvalidAge(raw.to_string()))?,
            ),
            None => None,
        };

        let date = match non_blank(query.date.as_deref()) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|_| PricingError::InvalidDate(raw.to_string()))?,
            ),
            None => None,
        };

        Ok(QuoteInput {
            pass_type,
            age,
            date,
        })
    }
}

impl TryFrom<SetPriceQuery> for BasePriceUpdate {
    type Error = PricingError;

    fn try_from(query: SetPriceQuery) -> Result<Self, Self::Error> {
        let pass_type = parse_pass_type(query.pass_type.as_deref())?;
        let raw = non_blank(query.cost.as_deref()).ok_or(PricingError::MissingParameter("cost"))?;
        let cost = raw
            .parse::<i32>()
            .ok()
            .filter(|c| *c >= 0)
            .ok_or_else(|| PricingError::InvalidCost(raw.to_string()))?;

        Ok(BasePriceUpdate { pass_type, cost })
    }
}

fn parse_pass_type(raw: Option<&str>) -> Result<PassType, PricingError> {
    non_blank(raw)
        .ok_or(PricingError::MissingParameter("type"))?
        .parse()
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;

    fn quote(pass_type: Option<&str>, age: Option<&str>, date: Option<&str>) -> Result<QuoteInput, PricingError> {
        PriceQuery {
            pass_type: pass_type.map(String::from),
            age: age.map(String::from),
            date: date.map(String::from),
        }
        .try_into()
    }

    #[test]
    fn test_query_string_fields_default_to_none() {
        let uri: axum::http::Uri = "/prices?type=night".parse().unwrap();
        let Query(query) = Query::<PriceQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.pass_type.as_deref(), Some("night"));
        assert_eq!(query.age, None);
        assert_eq!(query.date, None);

        let uri: axum::http::Uri = "/prices?cost=10".parse().unwrap();
        let Query(query) = Query::<SetPriceQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.pass_type, None);
        assert_eq!(query.cost.as_deref(), Some("10"));
    }

    #[test]
    fn test_quote_full() {
        let input = quote(Some("1jour"), Some("25"), Some("2019-02-11")).unwrap();
        assert_eq!(input.pass_type, PassType::Day);
        assert_eq!(input.age, Some(25));
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2019, 2, 11));
    }

    #[test]
    fn test_quote_optional_fields_absent() {
        let input = quote(Some("night"), None, None).unwrap();
        assert_eq!(input.age, None);
        assert_eq!(input.date, None);

        // blank values count as absent
        let input = quote(Some("night"), Some(""), Some(" ")).unwrap();
        assert_eq!(input.age, None);
        assert_eq!(input.date, None);
    }

    #[test]
    fn test_quote_rejects_missing_and_unknown_type() {
        assert!(matches!(quote(None, None, None), Err(PricingError::MissingParameter("type"))));
        assert!(matches!(
            quote(Some("2jours"), None, None),
            Err(PricingError::UnknownPassType(_))
        ));
    }

    #[test]
    fn test_quote_rejects_bad_age() {
        assert!(matches!(quote(Some("1jour"), Some("-1"), None), Err(PricingError::InvalidAge(_))));
        assert!(matches!(quote(Some("1jour"), Some("12.5"), None), Err(PricingError::InvalidAge(_))));
        assert!(matches!(quote(Some("1jour"), Some("abc"), None), Err(PricingError::InvalidAge(_))));
    }

    #[test]
    fn test_quote_rejects_bad_date() {
        assert!(matches!(
            quote(Some("1jour"), None, Some("2019-02-30")),
            Err(PricingError::InvalidDate(_))
        ));
        assert!(matches!(
            quote(Some("1jour"), None, Some("18/02/2019")),
            Err(PricingError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_set_price_validation() {
        let update: BasePriceUpdate = SetPriceQuery {
            pass_type: Some("night".to_string()),
            cost: Some("25".to_string()),
        }
        .try_into()
        .unwrap();
        assert_eq!(update, BasePriceUpdate { pass_type: PassType::Night, cost: 25 });

        let negative: Result<BasePriceUpdate, _> = SetPriceQuery {
            pass_type: Some("night".to_string()),
            cost: Some("-5".to_string()),
        }
        .try_into();
        assert!(matches!(negative, Err(PricingError::InvalidCost(_))));

        let missing: Result<BasePriceUpdate, _> = SetPriceQuery {
            pass_type: Some("1jour".to_string()),
            cost: None,
        }
        .try_into();
        assert!(matches!(missing, Err(PricingError::MissingParameter("cost"))));
    }
}
