//! Pricing service functions with storage access.
//!
//! These functions resolve the evaluator's inputs through the cache and the
//! price store, then hand them to the pure calculators.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

use crate::cache::AppCache;
use crate::error::Result;

use super::calculators;
use super::models::{HolidayCalendar, PassType};
use super::requests::{BasePriceUpdate, QuoteInput};
use super::store::PriceStore;

/// Pricing error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown pass type '{0}'")]
    UnknownPassType(String),

    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),

    #[error("Invalid age '{0}': expected a non-negative integer")]
    InvalidAge(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid cost '{0}': expected a non-negative integer")]
    InvalidCost(String),

    #[error("No base price configured for pass type {0}")]
    MissingBasePrice(PassType),
}

impl PricingError {
    /// Machine-readable error type for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            PricingError::UnknownPassType(_) => "unknown_pass_type",
            PricingError::MissingParameter(_) => "missing_parameter",
            PricingError::InvalidAge(_) => "invalid_age",
            PricingError::InvalidDate(_) => "invalid_date",
            PricingError::InvalidCost(_) => "invalid_cost",
            PricingError::MissingBasePrice(_) => "missing_base_price",
        }
    }

    /// Whether the caller sent a bad request (as opposed to a misconfigured store)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PricingError::MissingBasePrice(_))
    }
}

/// Look up the base price, reading through the cache.
pub async fn base_price(store: &PriceStore, cache: &AppCache, pass_type: PassType) -> Result<i32> {
    if let Some(cost) = cache.base_prices.get(&pass_type).await {
        debug!("Cache HIT for base price: {}", pass_type);
        return Ok(cost);
    }

    debug!("Cache MISS for base price: {}", pass_type);
    let cost = store
        .base_price(pass_type)
        .await?
        .ok_or(PricingError::MissingBasePrice(pass_type))?;
    Ok(cache.fill_base_price(pass_type, cost).await)
}

/// Load the holiday calendar, reading through the cache.
pub async fn holiday_calendar(store: &PriceStore, cache: &AppCache) -> Result<Arc<HolidayCalendar>> {
    if let Some(calendar) = cache.cached_holidays().await {
        return Ok(calendar);
    }

    debug!("Cache MISS for holiday calendar");
    let calendar = store.holidays().await?;
    Ok(cache.store_holidays(calendar).await)
}

/// Whether a date is a holiday
pub async fn is_holiday(store: &PriceStore, cache: &AppCache, date: NaiveDate) -> Result<bool> {
    Ok(holiday_calendar(store, cache).await?.is_holiday(date))
}

/// Quote the cost of a lift pass.
///
/// The holiday calendar is only consulted when a visit date is given.
pub async fn quote_price(store: &PriceStore, cache: &AppCache, input: QuoteInput) -> Result<i64> {
    let base = base_price(store, cache, input.pass_type).await?;

    let holiday = match input.date {
        Some(date) => is_holiday(store, cache, date).await?,
        None => false,
    };

    let cost = calculators::evaluate(input.pass_type, base, input.age, input.date, holiday);

    debug!(
        pass_type = %input.pass_type,
        age = ?input.age,
        date = ?input.date,
        holiday,
        base,
        cost,
        "Quoted lift pass"
    );

    Ok(cost)
}

/// Replace the base price of a pass type.
pub async fn set_base_price(store: &PriceStore, cache: &AppCache, update: BasePriceUpdate) -> Result<()> {
    store.set_base_price(update.pass_type, update.cost).await?;
    cache.store_base_price(update.pass_type, update.cost).await;
    info!("Base price for {} set to {}", update.pass_type, update.cost);
    Ok(())
}
