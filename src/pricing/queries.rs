//! Database queries for the pricing engine.

use sqlx::PgPool;

use crate::error::AppError;

use super::models::{BasePriceRow, HolidayRow, PassType};

/// Get the configured base price for a pass type
pub async fn get_base_price(pool: &PgPool, pass_type: PassType) -> Result<Option<i32>, AppError> {
    let cost = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT cost
        FROM base_price
        WHERE type = $1
        "#,
    )
    .bind(pass_type.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(cost)
}

/// Insert or replace the base price for a pass type
pub async fn upsert_base_price(pool: &PgPool, pass_type: PassType, cost: i32) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO base_price (type, cost)
        VALUES ($1, $2)
        ON CONFLICT (type) DO UPDATE SET cost = EXCLUDED.cost
        "#,
    )
    .bind(pass_type.as_str())
    .bind(cost)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get all base prices (for cache warming)
pub async fn get_all_base_prices(pool: &PgPool) -> Result<Vec<BasePriceRow>, AppError> {
    let rows = sqlx::query_as::<_, BasePriceRow>(
        r#"
        SELECT type, cost
        FROM base_price
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Get every configured holiday
pub async fn get_holidays(pool: &PgPool) -> Result<Vec<HolidayRow>, AppError> {
    let rows = sqlx::query_as::<_, HolidayRow>(
        r#"
        SELECT holiday, description
        FROM holidays
        ORDER BY holiday
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
