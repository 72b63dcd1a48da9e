//! Base price and holiday storage.
//!
//! Backed by PostgreSQL when a pool is configured, otherwise by an
//! in-memory map seeded with the default tariff. Every lookup and write is
//! treated as atomic; the store does no retrying of its own.

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::error::Result;

use super::models::{HolidayCalendar, PassType};
use super::queries;

/// Seed tariff for a fresh installation
pub const DEFAULT_BASE_PRICES: [(PassType, i32); 2] = [(PassType::Day, 35), (PassType::Night, 19)];

/// In-memory tables
pub struct MemoryBackend {
    base_prices: RwLock<HashMap<PassType, i32>>,
    holidays: HolidayCalendar,
}

/// Storage for base prices and holidays
#[derive(Clone)]
pub enum PriceStore {
    Postgres(PgPool),
    Memory(Arc<MemoryBackend>),
}

impl PriceStore {
    pub fn postgres(pool: PgPool) -> Self {
        PriceStore::Postgres(pool)
    }

    /// In-memory store holding the given prices and holidays
    pub fn in_memory(
        base_prices: impl IntoIterator<Item = (PassType, i32)>,
        holidays: HolidayCalendar,
    ) -> Self {
        PriceStore::Memory(Arc::new(MemoryBackend {
            base_prices: RwLock::new(base_prices.into_iter().collect()),
            holidays,
        }))
    }

    /// In-memory store with the default tariff and holidays
    pub fn seeded() -> Self {
        Self::in_memory(DEFAULT_BASE_PRICES, HolidayCalendar::default_seed())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            PriceStore::Postgres(_) => "postgres",
            PriceStore::Memory(_) => "memory",
        }
    }

    pub async fn base_price(&self, pass_type: PassType) -> Result<Option<i32>> {
        match self {
            PriceStore::Postgres(pool) => queries::get_base_price(pool, pass_type).await,
            PriceStore::Memory(mem) => Ok(mem.base_prices.read().await.get(&pass_type).copied()),
        }
    }

    pub async fn set_base_price(&self, pass_type: PassType, cost: i32) -> Result<()> {
        match self {
            PriceStore::Postgres(pool) => queries::upsert_base_price(pool, pass_type, cost).await,
            PriceStore::Memory(mem) => {
                mem.base_prices.write().await.insert(pass_type, cost);
                Ok(())
            }
        }
    }

    /// All configured base prices; rows with an unknown type are skipped
    pub async fn base_prices(&self) -> Result<Vec<(PassType, i32)>> {
        match self {
            PriceStore::Postgres(pool) => {
                let rows = queries::get_all_base_prices(pool).await?;
                Ok(rows
                    .into_iter()
                    .filter_map(|row| match row.pass_type.parse::<PassType>() {
                        Ok(pass_type) => Some((pass_type, row.cost)),
                        Err(_) => {
                            tracing::warn!("Ignoring base price for unknown type: {}", row.pass_type);
                            None
                        }
                    })
                    .collect())
            }
            PriceStore::Memory(mem) => Ok(mem
                .base_prices
                .read()
                .await
                .iter()
                .map(|(pass_type, cost)| (*pass_type, *cost))
                .collect()),
        }
    }

    pub async fn holidays(&self) -> Result<HolidayCalendar> {
        match self {
            PriceStore::Postgres(pool) => Ok(queries::get_holidays(pool).await?.into()),
            PriceStore::Memory(mem) => Ok(mem.holidays.clone()),
        }
    }
}
