//! In-memory caching using moka
//!
//! Caches base prices and the holiday calendar in front of the price store.
//! Base price writes replace the cached entry; values read back from the
//! store only fill absent entries, so an older snapshot never overwrites a
//! newer write made by this process.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{info, warn};

use crate::pricing::store::PriceStore;
use crate::pricing::{HolidayCalendar, PassType};

const HOLIDAYS_KEY: &str = "holidays";

/// Application cache holding base prices and holidays
#[derive(Clone)]
pub struct AppCache {
    /// Base prices (pass type -> cost)
    pub base_prices: Cache<PassType, i32>,
    /// Holiday calendar (singleton)
    pub holidays: Cache<String, Arc<HolidayCalendar>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Base prices: one entry per pass type, 10 min TTL
            base_prices: Cache::builder()
                .max_capacity(16)
                .time_to_live(Duration::from_secs(10 * 60))
                .build(),

            // Holidays: 1 entry, 1 hour TTL (loaded once per season)
            holidays: Cache::builder()
                .max_capacity(1)
                .time_to_live(Duration::from_secs(60 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            base_prices_size: self.base_prices.entry_count(),
            holidays_cached: self.holidays.entry_count() > 0,
        }
    }

    /// Record a base price that was just written to the store
    pub async fn store_base_price(&self, pass_type: PassType, cost: i32) {
        self.base_prices.insert(pass_type, cost).await;
    }

    /// Cache a base price read from the store unless a value is already
    /// present, returning whichever value ends up cached.
    pub async fn fill_base_price(&self, pass_type: PassType, cost: i32) -> i32 {
        self.base_prices
            .entry(pass_type)
            .or_insert(cost)
            .await
            .into_value()
    }

    /// Cached holiday calendar, if loaded
    pub async fn cached_holidays(&self) -> Option<Arc<HolidayCalendar>> {
        self.holidays.get(HOLIDAYS_KEY).await
    }

    pub async fn store_holidays(&self, calendar: HolidayCalendar) -> Arc<HolidayCalendar> {
        let calendar = Arc::new(calendar);
        self.holidays
            .insert(HOLIDAYS_KEY.to_string(), calendar.clone())
            .await;
        calendar
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub base_prices_size: u64,
    pub holidays_cached: bool,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes it every `refresh` period.
pub async fn start_cache_warmer(cache: AppCache, store: PriceStore, refresh: Duration) {
    let mut interval = interval(refresh);
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &store).await;
    }
}

/// Warm the cache with the current tariff and holidays
pub async fn warm_cache(cache: &AppCache, store: &PriceStore) {
    info!("Starting cache warm-up...");

    match store.holidays().await {
        Ok(calendar) => {
            cache.store_holidays(calendar).await;
        }
        Err(e) => warn!("Failed to warm holiday cache: {}", e),
    }

    match store.base_prices().await {
        Ok(prices) => {
            for (pass_type, cost) in prices {
                cache.fill_base_price(pass_type, cost).await;
            }
        }
        Err(e) => warn!("Failed to warm base price cache: {}", e),
    }

    // entry_count is eventually consistent
    cache.base_prices.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}
