//! Lift pass pricing engine.
//!
//! Quotes pass prices from a base price, the rider's age and the visit date,
//! and lets administrators replace base prices.

pub mod calculators;
pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod store;

// Re-export commonly used items
pub use calculators::{evaluate, reduction_percent};
pub use models::{AgeBracket, HolidayCalendar, PassType};
pub use routes::router;
pub use services::PricingError;
pub use store::PriceStore;
