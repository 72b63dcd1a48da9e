//! Response DTOs for pricing API endpoints.

use serde::Serialize;

/// Response for a price quote
#[derive(Debug, Serialize)]
pub struct CostResponse {
    pub cost: i64,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
