//! Domain types for lift pass pricing.
//!
//! Pass types and age brackets are closed sets. Rows map directly onto the
//! `base_price` and `holidays` tables via sqlx's FromRow derive.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::services::PricingError;

/// Lift pass type, identified on the wire by its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassType {
    /// Day pass ("1jour")
    #[serde(rename = "1jour")]
    Day,
    /// Night pass ("night")
    #[serde(rename = "night")]
    Night,
}

impl PassType {
    pub const ALL: [PassType; 2] = [PassType::Day, PassType::Night];

    /// Wire tag, also the `base_price.type` key
    pub fn as_str(&self) -> &'static str {
        match self {
            PassType::Day => "1jour",
            PassType::Night => "night",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PassType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1jour" => Ok(PassType::Day),
            "night" => Ok(PassType::Night),
            other => Err(PricingError::UnknownPassType(other.to_string())),
        }
    }
}

/// Age range selecting the pricing formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    /// Under 6, always free
    Infant,
    /// 6 to 14
    Child,
    /// 15 to 64
    Adult,
    /// Over 64
    Senior,
    /// No age given
    Unstated,
}

impl AgeBracket {
    pub fn classify(age: Option<u32>) -> Self {
        match age {
            None => AgeBracket::Unstated,
            Some(a) if a < 6 => AgeBracket::Infant,
            Some(a) if a <= 14 => AgeBracket::Child,
            Some(a) if a <= 64 => AgeBracket::Adult,
            Some(_) => AgeBracket::Senior,
        }
    }
}

/// Row from base_price
#[derive(Debug, Clone, FromRow)]
pub struct BasePriceRow {
    #[sqlx(rename = "type")]
    pub pass_type: String,
    pub cost: i32,
}

/// Row from holidays
#[derive(Debug, Clone, FromRow)]
pub struct HolidayRow {
    pub holiday: NaiveDate,
    pub description: Option<String>,
}

/// Fixed set of dates flagged as holidays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn from_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Holidays seeded on a fresh installation
    pub fn default_seed() -> Self {
        Self::from_dates(
            [(2019, 2, 18), (2019, 2, 25), (2019, 3, 4)]
                .into_iter()
                .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        )
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl From<Vec<HolidayRow>> for HolidayCalendar {
    fn from(rows: Vec<HolidayRow>) -> Self {
        Self::from_dates(rows.into_iter().map(|row| row.holiday))
    }
}
