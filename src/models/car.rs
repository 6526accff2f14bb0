use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A vehicle as the backend describes it. Read-only on this side; only the
/// fields the booking flow needs are modeled, display data passes through
/// untouched elsewhere.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Car {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Price per rental day.
    #[serde(rename = "rentPrice")]
    pub daily_rate: f64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
