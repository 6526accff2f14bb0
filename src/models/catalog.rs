use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An add-on offered alongside a rental (GPS, child seat, extra insurance).
/// Owned by the backend catalog; read-only here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddonService {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Non-negative currency amount.
    pub rate: f64,
    /// Accrues per rental day when true; one-time flat fee when false.
    pub daily: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
