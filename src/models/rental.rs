use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A normalized pickup/return schedule, ready for the wire.
///
/// Both ends come out of the schedule normalizer, so the 12-hour display
/// strings are already folded into plain naive datetimes. Dates serialize as
/// `YYYY-MM-DD` and times as 24-hour `HH:mm`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityQuery {
    pub start: NaiveDateTime,
    pub ret: NaiveDateTime,
}

impl AvailabilityQuery {
    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn return_date(&self) -> String {
        self.ret.format("%Y-%m-%d").to_string()
    }

    pub fn start_time(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn return_time(&self) -> String {
        self.ret.format("%H:%M").to_string()
    }
}

/// The client-computed price breakdown shown before submission.
///
/// Recomputed on every change to the schedule, the selected services or the
/// loyalty tier; never persisted, it only lives in form state until the
/// booking is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuote {
    pub days: u32,
    pub car_cost: f64,
    pub services_cost: f64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub final_price: f64,
}

/// Outbound `POST /rents` payload. Built fresh for each submission attempt;
/// a failed attempt is only retried by explicit user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalInput {
    pub start_date: String,
    pub return_date: String,
    pub start_time: String,
    pub return_time: String,
    pub car: String,
    /// Vehicle cost over the rental period (rate x days).
    pub price: f64,
    pub service_price: f64,
    pub discount_amount: f64,
    pub final_price: f64,
    /// Selected add-on service ids.
    pub service: Vec<String>,
    pub rental_days: u32,
}
