//! Client-side booking and quoting for the DriveX car rental platform.
//!
//! The backend owns persistence, authentication and the vehicle/service
//! catalogs; this crate covers everything the booking flow needs on the
//! client: normalizing pickup/return schedules, computing rental quotes
//! (daily rate, add-on services, loyalty tier discounts) and driving the
//! check-availability-then-submit booking protocol against the REST API.

pub mod models;
pub mod services;

pub use models::rental::{AvailabilityQuery, RentalQuote};
pub use services::booking_service::{BookingForm, BookingOutcome, BookingService};
pub use services::rental_api::provider::RestRentalApi;
