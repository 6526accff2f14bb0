pub mod booking_service;
pub mod pricing_service;
pub mod rental_api;
pub mod schedule_service;
