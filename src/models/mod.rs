pub mod api;
pub mod car;
pub mod catalog;
pub mod rental;
