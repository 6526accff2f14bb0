use crate::models::api::{ApiResponse, AvailabilityData};
use crate::models::car::Car;
use crate::models::catalog::AddonService;
use crate::models::rental::{AvailabilityQuery, RentalInput};

/// Failure of a call before the backend's own `success` flag comes into
/// play: the request never completed, came back non-2xx, or the body did
/// not decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalApiError {
    /// The request could not be sent or the connection dropped.
    Transport,
    /// Non-2xx status, with the backend's `message` field when the error
    /// body carried one.
    Status(u16, Option<String>),
    /// 2xx status but the body did not match the expected shape.
    Decode,
}

/// The backend calls the booking flow depends on. The orchestrator is
/// generic over this trait so tests can drive it with a double.
pub trait RentalApiOperations {
    /// `GET /cars/check-availability/{carId}` for a normalized schedule.
    async fn check_availability(
        &self,
        car_id: &str,
        query: &AvailabilityQuery,
    ) -> Result<ApiResponse<AvailabilityData>, RentalApiError>;

    /// `POST /rents` with the client-computed price breakdown embedded.
    async fn create_rental(
        &self,
        input: &RentalInput,
    ) -> Result<ApiResponse<serde_json::Value>, RentalApiError>;

    /// `GET /services` — the add-on catalog quotes are composed against.
    async fn get_services(&self) -> Result<ApiResponse<Vec<AddonService>>, RentalApiError>;

    /// `GET /cars/{carId}`.
    async fn get_car(&self, car_id: &str) -> Result<ApiResponse<Car>, RentalApiError>;
}
