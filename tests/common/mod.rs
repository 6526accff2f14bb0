use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use drivex_booking::models::api::{ApiResponse, AvailabilityData};
use drivex_booking::models::car::Car;
use drivex_booking::models::catalog::AddonService;
use drivex_booking::models::rental::{AvailabilityQuery, RentalInput};
use drivex_booking::services::rental_api::interface::{RentalApiError, RentalApiOperations};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn addon(id: &str, rate: f64, daily: bool) -> AddonService {
    AddonService {
        id: id.to_string(),
        name: id.to_string(),
        rate,
        daily,
        created_at: None,
        updated_at: None,
    }
}

pub fn ok_availability(available: bool) -> Result<ApiResponse<AvailabilityData>, RentalApiError> {
    Ok(ApiResponse {
        success: true,
        message: None,
        data: Some(AvailabilityData { available }),
    })
}

pub fn ok_rental() -> Result<ApiResponse<serde_json::Value>, RentalApiError> {
    Ok(ApiResponse {
        success: true,
        message: Some("Rent created successfully".to_string()),
        data: Some(serde_json::json!({ "_id": "rent-1" })),
    })
}

/// Scripted backend double. Responses are fixed up front; calls are counted
/// and submitted payloads captured so tests can assert on the protocol.
pub struct MockRentalApi {
    pub availability_response: Result<ApiResponse<AvailabilityData>, RentalApiError>,
    pub rental_response: Result<ApiResponse<serde_json::Value>, RentalApiError>,
    pub availability_calls: AtomicUsize,
    pub rental_calls: Mutex<Vec<RentalInput>>,
}

impl MockRentalApi {
    pub fn new(
        availability_response: Result<ApiResponse<AvailabilityData>, RentalApiError>,
        rental_response: Result<ApiResponse<serde_json::Value>, RentalApiError>,
    ) -> Self {
        Self {
            availability_response,
            rental_response,
            availability_calls: AtomicUsize::new(0),
            rental_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn availability_call_count(&self) -> usize {
        self.availability_calls.load(Ordering::SeqCst)
    }

    pub fn rental_call_count(&self) -> usize {
        self.rental_calls.lock().unwrap().len()
    }

    pub fn last_rental_input(&self) -> Option<RentalInput> {
        self.rental_calls.lock().unwrap().last().cloned()
    }
}

impl RentalApiOperations for MockRentalApi {
    async fn check_availability(
        &self,
        _car_id: &str,
        _query: &AvailabilityQuery,
    ) -> Result<ApiResponse<AvailabilityData>, RentalApiError> {
        self.availability_calls.fetch_add(1, Ordering::SeqCst);
        self.availability_response.clone()
    }

    async fn create_rental(
        &self,
        input: &RentalInput,
    ) -> Result<ApiResponse<serde_json::Value>, RentalApiError> {
        self.rental_calls.lock().unwrap().push(input.clone());
        self.rental_response.clone()
    }

    async fn get_services(&self) -> Result<ApiResponse<Vec<AddonService>>, RentalApiError> {
        Ok(ApiResponse {
            success: true,
            message: None,
            data: Some(Vec::new()),
        })
    }

    async fn get_car(&self, car_id: &str) -> Result<ApiResponse<Car>, RentalApiError> {
        Ok(ApiResponse {
            success: true,
            message: None,
            data: Some(Car {
                id: car_id.to_string(),
                name: "Test Car".to_string(),
                daily_rate: 50.0,
                brand: None,
                model: None,
                year: None,
                created_at: None,
                updated_at: None,
            }),
        })
    }
}
