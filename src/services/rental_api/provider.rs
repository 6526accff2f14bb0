use std::{env, time::Duration};

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::models::api::{ApiResponse, AvailabilityData};
use crate::models::car::Car;
use crate::models::catalog::AddonService;
use crate::models::rental::{AvailabilityQuery, RentalInput};
use crate::services::rental_api::interface::{RentalApiError, RentalApiOperations};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// REST client for the rental backend. One shared `reqwest::Client`; the
/// bearer token from the session layer is attached to every call.
pub struct RestRentalApi {
    http_client: reqwest::Client,
    base_url: String,
    token: String,
}

impl RestRentalApi {
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url: String = base_url.into();

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Build a client from `RENTAL_API_URL` and `RENTAL_API_TOKEN`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let base_url = env::var("RENTAL_API_URL")
            .map_err(|_| "RENTAL_API_URL environment variable not set")?;
        let token = env::var("RENTAL_API_TOKEN")
            .map_err(|_| "RENTAL_API_TOKEN environment variable not set")?;

        Self::new(base_url, token)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Decode a response into the standard envelope. Non-2xx responses are
    /// uniformly failures, but an error body is still scanned for a
    /// human-readable `message` to surface to the user.
    async fn read_json<T: DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<ApiResponse<T>, RentalApiError> {
        let status = res.status();
        let body = res.text().await.map_err(|_| RentalApiError::Transport)?;

        if !status.is_success() {
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
            warn!("Rental API returned {}: {:?}", status.as_u16(), message);
            return Err(RentalApiError::Status(status.as_u16(), message));
        }

        serde_json::from_str(&body).map_err(|_| RentalApiError::Decode)
    }
}

impl RentalApiOperations for RestRentalApi {
    async fn check_availability(
        &self,
        car_id: &str,
        query: &AvailabilityQuery,
    ) -> Result<ApiResponse<AvailabilityData>, RentalApiError> {
        let url = format!("{}/cars/check-availability/{}", self.base_url, car_id);
        debug!(
            "Checking availability for car {} ({} {} -> {} {})",
            car_id,
            query.start_date(),
            query.start_time(),
            query.return_date(),
            query.return_time()
        );

        let res = self
            .http_client
            .get(&url)
            .query(&[
                ("startDate", query.start_date()),
                ("returnDate", query.return_date()),
                ("startTime", query.start_time()),
                ("returnTime", query.return_time()),
            ])
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(|_| RentalApiError::Transport)?;

        Self::read_json(res).await
    }

    async fn create_rental(
        &self,
        input: &RentalInput,
    ) -> Result<ApiResponse<serde_json::Value>, RentalApiError> {
        let url = format!("{}/rents", self.base_url);
        debug!(
            "Submitting rental for car {} ({} days, final price {})",
            input.car, input.rental_days, input.final_price
        );

        let res = self
            .http_client
            .post(&url)
            .header("Authorization", self.bearer())
            .json(input)
            .send()
            .await
            .map_err(|_| RentalApiError::Transport)?;

        Self::read_json(res).await
    }

    async fn get_services(&self) -> Result<ApiResponse<Vec<AddonService>>, RentalApiError> {
        let url = format!("{}/services", self.base_url);

        let res = self
            .http_client
            .get(&url)
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(|_| RentalApiError::Transport)?;

        Self::read_json(res).await
    }

    async fn get_car(&self, car_id: &str) -> Result<ApiResponse<Car>, RentalApiError> {
        let url = format!("{}/cars/{}", self.base_url, car_id);

        let res = self
            .http_client
            .get(&url)
            .header("Authorization", self.bearer())
            .send()
            .await
            .map_err(|_| RentalApiError::Transport)?;

        Self::read_json(res).await
    }
}
