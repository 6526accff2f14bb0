use chrono::{NaiveDate, NaiveDateTime};
use log::warn;

use crate::models::catalog::AddonService;
use crate::models::rental::{AvailabilityQuery, RentalInput, RentalQuote};
use crate::services::pricing_service::PricingService;
use crate::services::rental_api::interface::{RentalApiError, RentalApiOperations};
use crate::services::schedule_service;

const CHECK_FAILED_MSG: &str = "Unable to check availability right now. Please try again.";
const UNAVAILABLE_MSG: &str = "This car is no longer available for the selected schedule. \
    It may have just been booked by someone else. Please choose different dates or times.";
const SUBMIT_FAILED_MSG: &str = "Booking failed. Please try again.";
const ERROR_MSG: &str = "An error occurred. Please try again.";
const SUBMITTED_MSG: &str = "Booking confirmed.";

/// What a booking attempt resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The reservation was accepted by the backend.
    Submitted,
    /// The final availability check came back negative; the caller should
    /// prompt for a different schedule.
    Unavailable,
    /// The availability check itself could not be completed.
    CheckFailed,
    /// The backend refused the submission and said why.
    Rejected,
    /// The submission call failed after a positive availability check.
    SubmissionFailed,
}

/// Uniform result of a booking attempt. Every path through the flow resolves
/// to one of these values; nothing escapes the orchestrator as an error, so
/// callers can render `message` without any handling boilerplate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub success: bool,
    pub message: String,
    pub kind: OutcomeKind,
}

impl BookingOutcome {
    fn submitted(message: String) -> Self {
        Self {
            success: true,
            message,
            kind: OutcomeKind::Submitted,
        }
    }

    fn failure(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            kind,
        }
    }
}

/// Everything one submission attempt needs. Built fresh per attempt; a
/// failed attempt is only retried by a new user action.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub car_id: String,
    pub daily_rate: f64,
    pub schedule: AvailabilityQuery,
    pub selected_services: Vec<String>,
    /// Loyalty tier, 0..=4.
    pub tier: u8,
}

pub struct BookingService<A> {
    api: A,
}

impl<A: RentalApiOperations> BookingService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Re-check availability and, only if the car is still free, submit the
    /// reservation with a freshly computed price breakdown.
    ///
    /// Single attempt, no automatic retry. The availability check strictly
    /// precedes the submission: the embedded price is only trusted right
    /// after a positive check, which narrows (not closes) the window in
    /// which someone else books the same car.
    pub async fn make_booking(
        &self,
        request: &BookingRequest,
        catalog: &[AddonService],
    ) -> BookingOutcome {
        if let Err(outcome) = self
            .verify_availability(&request.car_id, &request.schedule)
            .await
        {
            return outcome;
        }

        self.submit_rental(request, catalog).await
    }

    /// The pre-submission availability re-check. `Err` carries the terminal
    /// outcome for the attempt.
    pub async fn verify_availability(
        &self,
        car_id: &str,
        schedule: &AvailabilityQuery,
    ) -> Result<(), BookingOutcome> {
        let response = match self.api.check_availability(car_id, schedule).await {
            Ok(response) => response,
            Err(RentalApiError::Status(status, Some(message))) => {
                warn!("Availability check returned {}: {}", status, message);
                return Err(BookingOutcome::failure(OutcomeKind::CheckFailed, message));
            }
            Err(err) => {
                warn!("Availability check failed: {:?}", err);
                return Err(BookingOutcome::failure(
                    OutcomeKind::CheckFailed,
                    CHECK_FAILED_MSG,
                ));
            }
        };

        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| CHECK_FAILED_MSG.to_string());
            return Err(BookingOutcome::failure(OutcomeKind::CheckFailed, message));
        }

        match response.data {
            Some(data) if data.available => Ok(()),
            Some(_) => Err(BookingOutcome::failure(
                OutcomeKind::Unavailable,
                UNAVAILABLE_MSG,
            )),
            None => Err(BookingOutcome::failure(OutcomeKind::CheckFailed, ERROR_MSG)),
        }
    }

    /// Price and submit the reservation. Assumes availability was just
    /// reconfirmed; the price breakdown is recomputed here rather than read
    /// back from whatever the caller last displayed.
    pub async fn submit_rental(
        &self,
        request: &BookingRequest,
        catalog: &[AddonService],
    ) -> BookingOutcome {
        let days = match schedule_service::rental_period(
            Some(request.schedule.start),
            Some(request.schedule.ret),
        ) {
            Some(days) => days,
            None => return BookingOutcome::failure(OutcomeKind::SubmissionFailed, ERROR_MSG),
        };

        let quote = PricingService::quote(
            days,
            request.daily_rate,
            &request.selected_services,
            catalog,
            request.tier,
        );

        let input = RentalInput {
            start_date: request.schedule.start_date(),
            return_date: request.schedule.return_date(),
            start_time: request.schedule.start_time(),
            return_time: request.schedule.return_time(),
            car: request.car_id.clone(),
            price: quote.car_cost,
            service_price: quote.services_cost,
            discount_amount: quote.discount_amount,
            final_price: quote.final_price,
            service: request.selected_services.clone(),
            rental_days: days,
        };

        match self.api.create_rental(&input).await {
            Ok(response) if response.success => BookingOutcome::submitted(
                response.message.unwrap_or_else(|| SUBMITTED_MSG.to_string()),
            ),
            Ok(response) => BookingOutcome::failure(
                OutcomeKind::Rejected,
                response
                    .message
                    .unwrap_or_else(|| SUBMIT_FAILED_MSG.to_string()),
            ),
            Err(RentalApiError::Status(status, Some(message))) => {
                warn!("Rental submission returned {}: {}", status, message);
                BookingOutcome::failure(OutcomeKind::SubmissionFailed, message)
            }
            Err(err) => {
                warn!("Rental submission failed: {:?}", err);
                BookingOutcome::failure(OutcomeKind::SubmissionFailed, SUBMIT_FAILED_MSG)
            }
        }
    }
}

/// Per-attempt submission state. The two in-flight states gate a second
/// submit from the same form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    CheckingAvailability,
    Submitting,
    Submitted,
    Unavailable,
    Failed,
}

impl SubmissionStatus {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::CheckingAvailability | Self::Submitting)
    }
}

/// The booking screen's state made explicit: schedule inputs as the user
/// entered them (calendar date plus 12-hour display time), selected add-on
/// ids and the submission state machine.
///
/// One form owns its state exclusively; two bookings cannot be in flight
/// from the same form at once.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub car_id: String,
    pub daily_rate: f64,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_time: String,
    pub return_date: Option<NaiveDate>,
    pub return_time: String,
    pub selected_services: Vec<String>,
    pub status: SubmissionStatus,
}

impl BookingForm {
    pub fn new(car_id: impl Into<String>, daily_rate: f64) -> Self {
        Self {
            car_id: car_id.into(),
            daily_rate,
            pickup_date: None,
            pickup_time: String::new(),
            return_date: None,
            return_time: String::new(),
            selected_services: Vec::new(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Normalized pickup instant, `None` until both date and time are set.
    pub fn pickup(&self) -> Option<NaiveDateTime> {
        schedule_service::combine_date_time(self.pickup_date, &self.pickup_time)
    }

    /// Normalized return instant, `None` until both date and time are set.
    pub fn ret(&self) -> Option<NaiveDateTime> {
        schedule_service::combine_date_time(self.return_date, &self.return_time)
    }

    /// Toggle an add-on service on or off.
    pub fn toggle_service(&mut self, id: &str) {
        if let Some(pos) = self.selected_services.iter().position(|s| s == id) {
            self.selected_services.remove(pos);
        } else {
            self.selected_services.push(id.to_string());
        }
    }

    /// Current quote, `None` while either end of the schedule is missing.
    /// Callers re-run this after every mutation of the form.
    pub fn quote(&self, catalog: &[AddonService], tier: u8) -> Option<RentalQuote> {
        let days = schedule_service::rental_period(self.pickup(), self.ret())?;
        Some(PricingService::quote(
            days,
            self.daily_rate,
            &self.selected_services,
            catalog,
            tier,
        ))
    }

    /// Whether a submit may start: schedule complete and no attempt already
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.status.is_in_flight() && self.pickup().is_some() && self.ret().is_some()
    }

    /// Run one booking attempt, tracking its state on the form. Returns
    /// `None` when the form is incomplete or an attempt is already in
    /// flight.
    pub async fn submit<A: RentalApiOperations>(
        &mut self,
        service: &BookingService<A>,
        catalog: &[AddonService],
        tier: u8,
    ) -> Option<BookingOutcome> {
        if !self.can_submit() {
            return None;
        }
        let (pickup, ret) = (self.pickup()?, self.ret()?);

        let request = BookingRequest {
            car_id: self.car_id.clone(),
            daily_rate: self.daily_rate,
            schedule: AvailabilityQuery { start: pickup, ret },
            selected_services: self.selected_services.clone(),
            tier,
        };

        self.status = SubmissionStatus::CheckingAvailability;
        if let Err(outcome) = service
            .verify_availability(&request.car_id, &request.schedule)
            .await
        {
            self.status = match outcome.kind {
                OutcomeKind::Unavailable => SubmissionStatus::Unavailable,
                _ => SubmissionStatus::Failed,
            };
            return Some(outcome);
        }

        self.status = SubmissionStatus::Submitting;
        let outcome = service.submit_rental(&request, catalog).await;
        self.status = if outcome.success {
            SubmissionStatus::Submitted
        } else {
            SubmissionStatus::Failed
        };

        Some(outcome)
    }

    /// Start over after a terminal outcome; a new attempt always begins from
    /// `Idle`.
    pub fn reset_status(&mut self) {
        self.status = SubmissionStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new("car-1", 50.0);
        form.pickup_date = NaiveDate::from_ymd_opt(2026, 3, 10);
        form.pickup_time = "10:00 AM".to_string();
        form.return_date = NaiveDate::from_ymd_opt(2026, 3, 13);
        form.return_time = "9:00 AM".to_string();
        form
    }

    #[test]
    fn test_toggle_service() {
        let mut form = filled_form();
        form.toggle_service("gps");
        form.toggle_service("seat");
        assert_eq!(form.selected_services, vec!["gps", "seat"]);

        form.toggle_service("gps");
        assert_eq!(form.selected_services, vec!["seat"]);
    }

    #[test]
    fn test_can_submit_requires_complete_schedule() {
        let mut form = BookingForm::new("car-1", 50.0);
        assert!(!form.can_submit());

        form = filled_form();
        assert!(form.can_submit());

        form.return_time.clear();
        assert!(!form.can_submit());
    }

    #[test]
    fn test_in_flight_status_gates_submit() {
        let mut form = filled_form();
        form.status = SubmissionStatus::CheckingAvailability;
        assert!(!form.can_submit());

        form.status = SubmissionStatus::Submitting;
        assert!(!form.can_submit());

        // Terminal states allow a fresh attempt.
        form.status = SubmissionStatus::Failed;
        assert!(form.can_submit());

        form.reset_status();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_form_quote_recomputes() {
        let catalog = vec![AddonService {
            id: "gps".to_string(),
            name: "GPS".to_string(),
            rate: 10.0,
            daily: true,
            created_at: None,
            updated_at: None,
        }];

        let mut form = filled_form();
        // Return at 9:00 on the third day, pickup at 10:00: no extra day.
        let quote = form.quote(&catalog, 0).unwrap();
        assert_eq!(quote.days, 3);
        assert_eq!(quote.final_price, 150.0);

        form.toggle_service("gps");
        let quote = form.quote(&catalog, 0).unwrap();
        assert_eq!(quote.final_price, 180.0);

        form.pickup_date = None;
        assert!(form.quote(&catalog, 0).is_none());
    }
}
