use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Combine a calendar date with a 12-hour display time ("10:00 AM") into a
/// single point in time, seconds fixed at 0.
///
/// The meridiem marker is matched case-insensitively and may carry
/// surrounding whitespace. No timezone conversion happens; the result lives
/// in the ambient local time of the caller.
///
/// A missing date means the user has not finished filling in the schedule,
/// so the result is "not yet known" rather than an error. A time string that
/// does not parse is treated the same way.
pub fn combine_date_time(date: Option<NaiveDate>, time: &str) -> Option<NaiveDateTime> {
    let date = date?;
    let time = parse_twelve_hour(time)?;
    Some(date.and_time(time))
}

/// "H:MM AM|PM" -> 24-hour time. 12 AM maps to hour 0, 12 PM stays 12,
/// other PM hours gain 12.
fn parse_twelve_hour(raw: &str) -> Option<NaiveTime> {
    let lower = raw.to_lowercase();
    let is_pm = lower.contains("pm");
    let is_am = lower.contains("am");
    if !is_pm && !is_am {
        return None;
    }

    let bare = lower.replace("pm", "").replace("am", "");
    let mut parts = bare.trim().split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = parts.next()?.trim().parse().ok()?;

    let hour = if is_pm && hour < 12 {
        hour + 12
    } else if is_am && hour == 12 {
        0
    } else {
        hour
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Billable day count for a pickup/return pair, `None` while either end of
/// the schedule is still unknown.
///
/// Same-day rentals charge the one-day minimum regardless of the hour span.
/// Across days, the count is the whole calendar days between the dates, plus
/// one for the final partial day when the return time-of-day is later than
/// the pickup's: strictly later in hour, or equal in hour and strictly later
/// in minute. Returning at or before the pickup time-of-day on the last day
/// does not add the extra day.
pub fn rental_period(pickup: Option<NaiveDateTime>, ret: Option<NaiveDateTime>) -> Option<u32> {
    let pickup = pickup?;
    let ret = ret?;

    if pickup.date() == ret.date() {
        return Some(1);
    }

    let days_diff = (ret.date() - pickup.date()).num_days().max(0) as u32;

    let extra_day = ret.hour() > pickup.hour()
        || (ret.hour() == pickup.hour() && ret.minute() > pickup.minute());

    Some(if extra_day { days_diff + 1 } else { days_diff })
}

/// Whether a booking spans at least two hours. Advisory only: the submit
/// flow does not reject shorter same-day bookings, callers surface a
/// warning instead.
pub fn is_at_least_two_hours(pickup: NaiveDateTime, ret: NaiveDateTime) -> bool {
    ret.signed_duration_since(pickup).num_minutes() >= 120
}
