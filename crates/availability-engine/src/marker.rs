//! Month-view day markers: collapse a mixed, cross-property booking set into
//! one resolved status per calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;

/// Resolved per-day status for month-view markers.
///
/// The variant order is the priority ladder (`Available < Tentative <
/// Booked`): when several bookings touch a day the maximum wins, so a day
/// that is pending in one property and confirmed in another shows as booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Available,
    Tentative,
    Booked,
}

/// Map from day to resolved status. Days no booking touches are absent and
/// read as available.
pub type DayMarks = BTreeMap<NaiveDate, DayStatus>;

/// Resolve one status per day across the whole input set.
///
/// Walks `[check_in, check_out)` per non-cancelled booking — the checkout
/// day itself is not marked, matching the guest's last-night semantics — and
/// keeps the highest-priority status seen for each day.
pub fn mark_days(bookings: &[Booking]) -> DayMarks {
    let mut marks = DayMarks::new();
    for booking in bookings {
        let Some(status) = booking.status.day_status() else {
            continue;
        };
        for day in booking
            .check_in
            .iter_days()
            .take_while(|day| *day < booking.check_out)
        {
            marks
                .entry(day)
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }
    marks
}
