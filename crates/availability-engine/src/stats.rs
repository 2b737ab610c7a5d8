//! Daily occupancy and revenue aggregates for a single reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;

/// Counts and amounts for exactly one reference date across the input set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Bookings whose check-in is the reference date.
    pub arrivals: u32,
    /// Bookings whose check-out is the reference date.
    pub departures: u32,
    /// Bookings whose stay covers the reference night.
    pub occupied: u32,
    /// Sum of per-night prorated prices over the occupied bookings. When
    /// currencies differ the sum is unconverted — see `mixed_currencies`.
    pub revenue_for_day: f64,
    /// `revenue_for_day / occupied`, rounded to the nearest unit; `0` when
    /// nothing is occupied.
    pub average_daily_rate: f64,
    /// Set when the occupied bookings span more than one currency, so
    /// callers can flag the unconverted total instead of presenting it as a
    /// meaningful amount.
    pub mixed_currencies: bool,
}

/// Aggregate arrivals, departures, occupancy, and prorated revenue for
/// `reference_date`.
///
/// The reference date always arrives as an argument — the engine never
/// resolves "today" on its own, which keeps results reproducible under
/// fixed dates.
///
/// Revenue proration spreads `total_price` evenly across the stay's nights,
/// so a multi-night stay contributes a realistic daily figure instead of its
/// full total. A stay with no computable nights contributes nothing (no
/// division takes place).
pub fn daily_stats(reference_date: NaiveDate, bookings: &[Booking]) -> DailyStats {
    let mut stats = DailyStats::default();
    let mut seen_currency: Option<&str> = None;

    for booking in bookings {
        if !booking.status.is_active() {
            continue;
        }
        if booking.check_in == reference_date {
            stats.arrivals += 1;
        }
        if booking.check_out == reference_date {
            stats.departures += 1;
        }
        if booking.contains_day(reference_date) {
            stats.occupied += 1;
            let nights = booking.nights();
            if nights > 0 {
                stats.revenue_for_day += booking.total_price / nights as f64;
            }
            match seen_currency {
                None => seen_currency = Some(&booking.currency),
                Some(code) if code != booking.currency => stats.mixed_currencies = true,
                Some(_) => {}
            }
        }
    }

    if stats.occupied > 0 {
        stats.average_daily_rate = (stats.revenue_for_day / f64::from(stats.occupied)).round();
    }

    stats
}
