//! Tests for the daily stats aggregator: arrival/departure counting,
//! occupancy, nightly proration, ADR, and the mixed-currency flag.

use availability_engine::{daily_stats, Booking, BookingStatus};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn booking(
    id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    status: BookingStatus,
    total_price: f64,
    currency: &str,
) -> Booking {
    Booking {
        id: id.to_string(),
        property_id: "prop-1".to_string(),
        check_in,
        check_out,
        status,
        guest_name: format!("Guest {id}"),
        total_price,
        currency: currency.to_string(),
    }
}

// ── Occupancy and proration ─────────────────────────────────────────────────

#[test]
fn mid_stay_booking_prorates_evenly() {
    // 5-night stay at 500 total → 100 per night; Jan 12 is mid-stay, so it
    // is neither an arrival nor a departure.
    let bookings = vec![booking(
        "a",
        d(2026, 1, 10),
        d(2026, 1, 15),
        BookingStatus::Confirmed,
        500.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert_eq!(stats.occupied, 1);
    assert_eq!(stats.revenue_for_day, 100.0);
    assert_eq!(stats.arrivals, 0);
    assert_eq!(stats.departures, 0);
    assert_eq!(stats.average_daily_rate, 100.0);
    assert!(!stats.mixed_currencies);
}

#[test]
fn four_night_booking_contributes_a_quarter() {
    let bookings = vec![booking(
        "a",
        d(2026, 1, 10),
        d(2026, 1, 14),
        BookingStatus::Confirmed,
        1000.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 11), &bookings);

    assert_eq!(stats.revenue_for_day, 250.0);
}

#[test]
fn arrival_day_counts_as_occupied() {
    let bookings = vec![booking(
        "a",
        d(2026, 1, 10),
        d(2026, 1, 12),
        BookingStatus::Confirmed,
        200.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 10), &bookings);

    assert_eq!(stats.arrivals, 1);
    assert_eq!(stats.departures, 0);
    assert_eq!(stats.occupied, 1, "the arrival night is occupied");
}

#[test]
fn departure_day_is_not_occupied() {
    let bookings = vec![booking(
        "a",
        d(2026, 1, 10),
        d(2026, 1, 12),
        BookingStatus::Confirmed,
        200.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert_eq!(stats.departures, 1);
    assert_eq!(stats.occupied, 0, "the guest left before the reference night");
    assert_eq!(stats.revenue_for_day, 0.0);
    assert_eq!(stats.average_daily_rate, 0.0);
}

#[test]
fn same_day_turnover_counts_both_bookings() {
    let bookings = vec![
        booking("out", d(2026, 1, 8), d(2026, 1, 10), BookingStatus::Confirmed, 300.0, "EUR"),
        booking("in", d(2026, 1, 10), d(2026, 1, 13), BookingStatus::Confirmed, 450.0, "EUR"),
    ];

    let stats = daily_stats(d(2026, 1, 10), &bookings);

    assert_eq!(stats.arrivals, 1);
    assert_eq!(stats.departures, 1);
    assert_eq!(stats.occupied, 1, "only the arriving guest stays the night");
    assert_eq!(stats.revenue_for_day, 150.0);
}

// ── Aggregation across bookings ─────────────────────────────────────────────

#[test]
fn multiple_occupied_bookings_sum_and_average() {
    let bookings = vec![
        booking("a", d(2026, 1, 10), d(2026, 1, 15), BookingStatus::Confirmed, 500.0, "EUR"),
        booking("b", d(2026, 1, 11), d(2026, 1, 13), BookingStatus::Pending, 260.0, "EUR"),
    ];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert_eq!(stats.occupied, 2);
    assert_eq!(stats.revenue_for_day, 230.0); // 100 + 130
    assert_eq!(stats.average_daily_rate, 115.0);
}

#[test]
fn average_daily_rate_is_rounded() {
    // 100/3 + 100/3 per night would not land on a whole unit.
    let bookings = vec![
        booking("a", d(2026, 1, 10), d(2026, 1, 13), BookingStatus::Confirmed, 100.0, "EUR"),
        booking("b", d(2026, 1, 10), d(2026, 1, 13), BookingStatus::Confirmed, 100.0, "EUR"),
    ];

    let stats = daily_stats(d(2026, 1, 11), &bookings);

    assert_eq!(stats.occupied, 2);
    let raw = stats.revenue_for_day / 2.0;
    assert_eq!(stats.average_daily_rate, raw.round());
    assert_eq!(stats.average_daily_rate, 33.0);
}

#[test]
fn cancelled_bookings_contribute_nothing() {
    let bookings = vec![booking(
        "x",
        d(2026, 1, 10),
        d(2026, 1, 15),
        BookingStatus::Cancelled,
        9999.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert_eq!(stats, Default::default());
}

#[test]
fn empty_set_is_all_zeros() {
    let stats = daily_stats(d(2026, 1, 12), &[]);
    assert_eq!(stats, Default::default());
}

// ── Degenerate data ─────────────────────────────────────────────────────────

#[test]
fn zero_night_booking_contributes_no_revenue() {
    // Invalid data that skipped boundary validation: occupancy math must not
    // divide by zero. A zero-night stay contains no day, so it only shows up
    // in the arrival/departure tallies.
    let bookings = vec![booking(
        "z",
        d(2026, 1, 12),
        d(2026, 1, 12),
        BookingStatus::Confirmed,
        400.0,
        "EUR",
    )];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert_eq!(stats.arrivals, 1);
    assert_eq!(stats.departures, 1);
    assert_eq!(stats.occupied, 0);
    assert_eq!(stats.revenue_for_day, 0.0);
}

// ── Currencies ──────────────────────────────────────────────────────────────

#[test]
fn single_currency_is_not_flagged() {
    let bookings = vec![
        booking("a", d(2026, 1, 10), d(2026, 1, 15), BookingStatus::Confirmed, 500.0, "USD"),
        booking("b", d(2026, 1, 11), d(2026, 1, 14), BookingStatus::Confirmed, 300.0, "USD"),
    ];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert!(!stats.mixed_currencies);
}

#[test]
fn mixed_currencies_are_flagged_not_converted() {
    let bookings = vec![
        booking("a", d(2026, 1, 10), d(2026, 1, 15), BookingStatus::Confirmed, 500.0, "EUR"),
        booking("b", d(2026, 1, 11), d(2026, 1, 13), BookingStatus::Confirmed, 200.0, "USD"),
    ];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert!(stats.mixed_currencies);
    // The sum is still the plain unconverted addition the caller must flag.
    assert_eq!(stats.revenue_for_day, 200.0);
}

#[test]
fn non_occupied_currency_does_not_flag() {
    // The USD booking does not cover the reference date, so it plays no part.
    let bookings = vec![
        booking("a", d(2026, 1, 10), d(2026, 1, 15), BookingStatus::Confirmed, 500.0, "EUR"),
        booking("b", d(2026, 2, 1), d(2026, 2, 5), BookingStatus::Confirmed, 200.0, "USD"),
    ];

    let stats = daily_stats(d(2026, 1, 12), &bookings);

    assert!(!stats.mixed_currencies);
}
