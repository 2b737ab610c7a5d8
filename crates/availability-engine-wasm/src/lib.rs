//! WASM bindings for availability-engine.
//!
//! Exposes segment building, day marking, conflict detection, and daily
//! stats to the web dashboard via `wasm-bindgen`. Booking snapshots cross
//! the boundary as JSON strings in the backend's own casing, so the client
//! passes fetched records straight through.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/availability-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use availability_engine::{Booking, DateAxis};
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse JSON/date inputs from JavaScript
// ---------------------------------------------------------------------------

/// Parse a calendar date in `YYYY-MM-DD` form.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{s}': {e}")))
}

/// Parse a JSON array of booking records (backend casing: `propertyId`,
/// `checkIn`, ...). Unrecognized status strings become `unknown` rather than
/// failing the whole snapshot.
fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Build the ordered occupied/empty segment list for one property's timeline
/// row.
///
/// `axis_start` is the first visible day (`YYYY-MM-DD`), `axis_len` the
/// number of visible days. Returns a JSON array of
/// `{kind: "empty", length}` / `{kind: "occupied", booking, length}` objects
/// whose lengths sum to `axis_len`.
#[wasm_bindgen(js_name = "buildSegments")]
pub fn build_segments(
    axis_start: &str,
    axis_len: usize,
    bookings_json: &str,
) -> Result<String, JsValue> {
    let start = parse_date(axis_start)?;
    let bookings = parse_bookings_json(bookings_json)?;

    let segments = availability_engine::build_segments(&DateAxis::new(start, axis_len), &bookings);

    to_json(&segments)
}

/// Resolve one status per calendar day across a mixed booking set.
///
/// Returns a JSON object mapping `YYYY-MM-DD` to
/// `"available" | "tentative" | "booked"`; days no booking touches are
/// absent.
#[wasm_bindgen(js_name = "markDays")]
pub fn mark_days(bookings_json: &str) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    to_json(&availability_engine::mark_days(&bookings))
}

/// Find all existing bookings of `property_id` overlapping the candidate
/// `[check_in, check_out)` stay.
///
/// Returns a JSON array of `{booking, overlap_nights}` objects in snapshot
/// order; an empty array means the candidate is clear.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(
    property_id: &str,
    check_in: &str,
    check_out: &str,
    bookings_json: &str,
) -> Result<String, JsValue> {
    let check_in = parse_date(check_in)?;
    let check_out = parse_date(check_out)?;
    let bookings = parse_bookings_json(bookings_json)?;

    let conflicts =
        availability_engine::find_conflicts(property_id, check_in, check_out, &bookings);

    to_json(&conflicts)
}

/// Scan a snapshot for same-property pairs of overlapping non-cancelled
/// bookings — data anomalies worth a hard alert in the dashboard.
#[wasm_bindgen(js_name = "findDoubleBookings")]
pub fn find_double_bookings(bookings_json: &str) -> Result<String, JsValue> {
    let bookings = parse_bookings_json(bookings_json)?;
    to_json(&availability_engine::find_double_bookings(&bookings))
}

/// Aggregate arrivals, departures, occupancy, and prorated revenue for one
/// reference date (`YYYY-MM-DD`).
///
/// The reference date always comes from the caller — typically the client's
/// local "today" — never from inside the engine.
#[wasm_bindgen(js_name = "dailyStats")]
pub fn daily_stats(reference_date: &str, bookings_json: &str) -> Result<String, JsValue> {
    let reference = parse_date(reference_date)?;
    let bookings = parse_bookings_json(bookings_json)?;
    to_json(&availability_engine::daily_stats(reference, &bookings))
}
