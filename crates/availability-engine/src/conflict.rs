//! Overlap detection against a candidate stay, plus the self-scan that
//! surfaces genuine double-bookings in a snapshot.
//!
//! Detection is advisory. Interactive reservation creation warns and lets a
//! human confirm; bulk import rejects any row with a non-empty conflict set.
//! Both policies live in callers, layered on the same detector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;

/// An existing booking that overlaps a candidate stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub booking: Booking,
    /// Nights the two stays contend for: `min(ends) - max(starts)`.
    pub overlap_nights: i64,
}

/// Find all non-cancelled bookings of `property_id` whose stay overlaps the
/// candidate `[check_in, check_out)` range, preserving input order.
///
/// Touching at a boundary is not a conflict: one stay's checkout day may be
/// another's check-in day (the turnover).
pub fn find_conflicts(
    property_id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    bookings: &[Booking],
) -> Vec<Conflict> {
    bookings
        .iter()
        .filter(|b| b.property_id == property_id && b.status.is_active())
        .filter(|b| b.overlaps_range(check_in, check_out))
        .map(|b| Conflict {
            overlap_nights: (b.check_out.min(check_out) - b.check_in.max(check_in)).num_days(),
            booking: b.clone(),
        })
        .collect()
}

/// Scan a snapshot for same-property pairs of non-cancelled bookings that
/// overlap each other.
///
/// These are data anomalies that slipped past conflict checking at write
/// time, e.g. rows created directly against the backend. The segment builder
/// renders through them without complaint, so workflows that want a hard
/// alert run this scan after fetching a snapshot. Each pair is reported
/// once, in input order.
pub fn find_double_bookings(bookings: &[Booking]) -> Vec<(Booking, Booking)> {
    let mut pairs = Vec::new();
    for (i, a) in bookings.iter().enumerate() {
        if !a.status.is_active() {
            continue;
        }
        for b in &bookings[i + 1..] {
            if b.property_id == a.property_id && b.status.is_active() && a.overlaps(b) {
                pairs.push((a.clone(), b.clone()));
            }
        }
    }
    pairs
}
