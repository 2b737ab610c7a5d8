//! Booking records and the half-open interval predicates shared by every
//! computation in this crate.
//!
//! A stay occupies `[check_in, check_out)`: the checkout day itself is a
//! turnover day the next guest may arrive on, so touching stays never overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::marker::DayStatus;

/// Lifecycle status of a booking as reported by the backend.
///
/// `Unknown` absorbs unrecognized status strings so one odd record cannot
/// fail deserialization of a whole snapshot. Unknown bookings count as
/// active (non-cancelled) everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Whether the booking participates in occupancy, conflict, and revenue
    /// computations. Cancelled bookings stay in the record set but are
    /// excluded everywhere (soft-delete semantics).
    pub fn is_active(self) -> bool {
        self != BookingStatus::Cancelled
    }

    /// The day-marker status this booking contributes, or `None` for
    /// cancelled bookings, which contribute nothing.
    pub fn day_status(self) -> Option<DayStatus> {
        match self {
            BookingStatus::Confirmed => Some(DayStatus::Booked),
            BookingStatus::Pending => Some(DayStatus::Tentative),
            BookingStatus::Unknown => Some(DayStatus::Available),
            BookingStatus::Cancelled => None,
        }
    }
}

/// A single reservation in a property's booking set.
///
/// Field names follow the backend's JSON casing, so a fetched snapshot
/// deserializes directly. Any time-of-day component is already gone by the
/// time records reach this crate: dates are day-granularity `NaiveDate`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque identifier, unique within a property's booking set.
    pub id: String,
    /// The property whose timeline this booking occupies.
    pub property_id: String,
    pub check_in: NaiveDate,
    /// Exclusive — the guest's last night is the day before.
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    /// Display label only, never used in any computation.
    pub guest_name: String,
    /// Total price for the whole stay, in `currency`.
    pub total_price: f64,
    /// Currency code as reported by the backend. The engine never converts.
    pub currency: String,
}

impl Booking {
    /// Number of nights, i.e. days in `[check_in, check_out)`.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap test: `a.check_in < b.check_out && b.check_in <
    /// a.check_out`. One stay's checkout equal to the other's check-in is
    /// NOT an overlap — the vacating and arriving guests share the turnover
    /// day.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.overlaps_range(other.check_in, other.check_out)
    }

    /// Overlap test against a raw `[start, end)` candidate range.
    pub fn overlaps_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.check_in < end && start < self.check_out
    }

    /// Whether `day` falls within the stay (`check_in <= day < check_out`).
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.check_in <= day && day < self.check_out
    }

    /// Clamp the stay to `[start, end)`, or `None` when disjoint.
    pub fn clamp_to(&self, start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        let s = self.check_in.max(start);
        let e = self.check_out.min(end);
        if s < e {
            Some((s, e))
        } else {
            None
        }
    }

    /// Cheap opt-in validation for the snapshot boundary: rejects zero or
    /// negative night stays and negative prices. The computation functions
    /// assume validated input and do not re-check on every call.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidInterval`] when `check_out <= check_in`,
    /// [`EngineError::InvalidPrice`] when `total_price` is negative.
    pub fn validate(&self) -> Result<()> {
        if self.check_out <= self.check_in {
            return Err(EngineError::InvalidInterval {
                id: self.id.clone(),
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        if self.total_price < 0.0 {
            return Err(EngineError::InvalidPrice {
                id: self.id.clone(),
                price: self.total_price,
            });
        }
        Ok(())
    }
}
