//! The rendering frame: a gap-free, strictly increasing run of calendar days.
//!
//! The axis is always caller-supplied — the engine never decides what "this
//! month" or "today" means. Callers assembling an axis from a raw day list
//! can run it through [`DateAxis::try_from_days`] once at the boundary.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::error::{EngineError, Result};

/// An ordered, contiguous sequence of calendar dates, e.g. all days of a
/// displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAxis {
    start: NaiveDate,
    len: usize,
}

impl DateAxis {
    /// Axis starting at `start`, spanning `len` consecutive days.
    pub fn new(start: NaiveDate, len: usize) -> Self {
        Self { start, len }
    }

    /// Axis covering the half-open range `[start, end)`.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidAxis`] when `end` precedes `start`.
    pub fn from_range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(EngineError::InvalidAxis(format!(
                "end {end} precedes start {start}"
            )));
        }
        Ok(Self {
            start,
            len: (end - start).num_days() as usize,
        })
    }

    /// Validate a caller-supplied day list: non-empty, gap-free, strictly
    /// increasing.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidAxis`] on an empty list or whenever a
    /// day is not exactly the successor of the previous one.
    pub fn try_from_days(days: &[NaiveDate]) -> Result<Self> {
        let Some(&start) = days.first() else {
            return Err(EngineError::InvalidAxis("empty day list".to_string()));
        };
        for pair in days.windows(2) {
            if pair[0].succ_opt() != Some(pair[1]) {
                return Err(EngineError::InvalidAxis(format!(
                    "{} is not immediately followed by {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self {
            start,
            len: days.len(),
        })
    }

    /// Number of days on the axis.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First day on the axis.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Exclusive end: the day after the last axis day.
    pub fn end(&self) -> NaiveDate {
        self.start + Days::new(self.len as u64)
    }

    /// Iterate the axis days in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len)
    }

    /// Position of `day` on the axis, or `None` when off-axis.
    pub fn index_of(&self, day: NaiveDate) -> Option<usize> {
        let offset = (day - self.start).num_days();
        if offset >= 0 && (offset as usize) < self.len {
            Some(offset as usize)
        } else {
            None
        }
    }

    /// Clamp a booking to the axis, as a `[start, end)` index range.
    pub(crate) fn clamp_indices(&self, booking: &Booking) -> Option<(usize, usize)> {
        let (s, e) = booking.clamp_to(self.start(), self.end())?;
        Some((
            (s - self.start).num_days() as usize,
            (e - self.start).num_days() as usize,
        ))
    }
}
