//! Timeline segments: one property's bookings plus a date axis become an
//! ordered run of occupied/empty spans for rendering a row.
//!
//! Sorts bookings by check-in, clips each to the axis, then walks the axis
//! with a cursor, emitting the gaps between bookings as empty segments and a
//! trailing empty segment for whatever remains.

use serde::{Deserialize, Serialize};

use crate::axis::DateAxis;
use crate::booking::Booking;

/// One contiguous run of days on the rendering axis.
///
/// `length` counts axis days, so a booking reaching past the visible range
/// renders at the width of its visible days, not its true duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Empty { length: usize },
    Occupied { booking: Booking, length: usize },
}

impl Segment {
    /// Days this segment covers on the axis.
    pub fn length(&self) -> usize {
        match self {
            Segment::Empty { length } | Segment::Occupied { length, .. } => *length,
        }
    }
}

/// Build the ordered segment list covering `axis` exactly once.
///
/// `bookings` should already be one property's set; cancelled bookings are
/// skipped here regardless of what the caller passed. Concatenated segment
/// lengths always sum to `axis.len()`: an axis with no visible bookings
/// yields a single empty segment spanning it, a zero-day axis yields no
/// segments at all.
///
/// Overlapping non-cancelled bookings are a data anomaly this builder does
/// not resolve: the earlier-sorted booking keeps the contested days and the
/// later one renders only from the cursor onward, or not at all. Callers
/// wanting a hard signal for that state run
/// [`find_double_bookings`](crate::conflict::find_double_bookings) on the
/// snapshot instead.
pub fn build_segments(axis: &DateAxis, bookings: &[Booking]) -> Vec<Segment> {
    let mut visible: Vec<&Booking> = bookings.iter().filter(|b| b.status.is_active()).collect();
    // Stable sort: ties at the same check-in keep input order.
    visible.sort_by_key(|b| b.check_in);

    let mut segments = Vec::new();
    let mut cursor = 0usize;

    for booking in visible {
        let Some((start, end)) = axis.clamp_indices(booking) else {
            continue;
        };
        // An already-covered start means this booking overlaps the previous
        // one on the axis; the first one keeps the contested days.
        let start = start.max(cursor);
        if start >= end {
            continue;
        }
        if start > cursor {
            segments.push(Segment::Empty {
                length: start - cursor,
            });
        }
        segments.push(Segment::Occupied {
            booking: booking.clone(),
            length: end - start,
        });
        cursor = end;
    }

    if cursor < axis.len() {
        segments.push(Segment::Empty {
            length: axis.len() - cursor,
        });
    }

    segments
}
