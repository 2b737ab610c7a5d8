//! # availability-engine
//!
//! Pure interval reasoning over short-term-rental bookings.
//!
//! Turns a snapshot of date-stamped reservations into renderable timeline
//! segments, per-day month-view markers, conflict sets against a candidate
//! stay, and daily occupancy/revenue aggregates. Every operation is a
//! deterministic function of its inputs: no I/O, no caching, no mutation.
//! Callers re-invoke with a fresh snapshot whenever their data changes, and
//! may call from any number of rendering contexts concurrently.
//!
//! ## Modules
//!
//! - [`booking`] — the half-open `[check_in, check_out)` interval model
//! - [`axis`] — the contiguous date axis used as a rendering frame
//! - [`segment`] — bookings + axis → ordered occupied/empty timeline row
//! - [`marker`] — bookings → one resolved status per touched day
//! - [`conflict`] — overlap detection for creation flows and bulk import
//! - [`stats`] — arrivals/departures/occupancy/revenue for one date
//! - [`error`] — validation error types

pub mod axis;
pub mod booking;
pub mod conflict;
pub mod error;
pub mod marker;
pub mod segment;
pub mod stats;

pub use axis::DateAxis;
pub use booking::{Booking, BookingStatus};
pub use conflict::{find_conflicts, find_double_bookings, Conflict};
pub use error::EngineError;
pub use marker::{mark_days, DayMarks, DayStatus};
pub use segment::{build_segments, Segment};
pub use stats::{daily_stats, DailyStats};
