//! chart-date-adapter: chrono-backed date adapter for chart time axes.
//!
//! The crate implements the date capability set a charting host calls while
//! laying out a time axis (parse, format, add, diff, start-of, end-of) by
//! delegating to chrono, plus an id-keyed registry the host resolves the
//! active adapter from.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AdapterOptions, AdapterRegistry, ChronoDateAdapter, DateAdapter, HostDateAdapter};
pub use crate::core::{TimePoint, TimeUnit};
pub use error::{AdapterError, AdapterResult};
