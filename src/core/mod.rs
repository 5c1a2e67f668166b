pub mod calendar;
pub mod time_point;
pub mod time_unit;

pub use time_point::TimePoint;
pub use time_unit::TimeUnit;
