//! Date-adapter capability set and its chrono implementation.

mod chrono_adapter;
mod date_adapter;
mod formats;
mod host;
mod input_parser;
mod options;
mod registry;

pub use chrono_adapter::{CHRONO_ADAPTER_ID, ChronoDateAdapter};
pub use date_adapter::{DateAdapter, DateInput};
pub use formats::{DEFAULT_FORMATS, DisplayContext, FormatSpec};
pub use host::HostDateAdapter;
pub use options::{AdapterOptions, AdapterTimeZone, DateLocale};
pub use registry::AdapterRegistry;
