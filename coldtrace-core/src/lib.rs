//! Data-transformation core for ColdTrace shipment tracking
//!
//! Sits between raw shipment/logger records and the views, providing the
//! three pieces of non-trivial logic the UI leans on:
//!
//! - **Filter engine** ([`filter`]): multi-criteria shipment search with
//!   AND semantics across dimensions, safe to re-run on every keystroke.
//! - **Excursion matcher** ([`matcher`]): pins each alarm excursion to the
//!   transport milestone nearest in time.
//! - **Time-series aggregator** ([`aggregate`]): merges per-logger reading
//!   timelines into one chart-ready table with display clamping.
//!
//! All three are synchronous pure functions over in-memory records: no
//! I/O, no shared mutable state, no panics on malformed source data.
//! Unparseable timestamps, missing thresholds and empty collections
//! degrade to "no data" instead of raising.
//!
//! ```
//! use coldtrace_core::{FilterState, Shipment};
//!
//! let shipments: Vec<Shipment> = Vec::new();
//! let spec = FilterState::default().with_status("Delivered");
//! assert!(spec.apply(&shipments).is_empty());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod aggregate;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod jitter;
pub mod logger;
pub mod matcher;
pub mod shipment;
pub mod source;
pub mod time;

// Public API
pub use aggregate::{aggregate, ChartRange, ProcessedDataPoint};
pub use errors::{SourceError, SourceResult};
pub use filter::{unique_values, FilterState, ShipmentField};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
pub use logger::{Alarm, AlarmType, Excursion, Logger, LoggerType, ProductThresholds, Reading};
pub use matcher::{match_excursions, ExcursionData, MilestoneWithExcursions};
pub use shipment::{
    Milestone, MilestoneDataStatus, MilestoneStatus, Shipment, ShipmentStatus, TransportMode,
};
pub use source::{MemorySource, ShipmentSource};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
