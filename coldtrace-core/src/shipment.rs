//! Shipment and milestone records
//!
//! A shipment is the unit the tracking UI lists and expands: a consignment
//! moving through an ordered chain of transport milestones with one or more
//! sensor loggers attached. Records arrive from the data source fully
//! formed; everything in this module is an immutable snapshot, and derived
//! views (filtered lists, annotated milestones) are always fresh copies.
//!
//! Status and transport-mode enumerations are open: source data is not
//! guaranteed to stay within the known vocabulary, and an unknown value
//! must survive a round-trip rather than fail deserialization.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logger::Logger;
use crate::time;

/// Lifecycle status of a shipment.
///
/// Open set: values outside the known vocabulary are preserved verbatim
/// in [`ShipmentStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShipmentStatus {
    /// Underway between origin and destination.
    InTransit,
    /// Arrived and handed over; loggers are physically retrievable.
    Delivered,
    /// Booked but not yet moving.
    Pending,
    /// Behind schedule.
    Delayed,
    /// Any status outside the known vocabulary, preserved verbatim.
    Other(String),
}

impl ShipmentStatus {
    /// Canonical display text for this status.
    pub fn name(&self) -> &str {
        match self {
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::Delayed => "Delayed",
            ShipmentStatus::Other(raw) => raw,
        }
    }

    /// Whether the shipment has completed its journey.
    pub fn is_delivered(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered)
    }

    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "in transit" => ShipmentStatus::InTransit,
            "delivered" => ShipmentStatus::Delivered,
            "pending" => ShipmentStatus::Pending,
            "delayed" => ShipmentStatus::Delayed,
            _ => ShipmentStatus::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for ShipmentStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<ShipmentStatus> for String {
    fn from(status: ShipmentStatus) -> Self {
        status.name().to_string()
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transport mode for a shipment or a single milestone leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMode {
    /// Air freight.
    Air,
    /// Ocean freight.
    Sea,
    /// Truck or van.
    Road,
    /// Rail freight.
    Rail,
    /// Any mode outside the known vocabulary, preserved verbatim.
    Other(String),
}

impl TransportMode {
    /// Canonical display text for this mode.
    pub fn name(&self) -> &str {
        match self {
            TransportMode::Air => "Air",
            TransportMode::Sea => "Sea",
            TransportMode::Road => "Road",
            TransportMode::Rail => "Rail",
            TransportMode::Other(raw) => raw,
        }
    }

    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "air" => TransportMode::Air,
            "sea" => TransportMode::Sea,
            "road" => TransportMode::Road,
            "rail" => TransportMode::Rail,
            _ => TransportMode::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for TransportMode {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<TransportMode> for String {
    fn from(mode: TransportMode) -> Self {
        mode.name().to_string()
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Progress state of a single milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MilestoneStatus {
    /// The shipment has passed this milestone.
    Completed,
    /// The shipment is at this milestone now.
    Current,
    /// Not yet reached.
    #[default]
    Pending,
    /// Reached late or blocked.
    Delayed,
}

/// Data-quality flag for a shipment's milestone records.
///
/// Some shipments are known at the source to lack usable milestone data
/// (carrier feed gaps, manual bookings). That is a property of the record,
/// set by the data source, never an identifier comparison in this layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MilestoneDataStatus {
    /// Milestone records are present and trustworthy.
    #[default]
    Ok,
    /// Milestone records are missing or unusable.
    Unavailable {
        /// Source-supplied explanation, surfaced to the UI as-is.
        reason: String,
    },
}

impl MilestoneDataStatus {
    /// Whether milestone data can be shown for the shipment.
    pub fn is_available(&self) -> bool {
        matches!(self, MilestoneDataStatus::Ok)
    }
}

/// A discrete transport or handling event in a shipment's journey.
///
/// Milestones are immutable snapshots; the excursion matcher annotates
/// derived copies and never writes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Location name, e.g. "London Heathrow Transfer".
    pub location: String,
    /// Raw arrival timestamp text; absent or unparseable means unknown.
    /// The legacy field name `arrived` is accepted on input.
    #[serde(default, alias = "arrived")]
    pub arrival: Option<String>,
    /// Raw departure timestamp text.
    #[serde(default)]
    pub departure: Option<String>,
    /// Progress state.
    #[serde(default)]
    pub status: MilestoneStatus,
    /// Transport mode of the leg arriving at this milestone.
    pub mode: TransportMode,
    /// Flight, vessel or plate number when known.
    #[serde(default)]
    pub vehicle_number: Option<String>,
    /// Weather note at the location when known.
    #[serde(default)]
    pub weather: Option<String>,
}

impl Milestone {
    /// Create a pending milestone at a location with no timestamps.
    pub fn new(location: impl Into<String>, mode: TransportMode) -> Self {
        Self {
            location: location.into(),
            arrival: None,
            departure: None,
            status: MilestoneStatus::Pending,
            mode,
            vehicle_number: None,
            weather: None,
        }
    }

    /// Parsed arrival instant, if the raw text is usable.
    pub fn arrival_instant(&self) -> Option<DateTime<Utc>> {
        self.arrival.as_deref().and_then(time::parse_timestamp)
    }
}

/// A tracked consignment: identity, route, transport details, milestones
/// and attached sensor loggers.
///
/// `loggers` is always present (possibly empty); `total_alarms` counts the
/// alarms across all loggers and stays consistent with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Shipment identifier, e.g. "SH002".
    pub id: String,
    /// Origin location name.
    pub origin: String,
    /// Destination location name.
    pub destination: String,
    /// Lifecycle status.
    pub status: ShipmentStatus,
    /// Primary transport mode.
    pub mode_of_transport: TransportMode,
    /// Packaging type, e.g. "Passive Pallet".
    #[serde(default)]
    pub packaging_type: String,
    /// Freight forwarder handling the shipment.
    #[serde(default)]
    pub freight_forwarder: String,
    /// Total alarms raised across all loggers.
    #[serde(default)]
    pub total_alarms: u32,
    /// Root-cause-analysis status, once an investigation exists.
    #[serde(default)]
    pub evaluation: Option<String>,
    /// Milestone data-quality flag set by the data source.
    #[serde(default)]
    pub milestone_data: MilestoneDataStatus,
    /// Ordered transport milestones.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    /// Attached sensor loggers.
    #[serde(default)]
    pub loggers: Vec<Logger>,
}

impl Shipment {
    /// Create an in-transit shipment with empty route details.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            origin: String::new(),
            destination: String::new(),
            status: ShipmentStatus::InTransit,
            mode_of_transport: TransportMode::Road,
            packaging_type: String::new(),
            freight_forwarder: String::new(),
            total_alarms: 0,
            evaluation: None,
            milestone_data: MilestoneDataStatus::Ok,
            milestones: Vec::new(),
            loggers: Vec::new(),
        }
    }

    /// Whether any logger has raised an alarm.
    pub fn has_alarms(&self) -> bool {
        self.total_alarms > 0
    }

    /// Whether any attached logger is of a restricted device class.
    pub fn has_restricted_logger(&self) -> bool {
        self.loggers
            .iter()
            .any(|logger| logger.logger_type.is_restricted())
    }

    /// Most recent parseable mission-start instant across all loggers.
    pub fn latest_mission_start(&self) -> Option<DateTime<Utc>> {
        self.loggers
            .iter()
            .filter_map(Logger::mission_start_instant)
            .max()
    }

    /// Resynchronize `total_alarms` with the attached loggers.
    pub fn recount_alarms(&mut self) {
        self.total_alarms = self
            .loggers
            .iter()
            .map(|logger| logger.alarms.len() as u32)
            .sum();
    }
}
