//! Multi-criteria shipment filter engine
//!
//! ## Overview
//!
//! The shipment list view exposes a dozen filter dimensions: free-text
//! search, route fields, status, alarm presence and type, RCA state,
//! mission flags and a mission-start date range. [`FilterState`] holds one
//! optional value per dimension; [`FilterState::apply`] evaluates the
//! conjunction of every set dimension against each shipment.
//!
//! ## Semantics
//!
//! - A shipment passes if and only if it satisfies **every** set dimension
//!   (logical AND). An unset dimension is vacuously satisfied, so the
//!   default state passes everything.
//! - All text comparisons are case-insensitive.
//! - Filtering is pure and stable: input order is preserved, inputs are
//!   never mutated, and repeated application is idempotent. It is safe to
//!   re-run on every keystroke.
//!
//! ## Mission flags
//!
//! The started/ended flags detect mixed fleets: `Some(true)` requires ALL
//! loggers to carry a valid timestamp, `Some(false)` requires AT LEAST ONE
//! without. For a fleet whose loggers disagree, both directions match on
//! purpose: both the "started" and "not fully started" views should
//! surface such a shipment.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::shipment::Shipment;
use crate::time;

/// Shipment fields that can populate selectable filter options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipmentField {
    /// Origin location.
    Origin,
    /// Destination location.
    Destination,
    /// Lifecycle status.
    Status,
    /// Freight forwarder.
    FreightForwarder,
    /// Primary transport mode.
    ModeOfTransport,
    /// Packaging type.
    PackagingType,
}

/// Distinct, non-empty values of a shipment field across a collection.
///
/// Order-independent; returned sorted for determinism.
pub fn unique_values(shipments: &[Shipment], field: ShipmentField) -> Vec<String> {
    let mut values = BTreeSet::new();
    for shipment in shipments {
        let value = match field {
            ShipmentField::Origin => shipment.origin.clone(),
            ShipmentField::Destination => shipment.destination.clone(),
            ShipmentField::Status => shipment.status.name().to_string(),
            ShipmentField::FreightForwarder => shipment.freight_forwarder.clone(),
            ShipmentField::ModeOfTransport => shipment.mode_of_transport.name().to_string(),
            ShipmentField::PackagingType => shipment.packaging_type.clone(),
        };
        if !value.trim().is_empty() {
            values.insert(value);
        }
    }
    values.into_iter().collect()
}

/// Immutable filter specification: one optional constraint per dimension.
///
/// Build with the consuming `with_*` methods:
///
/// ```
/// use coldtrace_core::filter::FilterState;
///
/// let spec = FilterState::default()
///     .with_status("Delivered")
///     .with_alarms(true);
/// assert!(!spec.is_unconstrained());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text search over shipment and logger identifiers.
    pub search: Option<String>,
    /// Exact origin match.
    pub origin: Option<String>,
    /// Exact destination match.
    pub destination: Option<String>,
    /// Exact status match.
    pub status: Option<String>,
    /// Exact freight-forwarder match.
    pub freight_forwarder: Option<String>,
    /// Exact transport-mode match.
    pub mode_of_transport: Option<String>,
    /// Require alarm presence (`true`) or absence (`false`).
    pub alarms: Option<bool>,
    /// Require some logger to list this alarm type.
    pub alarm_type: Option<String>,
    /// Exact root-cause-analysis status match.
    pub evaluation: Option<String>,
    /// Require milestone data to be available (`true`) or flagged (`false`).
    pub milestone_data: Option<bool>,
    /// Require all loggers started (`true`) or at least one not (`false`).
    pub mission_started: Option<bool>,
    /// Require all loggers ended (`true`) or at least one not (`false`).
    pub mission_ended: Option<bool>,
    /// Inclusive lower bound on the latest mission start, day granularity.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the latest mission start, day granularity.
    pub date_to: Option<NaiveDate>,
}

impl FilterState {
    /// Set the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Constrain the origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Constrain the destination.
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    /// Constrain the lifecycle status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Constrain the freight forwarder.
    pub fn with_forwarder(mut self, forwarder: impl Into<String>) -> Self {
        self.freight_forwarder = Some(forwarder.into());
        self
    }

    /// Constrain the transport mode.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode_of_transport = Some(mode.into());
        self
    }

    /// Constrain alarm presence.
    pub fn with_alarms(mut self, present: bool) -> Self {
        self.alarms = Some(present);
        self
    }

    /// Constrain the alarm type.
    pub fn with_alarm_type(mut self, alarm_type: impl Into<String>) -> Self {
        self.alarm_type = Some(alarm_type.into());
        self
    }

    /// Constrain the root-cause-analysis status.
    pub fn with_evaluation(mut self, evaluation: impl Into<String>) -> Self {
        self.evaluation = Some(evaluation.into());
        self
    }

    /// Constrain milestone-data availability.
    pub fn with_milestone_data(mut self, available: bool) -> Self {
        self.milestone_data = Some(available);
        self
    }

    /// Constrain the mission-started flag.
    pub fn with_mission_started(mut self, started: bool) -> Self {
        self.mission_started = Some(started);
        self
    }

    /// Constrain the mission-ended flag.
    pub fn with_mission_ended(mut self, ended: bool) -> Self {
        self.mission_ended = Some(ended);
        self
    }

    /// Constrain the mission-start date range; either bound may be open.
    pub fn with_date_range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.date_from = from;
        self.date_to = to;
        self
    }

    /// Whether no dimension is set (everything passes).
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterState::default()
    }

    /// Evaluate this specification against one shipment.
    pub fn matches(&self, shipment: &Shipment) -> bool {
        self.search_matches(shipment)
            && text_dim(&self.origin, &shipment.origin)
            && text_dim(&self.destination, &shipment.destination)
            && text_dim(&self.status, shipment.status.name())
            && text_dim(&self.freight_forwarder, &shipment.freight_forwarder)
            && text_dim(&self.mode_of_transport, shipment.mode_of_transport.name())
            && self.alarms.map_or(true, |want| shipment.has_alarms() == want)
            && self.alarm_type_matches(shipment)
            && self.evaluation_matches(shipment)
            && self
                .milestone_data
                .map_or(true, |want| shipment.milestone_data.is_available() == want)
            && self
                .mission_started
                .map_or(true, |want| mission_flag(shipment, want, MissionEdge::Start))
            && self
                .mission_ended
                .map_or(true, |want| mission_flag(shipment, want, MissionEdge::End))
            && self.date_range_matches(shipment)
    }

    /// Filter a shipment collection, preserving input order.
    pub fn apply(&self, shipments: &[Shipment]) -> Vec<Shipment> {
        let matched: Vec<Shipment> = shipments
            .iter()
            .filter(|shipment| self.matches(shipment))
            .cloned()
            .collect();
        debug!(
            "filter: {} of {} shipments match",
            matched.len(),
            shipments.len()
        );
        matched
    }

    fn search_matches(&self, shipment: &Shipment) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        if shipment.id.to_lowercase().contains(&needle) {
            return true;
        }
        shipment.loggers.iter().any(|logger| {
            logger.id.to_lowercase().contains(&needle)
                || logger
                    .delivery_id
                    .as_deref()
                    .is_some_and(|id| id.to_lowercase().contains(&needle))
        })
    }

    fn alarm_type_matches(&self, shipment: &Shipment) -> bool {
        let Some(wanted) = self.alarm_type.as_deref() else {
            return true;
        };
        shipment
            .loggers
            .iter()
            .any(|logger| logger.has_alarm_type(wanted))
    }

    fn evaluation_matches(&self, shipment: &Shipment) -> bool {
        let Some(wanted) = self.evaluation.as_deref() else {
            return true;
        };
        shipment
            .evaluation
            .as_deref()
            .is_some_and(|actual| eq_ci(actual, wanted))
    }

    fn date_range_matches(&self, shipment: &Shipment) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        // Shipments without a usable mission start fall out of any range.
        let Some(start) = shipment.latest_mission_start() else {
            return false;
        };
        if let Some(from) = self.date_from {
            if start < time::start_of_day(from) {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if start > time::end_of_day(to) {
                return false;
            }
        }
        true
    }
}

/// Which end of a logger mission a flag dimension inspects.
#[derive(Clone, Copy)]
enum MissionEdge {
    Start,
    End,
}

fn mission_flag(shipment: &Shipment, want: bool, edge: MissionEdge) -> bool {
    let has = |logger: &crate::logger::Logger| match edge {
        MissionEdge::Start => logger.has_mission_start(),
        MissionEdge::End => logger.has_mission_end(),
    };
    if want {
        // An empty fleet carries no mission evidence at all.
        !shipment.loggers.is_empty() && shipment.loggers.iter().all(has)
    } else {
        shipment.loggers.is_empty() || shipment.loggers.iter().any(|logger| !has(logger))
    }
}

fn text_dim(constraint: &Option<String>, actual: &str) -> bool {
    match constraint.as_deref() {
        Some(wanted) => eq_ci(actual, wanted),
        None => true,
    }
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}
