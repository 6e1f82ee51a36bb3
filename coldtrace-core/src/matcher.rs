//! Excursion-to-milestone temporal matching
//!
//! When a shipment row is expanded, each alarm excursion is pinned to the
//! transport milestone it most plausibly happened at. The association is a
//! greedy nearest-timestamp match: every excursion independently picks the
//! milestone whose arrival is closest in time to the excursion start.
//!
//! This is deliberately not a globally optimal assignment. There is no
//! one-to-one constraint and no reassignment: a single milestone may
//! accumulate several excursions, and each candidate's choice ignores the
//! choices of the others. The consuming views assume exactly these
//! semantics.

use log::trace;
use serde::Serialize;

use crate::logger::AlarmType;
use crate::shipment::{Milestone, Shipment};
use crate::time;

/// An excursion pinned to a milestone, tagged with its provenance.
///
/// Derived data: produced only by [`match_excursions`], never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExcursionData {
    /// Logger that raised the alarm.
    pub logger_id: String,
    /// Quantity the alarm fired on.
    pub alarm_type: AlarmType,
    /// Highest value observed during the breach.
    pub highest: f64,
    /// Raw breach start timestamp text.
    pub start_time: String,
    /// Raw breach end timestamp text, absent while ongoing.
    pub end_time: Option<String>,
    /// Human-readable breach duration.
    pub duration: String,
    /// Product stability profile the band came from, when known.
    pub profile_name: Option<String>,
}

/// A milestone annotated with the excursions matched to it.
///
/// Recomputed on every matching call; owned solely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MilestoneWithExcursions {
    /// The original milestone snapshot.
    #[serde(flatten)]
    pub milestone: Milestone,
    /// Excursions whose start time is nearest this milestone's arrival.
    pub excursions: Vec<ExcursionData>,
}

/// Annotate a shipment's milestones with their nearest excursions.
///
/// Returns one record per milestone in original order, each starting with
/// an empty excursion list. For every excursion embedded in every alarm of
/// every logger (logger order, then alarm order), the excursion is assigned
/// to the milestone with the minimum absolute arrival/start time difference;
/// ties go to the first-occurring milestone.
///
/// Candidates degrade silently: an excursion without a parseable start
/// time, or a shipment without any parseable milestone arrival, assigns
/// nothing.
pub fn match_excursions(shipment: &Shipment) -> Vec<MilestoneWithExcursions> {
    let mut annotated: Vec<MilestoneWithExcursions> = shipment
        .milestones
        .iter()
        .map(|milestone| MilestoneWithExcursions {
            milestone: milestone.clone(),
            excursions: Vec::new(),
        })
        .collect();

    // Arrivals parse once per call, not once per candidate.
    let arrivals: Vec<_> = shipment
        .milestones
        .iter()
        .map(Milestone::arrival_instant)
        .collect();

    for logger in &shipment.loggers {
        for alarm in &logger.alarms {
            let Some(excursion) = alarm.excursion.as_ref() else {
                continue;
            };
            let Some(start) = time::parse_timestamp(&excursion.start_time) else {
                trace!(
                    "matcher: alarm {} excursion start unparseable, skipped",
                    alarm.id
                );
                continue;
            };

            let mut best: Option<(usize, i64)> = None;
            for (index, arrival) in arrivals.iter().enumerate() {
                let Some(arrival) = arrival else { continue };
                let distance_ms = (start - *arrival).num_milliseconds().abs();
                // Strict improvement only: ties keep the earlier milestone.
                match best {
                    Some((_, current)) if distance_ms >= current => {}
                    _ => best = Some((index, distance_ms)),
                }
            }

            let Some((index, distance_ms)) = best else {
                trace!(
                    "matcher: alarm {} has no milestone with a parseable arrival",
                    alarm.id
                );
                continue;
            };
            trace!(
                "matcher: alarm {} -> milestone {} ({} ms)",
                alarm.id,
                annotated[index].milestone.location,
                distance_ms
            );
            annotated[index].excursions.push(ExcursionData {
                logger_id: logger.id.clone(),
                alarm_type: alarm.alarm_type.clone(),
                highest: excursion.highest,
                start_time: excursion.start_time.clone(),
                end_time: excursion.end_time.clone(),
                duration: excursion.duration.clone(),
                profile_name: excursion.profile_name.clone(),
            });
        }
    }

    annotated
}
