//! Multi-logger time-series aggregation for charting
//!
//! ## Overview
//!
//! Each logger records its own reading timeline; the chart needs one
//! time-indexed table where every row is a distinct timestamp and every
//! visible logger contributes per-logger-qualified columns. [`aggregate`]
//! builds that table:
//!
//! 1. gate on restricted device classes (device-held data is unavailable
//!    until the shipment is delivered);
//! 2. union the distinct reading timestamps of all visible loggers;
//! 3. fill per-logger temperature (display-clamped to the product band)
//!    and synthesized humidity columns;
//! 4. rows come out sorted ascending by timestamp;
//! 5. optionally restrict to a date/time range, inclusive at both ends.
//!
//! ## Display clamp
//!
//! Raw readings are clamped into `[low - 0.2*range, high + 0.2*range]`
//! around the product threshold band before charting, so an extreme spike
//! cannot flatten the in-band signal. This is presentation-only: alarm and
//! excursion records elsewhere keep the unclamped values.
//!
//! The function never fails: missing thresholds fall back to the default
//! band, unparseable reading timestamps are skipped, and loggers without
//! data contribute nothing.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{CLAMP_MARGIN_RATIO, HUMIDITY_BASE_PCT};
use crate::jitter::JitterSource;
use crate::shipment::Shipment;
use crate::time;

/// Optional date/time restriction on the aggregated series.
///
/// A time-of-day without its date has nothing to anchor to and is ignored.
/// Missing pieces default to the whole day (00:00:00.000–23:59:59.999);
/// both boundaries are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRange {
    /// First day to include.
    pub start_date: Option<NaiveDate>,
    /// Last day to include.
    pub end_date: Option<NaiveDate>,
    /// Time-of-day refinement on `start_date`.
    pub start_time: Option<NaiveTime>,
    /// Time-of-day refinement on `end_date`.
    pub end_time: Option<NaiveTime>,
}

impl ChartRange {
    /// Restrict to an inclusive day span.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            start_time: None,
            end_time: None,
        }
    }

    /// Whether no restriction is set (the full series passes).
    pub fn is_unrestricted(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
    }

    fn bounds(&self) -> (Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
        let lower = self
            .start_date
            .map(|date| time::range_start(date, self.start_time));
        let upper = self
            .end_date
            .map(|date| time::range_end(date, self.end_time));
        (lower, upper)
    }
}

/// One chart row: a timestamp with per-logger-qualified values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedDataPoint {
    /// Row instant.
    pub timestamp: DateTime<Utc>,
    /// Human-readable axis label for the instant.
    pub label: String,
    /// Values keyed `temperature_<loggerId>` / `humidity_<loggerId>`.
    pub values: BTreeMap<String, f64>,
}

impl ProcessedDataPoint {
    /// Column key for a logger's temperature series.
    pub fn temperature_key(logger_id: &str) -> String {
        format!("temperature_{logger_id}")
    }

    /// Column key for a logger's humidity series.
    pub fn humidity_key(logger_id: &str) -> String {
        format!("humidity_{logger_id}")
    }
}

/// Merge the visible loggers' readings into a chart-ready table.
///
/// Pure given its inputs; the injected `jitter` carries the only
/// nondeterminism. Returns an empty series when the shipment carries a
/// restricted logger and is not yet delivered.
pub fn aggregate(
    shipment: &Shipment,
    visible: &HashSet<String>,
    range: &ChartRange,
    jitter: &mut dyn JitterSource,
) -> Vec<ProcessedDataPoint> {
    if shipment.has_restricted_logger() && !shipment.status.is_delivered() {
        debug!(
            "aggregate: {} holds a restricted logger and is not delivered, series withheld",
            shipment.id
        );
        return Vec::new();
    }

    let mut rows: BTreeMap<DateTime<Utc>, ProcessedDataPoint> = BTreeMap::new();

    for logger in shipment
        .loggers
        .iter()
        .filter(|logger| visible.contains(&logger.id) && !logger.readings.is_empty())
    {
        let (low, high) = logger.temperature_band();
        let margin = CLAMP_MARGIN_RATIO * (high - low);
        let floor = low - margin;
        let ceiling = high + margin;
        let temperature_key = ProcessedDataPoint::temperature_key(&logger.id);
        let humidity_key = ProcessedDataPoint::humidity_key(&logger.id);

        for reading in &logger.readings {
            let Some(instant) = time::parse_timestamp(&reading.timestamp) else {
                continue;
            };
            let row = rows.entry(instant).or_insert_with(|| ProcessedDataPoint {
                timestamp: instant,
                label: time::format_label(instant),
                values: BTreeMap::new(),
            });

            let clamped = reading.temperature.clamp(floor, ceiling);
            row.values.insert(temperature_key.clone(), round_one(clamped));

            // Placeholder signal: no humidity backing exists for any device
            // class yet, and web-family loggers do not get one at all.
            if !logger.logger_type.is_web_family() {
                row.values
                    .insert(humidity_key.clone(), round_one(HUMIDITY_BASE_PCT + jitter.sample()));
            }
        }
    }

    let (lower, upper) = range.bounds();
    rows.into_values()
        .filter(|row| {
            lower.map_or(true, |bound| row.timestamp >= bound)
                && upper.map_or(true, |bound| row.timestamp <= bound)
        })
        .collect()
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
