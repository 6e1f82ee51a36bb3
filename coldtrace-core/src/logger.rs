//! Sensor loggers, alarms and excursions
//!
//! A logger is a physical or virtual sensor device riding with a shipment.
//! It reports temperature readings over time, carries product threshold
//! configuration, and raises alarms when a reading breaches the configured
//! band. Each alarm may embed at most one excursion summary describing the
//! breach period.
//!
//! Device classes matter: "Web Logger 2" hardware keeps its detailed
//! time-series on the device, so nothing is available for charting until
//! the shipment is delivered and the logger physically retrieved.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TEMP_HIGH_C, DEFAULT_TEMP_LOW_C};
use crate::time;

/// Device class of a sensor logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoggerType {
    /// Cloud-connected logger reporting live.
    WebLogger,
    /// Second-generation web logger; data is device-held until delivery.
    WebLogger2,
    /// USB download logger.
    UsbLogger,
    /// Bluetooth download logger.
    BluetoothLogger,
    /// Any device class outside the known vocabulary, preserved verbatim.
    Other(String),
}

impl LoggerType {
    /// Canonical display text for this device class.
    pub fn name(&self) -> &str {
        match self {
            LoggerType::WebLogger => "Web Logger",
            LoggerType::WebLogger2 => "Web Logger 2",
            LoggerType::UsbLogger => "USB Logger",
            LoggerType::BluetoothLogger => "Bluetooth Logger",
            LoggerType::Other(raw) => raw,
        }
    }

    /// Whether time-series and RCA detail are unavailable until delivery.
    pub fn is_restricted(&self) -> bool {
        matches!(self, LoggerType::WebLogger2)
    }

    /// Whether this is a web-family device (no synthesized humidity signal).
    pub fn is_web_family(&self) -> bool {
        matches!(self, LoggerType::WebLogger | LoggerType::WebLogger2)
    }

    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "web logger" => LoggerType::WebLogger,
            "web logger 2" => LoggerType::WebLogger2,
            "usb logger" => LoggerType::UsbLogger,
            "bluetooth logger" => LoggerType::BluetoothLogger,
            _ => LoggerType::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for LoggerType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<LoggerType> for String {
    fn from(logger_type: LoggerType) -> Self {
        logger_type.name().to_string()
    }
}

impl fmt::Display for LoggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Physical quantity an alarm fired on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AlarmType {
    /// Temperature band breach.
    Temperature,
    /// Humidity band breach.
    Humidity,
    /// Shock / impact event.
    Shock,
    /// Tilt beyond allowed orientation.
    Tilt,
    /// Pressure band breach.
    Pressure,
    /// Light exposure (package opened).
    Light,
    /// Any alarm type outside the known vocabulary, preserved verbatim.
    Other(String),
}

impl AlarmType {
    /// Lowercase canonical name, e.g. "temperature".
    pub fn name(&self) -> &str {
        match self {
            AlarmType::Temperature => "temperature",
            AlarmType::Humidity => "humidity",
            AlarmType::Shock => "shock",
            AlarmType::Tilt => "tilt",
            AlarmType::Pressure => "pressure",
            AlarmType::Light => "light",
            AlarmType::Other(raw) => raw,
        }
    }

    fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "temperature" => AlarmType::Temperature,
            "humidity" => AlarmType::Humidity,
            "shock" => AlarmType::Shock,
            "tilt" => AlarmType::Tilt,
            "pressure" => AlarmType::Pressure,
            "light" => AlarmType::Light,
            _ => AlarmType::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for AlarmType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<AlarmType> for String {
    fn from(alarm_type: AlarmType) -> Self {
        alarm_type.name().to_string()
    }
}

impl fmt::Display for AlarmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Summary of a threshold breach period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    /// Highest value observed during the breach.
    pub highest: f64,
    /// Lowest value observed during the breach.
    pub lowest: f64,
    /// Average value over the breach period.
    pub average: f64,
    /// Raw breach start timestamp text.
    pub start_time: String,
    /// Raw breach end timestamp text, absent while ongoing.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Human-readable breach duration, e.g. "2h 15m".
    #[serde(default)]
    pub duration: String,
    /// Product stability profile the band came from, when known.
    #[serde(default)]
    pub profile_name: Option<String>,
}

/// An alarm raised by a logger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    /// Alarm identifier.
    pub id: String,
    /// Quantity the alarm fired on.
    pub alarm_type: AlarmType,
    /// Locations of milestones the source associated with the alarm.
    #[serde(default)]
    pub excursion_milestones: Vec<String>,
    /// Breach summary; exactly zero or one per alarm.
    #[serde(default)]
    pub excursion: Option<Excursion>,
}

impl Alarm {
    /// Create an alarm with no excursion detail.
    pub fn new(id: impl Into<String>, alarm_type: AlarmType) -> Self {
        Self {
            id: id.into(),
            alarm_type,
            excursion_milestones: Vec::new(),
            excursion: None,
        }
    }
}

/// A single timestamped sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Raw timestamp text; unparseable readings are skipped, not errors.
    pub timestamp: String,
    /// Temperature in °C, unclamped.
    pub temperature: f64,
}

/// Product threshold configuration as it arrives from the source.
///
/// Values are raw text and may be absent or malformed; resolution to a
/// numeric band always succeeds by falling back to the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductThresholds {
    /// Raw upper temperature threshold text, °C.
    #[serde(default)]
    pub temp_high: Option<String>,
    /// Raw lower temperature threshold text, °C.
    #[serde(default)]
    pub temp_low: Option<String>,
    /// Raw upper humidity threshold text, %RH.
    #[serde(default)]
    pub humidity_high: Option<String>,
    /// Raw lower humidity threshold text, %RH.
    #[serde(default)]
    pub humidity_low: Option<String>,
}

impl ProductThresholds {
    /// Resolve the temperature band as `(low, high)` in °C.
    ///
    /// Each bound parses independently; absent or malformed text falls back
    /// to the default band. An inverted pair is swapped rather than trusted.
    pub fn temperature_band(&self) -> (f64, f64) {
        let low = parse_threshold(self.temp_low.as_deref(), DEFAULT_TEMP_LOW_C);
        let high = parse_threshold(self.temp_high.as_deref(), DEFAULT_TEMP_HIGH_C);
        if low > high {
            (high, low)
        } else {
            (low, high)
        }
    }
}

fn parse_threshold(raw: Option<&str>, fallback: f64) -> f64 {
    raw.and_then(|text| text.trim().trim_end_matches("°C").trim().parse::<f64>().ok())
        .unwrap_or(fallback)
}

/// A sensor logger attached to a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Logger {
    /// Logger identifier, e.g. "WL-8847".
    pub id: String,
    /// Device class.
    pub logger_type: LoggerType,
    /// Carrier delivery identifier when known.
    #[serde(default)]
    pub delivery_id: Option<String>,
    /// Raw mission start timestamp text; "n/a" or empty means not started.
    #[serde(default)]
    pub mission_started: Option<String>,
    /// Raw mission end timestamp text; absent means still active.
    #[serde(default)]
    pub mission_ended: Option<String>,
    /// Alarms raised during the mission.
    #[serde(default)]
    pub alarms: Vec<Alarm>,
    /// Timestamped readings; empty means no time-series available.
    #[serde(default)]
    pub readings: Vec<Reading>,
    /// Product threshold configuration when present.
    #[serde(default)]
    pub thresholds: Option<ProductThresholds>,
}

impl Logger {
    /// Create a logger with no mission data.
    pub fn new(id: impl Into<String>, logger_type: LoggerType) -> Self {
        Self {
            id: id.into(),
            logger_type,
            delivery_id: None,
            mission_started: None,
            mission_ended: None,
            alarms: Vec::new(),
            readings: Vec::new(),
            thresholds: None,
        }
    }

    /// Parsed mission start instant, if the raw text is usable.
    pub fn mission_start_instant(&self) -> Option<DateTime<Utc>> {
        self.mission_started.as_deref().and_then(time::parse_timestamp)
    }

    /// Parsed mission end instant, if the raw text is usable.
    pub fn mission_end_instant(&self) -> Option<DateTime<Utc>> {
        self.mission_ended.as_deref().and_then(time::parse_timestamp)
    }

    /// Whether the mission has a valid start timestamp.
    pub fn has_mission_start(&self) -> bool {
        self.mission_start_instant().is_some()
    }

    /// Whether the mission has a valid end timestamp.
    pub fn has_mission_end(&self) -> bool {
        self.mission_end_instant().is_some()
    }

    /// Whether any alarm on this logger matches the given type name.
    pub fn has_alarm_type(&self, name: &str) -> bool {
        self.alarms
            .iter()
            .any(|alarm| alarm.alarm_type.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Temperature band `(low, high)` in °C, with default fallback.
    pub fn temperature_band(&self) -> (f64, f64) {
        self.thresholds
            .as_ref()
            .map(ProductThresholds::temperature_band)
            .unwrap_or((DEFAULT_TEMP_LOW_C, DEFAULT_TEMP_HIGH_C))
    }
}
