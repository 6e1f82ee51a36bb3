//! Domain constants shared across the transformation pipeline
//!
//! Centralizes the numeric defaults applied when shipment records omit
//! product configuration, so every component degrades to the same band.

/// Default product temperature lower threshold in °C.
///
/// Standard cold-chain band for pharmaceutical payloads (2–8 °C storage,
/// 2–12 °C transport tolerance). Applied when a logger carries no parseable
/// threshold configuration.
pub const DEFAULT_TEMP_LOW_C: f64 = 2.0;

/// Default product temperature upper threshold in °C.
pub const DEFAULT_TEMP_HIGH_C: f64 = 12.0;

/// Display clamp margin as a fraction of the threshold band width.
///
/// Chart values are clamped into `[low - ratio * range, high + ratio * range]`
/// so excursion spikes stay visible without dwarfing the in-band signal.
/// This is presentation-only; alarm and excursion records keep raw values.
pub const CLAMP_MARGIN_RATIO: f64 = 0.2;

/// Baseline for the synthesized humidity signal, in %RH.
///
/// Humidity has no sensor backing in the current record shape; the
/// aggregator emits this baseline plus jitter for interface compatibility.
pub const HUMIDITY_BASE_PCT: f64 = 45.0;

/// Peak amplitude of the synthesized humidity jitter, in %RH.
pub const HUMIDITY_JITTER_PCT: f64 = 2.0;
