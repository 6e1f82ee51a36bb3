//! Shipment data sources
//!
//! The transformation layer never fetches anything itself; a host hands it
//! a loaded collection behind the [`ShipmentSource`] read interface. The
//! in-memory implementation covers embedding, testing and replaying
//! recorded datasets.

use crate::errors::{SourceError, SourceResult};
use crate::shipment::Shipment;

/// Read interface over a loaded shipment collection.
pub trait ShipmentSource {
    /// The full collection, in source order.
    fn shipments(&self) -> &[Shipment];

    /// Look up one shipment by identifier.
    fn shipment(&self, id: &str) -> SourceResult<&Shipment> {
        self.shipments()
            .iter()
            .find(|shipment| shipment.id == id)
            .ok_or_else(|| SourceError::NotFound { id: id.to_string() })
    }
}

/// In-memory shipment source over an owned collection.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    shipments: Vec<Shipment>,
}

impl MemorySource {
    /// Create a source over an already-built collection.
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Self { shipments }
    }

    /// Decode a JSON array of shipment records.
    pub fn from_json(raw: &str) -> SourceResult<Self> {
        serde_json::from_str::<Vec<Shipment>>(raw)
            .map(Self::new)
            .map_err(|err| SourceError::Malformed(err.to_string()))
    }

    /// Number of shipments held.
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Whether the source holds no shipments.
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }
}

impl ShipmentSource for MemorySource {
    fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }
}
