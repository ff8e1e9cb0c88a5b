//! Vehicle records for Chargecap
//!
//! This module defines the vehicle data model shared between the
//! coordinator and the charge-limit entities, including the compound
//! AC/DC charge-limit pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which charge-limit attribute an entity controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeLimitKind {
    /// AC (slow) charging cap
    Ac,

    /// DC (fast) charging cap
    Dc,
}

impl ChargeLimitKind {
    /// The other half of the compound pair
    pub fn sibling(self) -> Self {
        match self {
            ChargeLimitKind::Ac => ChargeLimitKind::Dc,
            ChargeLimitKind::Dc => ChargeLimitKind::Ac,
        }
    }
}

/// Last-known AC/DC charge caps in percent.
///
/// The remote API accepts both values only as a pair, so any update to
/// one field re-supplies the other unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EvChargeLimits {
    /// AC charging cap in percent, absent when the vehicle does not report it
    pub ac: Option<u8>,

    /// DC charging cap in percent, absent when the vehicle does not report it
    pub dc: Option<u8>,
}

impl EvChargeLimits {
    /// Create a pair with both caps present
    pub fn new(ac: u8, dc: u8) -> Self {
        Self {
            ac: Some(ac),
            dc: Some(dc),
        }
    }

    /// Read one side of the pair
    pub fn get(&self, kind: ChargeLimitKind) -> Option<u8> {
        match kind {
            ChargeLimitKind::Ac => self.ac,
            ChargeLimitKind::Dc => self.dc,
        }
    }

    /// Build a new pair with one side replaced and the sibling carried over
    pub fn with(&self, kind: ChargeLimitKind, value: u8) -> Self {
        match kind {
            ChargeLimitKind::Ac => Self {
                ac: Some(value),
                dc: self.dc,
            },
            ChargeLimitKind::Dc => Self {
                ac: self.ac,
                dc: Some(value),
            },
        }
    }
}

/// Vehicle record owned and refreshed by the coordinator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Stable vehicle identifier from the telematics service
    pub id: String,

    /// Display name
    pub name: String,

    /// Last-known charge caps
    pub ev_charge_limits: EvChargeLimits,

    /// When this record was last refreshed from the remote service
    pub last_synced_at: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Create a vehicle record with the given limits
    pub fn new(id: &str, name: &str, ev_charge_limits: EvChargeLimits) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ev_charge_limits,
            last_synced_at: None,
        }
    }

    /// Whether this vehicle reports the given charge-limit attribute
    pub fn supports(&self, kind: ChargeLimitKind) -> bool {
        self.ev_charge_limits.get(kind).is_some()
    }
}
