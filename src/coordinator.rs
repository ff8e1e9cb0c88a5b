//! Vehicle coordinator for Chargecap
//!
//! The coordinator owns the cached vehicle records and delegates remote
//! operations to the injected telematics client. Entities hold a shared
//! handle to it; it is never modeled as global state.

use crate::error::{ChargecapError, Result};
use crate::logging::get_logger;
use crate::telematics::TelematicsClient;
use crate::vehicle::{EvChargeLimits, Vehicle};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;

/// Shared coordinator handle over the telematics client and vehicle cache.
///
/// The cache lock is a synchronous `RwLock` so the entity read path never
/// suspends; async methods only take it between awaits, never across one.
pub struct VehicleCoordinator {
    /// Remote telematics client
    client: Box<dyn TelematicsClient>,

    /// Cached vehicle records keyed by vehicle id
    vehicles: RwLock<HashMap<String, Vehicle>>,

    /// Logger with context
    logger: crate::logging::StructuredLogger,
}

impl VehicleCoordinator {
    /// Create a coordinator around a telematics client
    pub fn new(client: Box<dyn TelematicsClient>) -> Self {
        let logger = get_logger("coordinator");
        Self {
            client,
            vehicles: RwLock::new(HashMap::new()),
            logger,
        }
    }

    /// Snapshot of all cached vehicle records
    pub fn vehicles(&self) -> Vec<Vehicle> {
        match self.vehicles.read() {
            Ok(guard) => guard.values().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Cached record for one vehicle, if known
    pub fn vehicle(&self, vehicle_id: &str) -> Option<Vehicle> {
        match self.vehicles.read() {
            Ok(guard) => guard.get(vehicle_id).cloned(),
            Err(_) => None,
        }
    }

    /// Force a full refresh of all vehicle state from the remote service.
    ///
    /// Replaces the cache with the fetched records and stamps the sync
    /// time. Errors from the client propagate unchanged.
    pub async fn force_update_all(&self) -> Result<()> {
        let fetched = self.client.fetch_vehicles().await?;
        let now = Utc::now();

        let mut updated: HashMap<String, Vehicle> = HashMap::with_capacity(fetched.len());
        for mut vehicle in fetched {
            vehicle.last_synced_at = Some(now);
            updated.insert(vehicle.id.clone(), vehicle);
        }

        let count = updated.len();
        let mut guard = self
            .vehicles
            .write()
            .map_err(|_| ChargecapError::generic("Vehicle cache lock poisoned"))?;
        *guard = updated;
        drop(guard);

        self.logger
            .debug(&format!("Refreshed {} vehicle records", count));
        Ok(())
    }

    /// Apply a compound AC/DC charge-limit update remotely.
    ///
    /// Thin pass-through to the client; no retry and no local recovery.
    pub async fn set_charge_limits(
        &self,
        vehicle_id: &str,
        limits: &EvChargeLimits,
    ) -> Result<()> {
        self.logger.info(&format!(
            "Setting charge limits for {}: ac={:?} dc={:?}",
            vehicle_id, limits.ac, limits.dc
        ));
        self.client.set_charge_limits(vehicle_id, limits).await
    }

    /// Write an already-applied limits pair into the cached record.
    ///
    /// Used by entities after a successful remote update so observers see
    /// the new value immediately rather than after the next poll.
    pub fn apply_charge_limits(&self, vehicle_id: &str, limits: EvChargeLimits) {
        if let Ok(mut guard) = self.vehicles.write() {
            if let Some(vehicle) = guard.get_mut(vehicle_id) {
                vehicle.ev_charge_limits = limits;
            }
        }
    }
}

impl std::fmt::Debug for VehicleCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.vehicles.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("VehicleCoordinator")
            .field("vehicles", &count)
            .finish()
    }
}
