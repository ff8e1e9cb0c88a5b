//! Charge-limit number entities for Chargecap
//!
//! This module holds the static descriptor table for the two controllable
//! quantities and the entity type bridging platform state to remote
//! vehicle state through the shared coordinator.

use crate::DOMAIN;
use crate::coordinator::VehicleCoordinator;
use crate::error::{ChargecapError, Result};
use crate::logging::get_logger;
use crate::platform::{EntityRegistry, StateBus, StateUpdate};
use crate::vehicle::ChargeLimitKind;
use std::sync::Arc;

/// Static definition of one controllable charge-limit quantity
#[derive(Debug, Clone, Copy)]
pub struct ChargeLimitDescription {
    /// Which side of the compound pair this controls
    pub kind: ChargeLimitKind,

    /// Identifying key, unique within the integration
    pub key: &'static str,

    /// Display name suffix, prefixed with the vehicle name
    pub name: &'static str,

    /// Icon identifier
    pub icon: &'static str,

    /// Minimum settable value in percent
    pub native_min_value: f64,

    /// Maximum settable value in percent
    pub native_max_value: f64,

    /// Step between settable values
    pub native_step: f64,
}

/// Descriptor table, defined once at module load and never mutated
pub static NUMBER_DESCRIPTIONS: [ChargeLimitDescription; 2] = [
    ChargeLimitDescription {
        kind: ChargeLimitKind::Ac,
        key: "ac_charging_limit",
        name: "AC Charging Limit",
        icon: "mdi:ev-plug-type2",
        native_min_value: 50.0,
        native_max_value: 100.0,
        native_step: 10.0,
    },
    ChargeLimitDescription {
        kind: ChargeLimitKind::Dc,
        key: "dc_charging_limit",
        name: "DC Charging Limit",
        icon: "mdi:ev-plug-ccs2",
        native_min_value: 50.0,
        native_max_value: 100.0,
        native_step: 10.0,
    },
];

/// One controllable number per (vehicle, descriptor) pair
#[derive(Debug, Clone)]
pub struct ChargeLimitNumber {
    /// Shared coordinator handle
    coordinator: Arc<VehicleCoordinator>,

    /// Static descriptor this entity was built from
    description: &'static ChargeLimitDescription,

    /// Target vehicle id
    vehicle_id: String,

    /// Unique identity derived from {domain, vehicle id, descriptor key}
    unique_id: String,

    /// Display name, "<vehicle name> <descriptor name>"
    name: String,

    /// State-persist notification bus
    state_bus: StateBus,

    /// Logger with context
    logger: crate::logging::StructuredLogger,
}

impl ChargeLimitNumber {
    /// Create an entity for one vehicle and one descriptor
    pub fn new(
        coordinator: Arc<VehicleCoordinator>,
        description: &'static ChargeLimitDescription,
        vehicle_id: &str,
        vehicle_name: &str,
        state_bus: StateBus,
    ) -> Self {
        let logger = get_logger("number");
        Self {
            coordinator,
            description,
            vehicle_id: vehicle_id.to_string(),
            unique_id: format!("{}_{}_{}", DOMAIN, vehicle_id, description.key),
            name: format!("{} {}", vehicle_name, description.name),
            state_bus,
            logger,
        }
    }

    /// Unique identifier string
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Icon identifier
    pub fn icon(&self) -> &str {
        self.description.icon
    }

    /// Static descriptor this entity was built from
    pub fn description(&self) -> &'static ChargeLimitDescription {
        self.description
    }

    /// Target vehicle id
    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Return the cached percentage for this entity's attribute.
    ///
    /// Pure synchronous accessor over coordinator state; performs no
    /// remote I/O. `None` when the value is unset or the vehicle is no
    /// longer in the cache.
    pub fn native_value(&self) -> Option<f64> {
        self.coordinator
            .vehicle(&self.vehicle_id)?
            .ev_charge_limits
            .get(self.description.kind)
            .map(f64::from)
    }

    /// Set a new charge limit.
    ///
    /// Forces a full refresh first: the remote API requires both AC and
    /// DC limits together, so the current sibling value must be fresh,
    /// not a stale cached one. If the requested value (truncated to an
    /// integer) already matches the refreshed cached value, the call is
    /// a no-op. Otherwise the compound pair is sent remotely, written
    /// back into the cache, and a state notification is published.
    pub async fn set_native_value(&self, value: f64) -> Result<()> {
        self.coordinator.force_update_all().await?;

        let vehicle = self
            .coordinator
            .vehicle(&self.vehicle_id)
            .ok_or_else(|| {
                ChargecapError::api(format!("Unknown vehicle: {}", self.vehicle_id))
            })?;

        let requested = value as u8;
        let current_limits = vehicle.ev_charge_limits;
        if current_limits.get(self.description.kind) == Some(requested) {
            self.logger.debug(&format!(
                "{} already at {}, skipping remote update",
                self.unique_id, requested
            ));
            return Ok(());
        }

        // Carry the freshly refreshed sibling value into the compound pair
        let new_limits = current_limits.with(self.description.kind, requested);
        self.coordinator
            .set_charge_limits(&self.vehicle_id, &new_limits)
            .await?;

        self.coordinator
            .apply_charge_limits(&self.vehicle_id, new_limits);
        self.state_bus.publish(StateUpdate {
            unique_id: self.unique_id.clone(),
            value: new_limits.get(self.description.kind).map(f64::from),
        });

        Ok(())
    }
}

/// Build and register one entity per (vehicle, descriptor) pair.
///
/// A vehicle that does not report an attribute gets no entity for it;
/// unsupported combinations are skipped silently.
pub fn setup_numbers(
    coordinator: &Arc<VehicleCoordinator>,
    state_bus: &StateBus,
    registry: &mut EntityRegistry,
) {
    let logger = get_logger("number");
    let mut entities = Vec::new();

    for vehicle in coordinator.vehicles() {
        for description in &NUMBER_DESCRIPTIONS {
            if vehicle.supports(description.kind) {
                entities.push(ChargeLimitNumber::new(
                    Arc::clone(coordinator),
                    description,
                    &vehicle.id,
                    &vehicle.name,
                    state_bus.clone(),
                ));
            }
        }
    }

    logger.info(&format!(
        "Registering {} charge limit entities",
        entities.len()
    ));
    registry.add_entities(entities);
}
