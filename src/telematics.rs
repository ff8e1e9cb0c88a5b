//! Telematics API client seam for Chargecap
//!
//! This module defines the trait the coordinator uses to talk to the
//! remote vehicle-telematics service. Implementing the actual service
//! protocol is out of scope; a placeholder client is provided for wiring.

use crate::config::TelematicsConfig;
use crate::error::{ChargecapError, Result};
use crate::logging::get_logger;
use crate::vehicle::{EvChargeLimits, Vehicle};

/// Remote vehicle-telematics client
#[async_trait::async_trait]
pub trait TelematicsClient: Send + Sync {
    /// Fetch the current state of all vehicles on the account
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>>;

    /// Apply a compound AC/DC charge-limit update to one vehicle.
    ///
    /// The service accepts both caps only together; callers must supply
    /// the full pair.
    async fn set_charge_limits(&self, vehicle_id: &str, limits: &EvChargeLimits) -> Result<()>;
}

/// Hyundai / Kia Connect client placeholder
pub struct HyundaiKiaClient {
    username: String,
    password: String,
    pin: String,
    region: String,
    brand: String,
    logger: crate::logging::StructuredLogger,
}

impl HyundaiKiaClient {
    /// Create a client from telematics credentials
    pub fn new(config: &TelematicsConfig) -> Self {
        let logger = get_logger("telematics");
        Self {
            username: config.username.clone(),
            password: config.password.clone(),
            pin: config.pin.clone(),
            region: config.region.clone(),
            brand: config.brand.clone(),
            logger,
        }
    }

    /// Account region this client was configured for
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Vehicle brand this client was configured for
    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Whether a complete credential set was supplied
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty() && !self.pin.is_empty()
    }
}

#[async_trait::async_trait]
impl TelematicsClient for HyundaiKiaClient {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.logger.debug(&format!(
            "fetch_vehicles requested for {} account {}",
            self.brand, self.username
        ));
        Err(ChargecapError::api(
            "Hyundai/Kia Connect integration not yet implemented",
        ))
    }

    async fn set_charge_limits(&self, vehicle_id: &str, _limits: &EvChargeLimits) -> Result<()> {
        self.logger
            .debug(&format!("set_charge_limits requested for {}", vehicle_id));
        Err(ChargecapError::api(
            "Hyundai/Kia Connect integration not yet implemented",
        ))
    }
}
