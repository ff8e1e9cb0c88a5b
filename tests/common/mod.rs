//! Shared test doubles for the integration tests.

use chargecap::error::{ChargecapError, Result};
use chargecap::telematics::TelematicsClient;
use chargecap::vehicle::{EvChargeLimits, Vehicle};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Shared, inspectable state behind a [`MockTelematics`] client
#[derive(Default)]
pub struct MockState {
    pub vehicles: Mutex<Vec<Vehicle>>,
    pub fetch_calls: AtomicUsize,
    pub set_calls: Mutex<Vec<(String, EvChargeLimits)>>,
    pub fail_fetch: AtomicBool,
    pub fail_set: AtomicBool,
}

impl MockState {
    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn set_count(&self) -> usize {
        self.set_calls.lock().unwrap().len()
    }

    pub fn last_set(&self) -> Option<(String, EvChargeLimits)> {
        self.set_calls.lock().unwrap().last().cloned()
    }

    /// Replace the vehicle list returned by the next fetch
    pub fn put_vehicles(&self, vehicles: Vec<Vehicle>) {
        *self.vehicles.lock().unwrap() = vehicles;
    }
}

pub struct MockTelematics {
    state: Arc<MockState>,
}

#[async_trait::async_trait]
impl TelematicsClient for MockTelematics {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>> {
        self.state.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_fetch.load(Ordering::SeqCst) {
            return Err(ChargecapError::api("mock fetch error"));
        }
        Ok(self.state.vehicles.lock().unwrap().clone())
    }

    async fn set_charge_limits(&self, vehicle_id: &str, limits: &EvChargeLimits) -> Result<()> {
        self.state
            .set_calls
            .lock()
            .unwrap()
            .push((vehicle_id.to_string(), *limits));
        if self.state.fail_set.load(Ordering::SeqCst) {
            return Err(ChargecapError::api("mock set error"));
        }
        Ok(())
    }
}

/// Build a mock client serving the given vehicles, plus the handle to
/// inspect recorded calls after the client is handed to a coordinator.
pub fn mock_client(vehicles: Vec<Vehicle>) -> (Box<dyn TelematicsClient>, Arc<MockState>) {
    let state = Arc::new(MockState::default());
    state.put_vehicles(vehicles);
    let client = MockTelematics {
        state: Arc::clone(&state),
    };
    (Box::new(client), state)
}
