mod common;

use chargecap::coordinator::VehicleCoordinator;
use chargecap::vehicle::{EvChargeLimits, Vehicle};
use common::mock_client;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn force_update_all_replaces_cache_and_stamps_sync_time() {
    let (client, state) = mock_client(vec![
        Vehicle::new("veh_1", "Garage EV", EvChargeLimits::new(50, 80)),
        Vehicle::new("veh_2", "Street EV", EvChargeLimits::new(70, 90)),
    ]);
    let coordinator = VehicleCoordinator::new(client);

    assert!(coordinator.vehicles().is_empty());
    coordinator.force_update_all().await.unwrap();

    assert_eq!(coordinator.vehicles().len(), 2);
    let v1 = coordinator.vehicle("veh_1").unwrap();
    assert_eq!(v1.name, "Garage EV");
    assert_eq!(v1.ev_charge_limits, EvChargeLimits::new(50, 80));
    assert!(v1.last_synced_at.is_some());

    // A vehicle dropped from the account disappears on the next refresh
    state.put_vehicles(vec![Vehicle::new(
        "veh_2",
        "Street EV",
        EvChargeLimits::new(70, 90),
    )]);
    coordinator.force_update_all().await.unwrap();
    assert!(coordinator.vehicle("veh_1").is_none());
    assert_eq!(coordinator.vehicles().len(), 1);
}

#[tokio::test]
async fn force_update_all_propagates_fetch_errors() {
    let (client, state) = mock_client(vec![Vehicle::new(
        "veh_1",
        "Garage EV",
        EvChargeLimits::new(50, 80),
    )]);
    let coordinator = VehicleCoordinator::new(client);
    coordinator.force_update_all().await.unwrap();

    state.fail_fetch.store(true, Ordering::SeqCst);
    assert!(coordinator.force_update_all().await.is_err());

    // Cache keeps the last good snapshot
    assert_eq!(coordinator.vehicles().len(), 1);
}

#[tokio::test]
async fn set_charge_limits_delegates_to_client() {
    let (client, state) = mock_client(Vec::new());
    let coordinator = VehicleCoordinator::new(client);

    let limits = EvChargeLimits::new(60, 80);
    coordinator.set_charge_limits("veh_1", &limits).await.unwrap();

    assert_eq!(state.set_count(), 1);
    assert_eq!(state.last_set().unwrap(), ("veh_1".to_string(), limits));
}

#[tokio::test]
async fn apply_charge_limits_mutates_cached_record_only() {
    let (client, state) = mock_client(vec![Vehicle::new(
        "veh_1",
        "Garage EV",
        EvChargeLimits::new(50, 80),
    )]);
    let coordinator = VehicleCoordinator::new(client);
    coordinator.force_update_all().await.unwrap();

    coordinator.apply_charge_limits("veh_1", EvChargeLimits::new(60, 80));
    assert_eq!(
        coordinator.vehicle("veh_1").unwrap().ev_charge_limits,
        EvChargeLimits::new(60, 80)
    );
    // No remote traffic for a cache write
    assert_eq!(state.set_count(), 0);

    // Unknown vehicle ids are ignored
    coordinator.apply_charge_limits("veh_9", EvChargeLimits::new(60, 80));
    assert!(coordinator.vehicle("veh_9").is_none());
}
