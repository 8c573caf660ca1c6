use super::*;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use shared::geo::{
    Coordinate, DEFAULT_LATITUDE_DELTA, DEFAULT_LONGITUDE_DELTA, FALLBACK_COORDINATE,
    FALLBACK_REGION,
};

use crate::providers::{FixedLocationProvider, StaticPermissionGate, UnavailableLocationProvider};
use crate::screen::MountedScreen;
use crate::view::{view_for_state, MapView, ScreenView, LOADING_CAPTION};

struct TestPermissionProvider {
    status: PermissionStatus,
    fail_with: Option<String>,
}

impl TestPermissionProvider {
    fn granting() -> Self {
        Self {
            status: PermissionStatus::Granted,
            fail_with: None,
        }
    }

    fn denying() -> Self {
        Self {
            status: PermissionStatus::Denied,
            fail_with: None,
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            status: PermissionStatus::Granted,
            fail_with: Some(err.into()),
        }
    }
}

#[async_trait]
impl PermissionProvider for TestPermissionProvider {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus> {
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        Ok(self.status)
    }
}

struct CountingLocationProvider {
    coordinate: Coordinate,
    fail_with: Option<String>,
    calls: Arc<Mutex<u32>>,
}

impl CountingLocationProvider {
    fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            fail_with: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            coordinate: FALLBACK_COORDINATE,
            fail_with: Some(err.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    fn call_count(&self) -> u32 {
        *self.calls.lock().expect("calls lock")
    }
}

#[async_trait]
impl LocationProvider for CountingLocationProvider {
    async fn current_position(&self) -> Result<PositionFix> {
        *self.calls.lock().expect("calls lock") += 1;
        if let Some(err) = &self.fail_with {
            return Err(anyhow!(err.clone()));
        }
        Ok(PositionFix::now(self.coordinate))
    }
}

#[test]
fn mounted_screen_starts_in_loading_with_caption() {
    let (screen, _token) = MountedScreen::mount();
    assert_eq!(*screen.state(), ScreenState::Loading);
    assert_eq!(
        view_for_state(screen.state()),
        ScreenView::Loading {
            caption: LOADING_CAPTION
        }
    );
    assert_eq!(LOADING_CAPTION, "Loading map...");
}

#[tokio::test]
async fn denied_permission_settles_error_without_querying_location() {
    let permissions = TestPermissionProvider::denying();
    let locations = CountingLocationProvider::at(Coordinate::new(51.5074, -0.1278));

    let outcome = acquire_region(&permissions, &locations).await;
    assert!(matches!(outcome, Err(AcquireError::PermissionDenied)));
    assert_eq!(locations.call_count(), 0);

    let (mut screen, token) = MountedScreen::mount();
    assert!(screen.resolve(token, outcome));
    assert_eq!(
        *screen.state(),
        ScreenState::Error {
            message: "Permission to access location was denied".to_string()
        }
    );
}

#[tokio::test]
async fn successful_fix_builds_region_with_default_spans() {
    let permissions = TestPermissionProvider::granting();
    let locations = CountingLocationProvider::at(Coordinate::new(51.5074, -0.1278));

    let region = acquire_region(&permissions, &locations)
        .await
        .expect("region");
    assert_eq!(region.center, Coordinate::new(51.5074, -0.1278));
    assert_eq!(region.latitude_delta, DEFAULT_LATITUDE_DELTA);
    assert_eq!(region.longitude_delta, DEFAULT_LONGITUDE_DELTA);
    assert_eq!(locations.call_count(), 1);

    let (mut screen, token) = MountedScreen::mount();
    assert!(screen.resolve(token, Ok(region)));
    match view_for_state(screen.state()) {
        ScreenView::Map(map) => {
            assert_eq!(map.region, region);
            assert_eq!(map.markers, vec![region.center]);
            assert!(map.options.show_user_location);
            assert!(map.options.show_recenter_control);
        }
        other => panic!("expected map view, got {other:?}"),
    }
}

#[tokio::test]
async fn location_failure_settles_generic_error_message() {
    let permissions = TestPermissionProvider::granting();
    let locations = CountingLocationProvider::failing("gps hardware offline");

    let outcome = acquire_region(&permissions, &locations).await;
    assert!(matches!(outcome, Err(AcquireError::Acquisition { .. })));

    let (mut screen, token) = MountedScreen::mount();
    assert!(screen.resolve(token, outcome));
    assert_eq!(
        *screen.state(),
        ScreenState::Error {
            message: "Failed to fetch location".to_string()
        }
    );
}

#[tokio::test]
async fn permission_provider_error_maps_to_generic_failure() {
    let permissions = TestPermissionProvider::failing("prompt service crashed");
    let locations = CountingLocationProvider::at(FALLBACK_COORDINATE);

    let outcome = acquire_region(&permissions, &locations).await;
    match outcome {
        Err(err @ AcquireError::Acquisition { .. }) => {
            assert_eq!(err.user_message(), "Failed to fetch location");
        }
        other => panic!("expected acquisition failure, got {other:?}"),
    }
    assert_eq!(locations.call_count(), 0);
}

#[tokio::test]
async fn unavailable_provider_settles_generic_error() {
    let permissions = StaticPermissionGate::granted();
    let locations = UnavailableLocationProvider;

    let outcome = acquire_region(&permissions, &locations).await;
    match outcome {
        Err(err) => assert_eq!(err.user_message(), "Failed to fetch location"),
        Ok(region) => panic!("expected failure, got {region:?}"),
    }
}

#[tokio::test]
async fn fixed_provider_round_trips_configured_coordinate() {
    let permissions = StaticPermissionGate::granted();
    let locations = FixedLocationProvider::with_accuracy(Coordinate::new(35.6762, 139.6503), 12.0);

    let region = acquire_region(&permissions, &locations)
        .await
        .expect("region");
    assert_eq!(region.center, Coordinate::new(35.6762, 139.6503));
}

#[test]
fn settled_state_ignores_a_second_resolution() {
    let (mut screen, token) = MountedScreen::mount();
    let region = Region::around(Coordinate::new(51.5074, -0.1278));
    assert!(screen.resolve(token, Ok(region)));

    assert!(!screen.resolve(token, Err(AcquireError::PermissionDenied)));
    assert_eq!(*screen.state(), ScreenState::Ready { region });
}

#[test]
fn result_from_a_superseded_run_is_dropped() {
    let (mut screen, stale_token) = MountedScreen::mount();
    let fresh_token = screen.remount();

    let region = Region::around(Coordinate::new(48.8566, 2.3522));
    assert!(!screen.resolve(stale_token, Ok(region)));
    assert_eq!(*screen.state(), ScreenState::Loading);

    assert!(screen.resolve(fresh_token, Ok(region)));
    assert_eq!(*screen.state(), ScreenState::Ready { region });
}

#[test]
fn missing_region_renders_the_fallback_region() {
    let map = MapView::for_region(None);
    assert_eq!(map.region, FALLBACK_REGION);
    assert_eq!(map.region.center, Coordinate::new(40.7128, -74.0060));
    assert_eq!(map.markers, vec![FALLBACK_COORDINATE]);
}

#[test]
fn view_derivation_is_idempotent() {
    let states = [
        ScreenState::Loading,
        ScreenState::Error {
            message: "Failed to fetch location".to_string(),
        },
        ScreenState::Ready {
            region: Region::around(Coordinate::new(51.5074, -0.1278)),
        },
    ];
    for state in &states {
        assert_eq!(view_for_state(state), view_for_state(state));
    }
}
