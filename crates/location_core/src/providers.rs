//! Reference providers for hosts without a real positioning backend.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::geo::{Coordinate, PositionFix};

use crate::{LocationProvider, PermissionProvider, PermissionStatus};

/// Permission gate with a fixed answer; stands in for the platform prompt
/// on desktop builds and in tests.
pub struct StaticPermissionGate {
    granted: bool,
}

impl StaticPermissionGate {
    pub fn granted() -> Self {
        Self { granted: true }
    }

    pub fn denied() -> Self {
        Self { granted: false }
    }
}

#[async_trait]
impl PermissionProvider for StaticPermissionGate {
    async fn request_foreground_permission(&self) -> Result<PermissionStatus> {
        Ok(if self.granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }
}

/// Returns one configured fix, stamped with the current time.
pub struct FixedLocationProvider {
    coordinate: Coordinate,
    accuracy_meters: Option<f64>,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            accuracy_meters: None,
        }
    }

    pub fn with_accuracy(coordinate: Coordinate, accuracy_meters: f64) -> Self {
        Self {
            coordinate,
            accuracy_meters: Some(accuracy_meters),
        }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_position(&self) -> Result<PositionFix> {
        let mut fix = PositionFix::now(self.coordinate);
        fix.accuracy_meters = self.accuracy_meters;
        Ok(fix)
    }
}

/// Every request fails; for hosts with no positioning backend at all.
pub struct UnavailableLocationProvider;

#[async_trait]
impl LocationProvider for UnavailableLocationProvider {
    async fn current_position(&self) -> Result<PositionFix> {
        Err(anyhow!("no positioning backend available on this host"))
    }
}
