use anyhow::Result;
use async_trait::async_trait;
use shared::error::AcquireError;
use shared::geo::{Coordinate, PositionFix, Region};
use tracing::{debug, error, info};

pub mod providers;
pub mod screen;
pub mod view;

pub use screen::{AcquisitionToken, MountedScreen, ScreenState};
pub use view::{view_for_state, MapView, ScreenView, LOADING_CAPTION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// May suspend while the platform prompts the user.
    async fn request_foreground_permission(&self) -> Result<PermissionStatus>;
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Single-shot fix, not a subscription. May suspend while the hardware
    /// acquires.
    async fn current_position(&self) -> Result<PositionFix>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapViewOptions {
    pub show_user_location: bool,
    pub show_recenter_control: bool,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            show_user_location: true,
            show_recenter_control: true,
        }
    }
}

/// Drawing capability. Any surface that can place a region and markers is
/// acceptable; the core never inspects what gets drawn.
pub trait MapRenderer {
    fn render_map(&mut self, region: Region, markers: &[Coordinate], options: MapViewOptions);
}

/// Runs the acquisition sequence once: permission request first, then a
/// single-shot position fetch. The location provider is never queried when
/// permission is denied. Every failure is converted here; callers only see
/// `AcquireError`, and the underlying cause goes to the diagnostic log.
pub async fn acquire_region(
    permissions: &dyn PermissionProvider,
    locations: &dyn LocationProvider,
) -> Result<Region, AcquireError> {
    let status = permissions
        .request_foreground_permission()
        .await
        .map_err(|err| {
            error!("foreground permission request failed: {err:#}");
            AcquireError::acquisition(err)
        })?;

    if status == PermissionStatus::Denied {
        info!("foreground location permission denied");
        return Err(AcquireError::PermissionDenied);
    }

    let fix = locations.current_position().await.map_err(|err| {
        error!("current position fetch failed: {err:#}");
        AcquireError::acquisition(err)
    })?;

    debug!(
        latitude = fix.coordinate.latitude,
        longitude = fix.coordinate.longitude,
        accuracy_meters = fix.accuracy_meters,
        "position fix acquired"
    );
    Ok(Region::around(fix.coordinate))
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
