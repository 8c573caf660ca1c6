//! Events flowing from the acquisition worker back to the UI thread.

use location_core::screen::AcquisitionToken;
use shared::error::AcquireError;
use shared::geo::Region;

pub enum UiEvent {
    /// The worker thread could not start at all. The screen folds this into
    /// the generic acquisition failure; the detail goes to the log.
    WorkerFailed { detail: String },
    AcquisitionResolved {
        token: AcquisitionToken,
        outcome: Result<Region, AcquireError>,
    },
}
