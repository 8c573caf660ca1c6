//! Commands queued from the UI thread to the acquisition worker.

use location_core::screen::AcquisitionToken;

pub enum BackendCommand {
    /// Run the acquisition sequence once for the mount identified by
    /// `token`.
    AcquireFix { token: AcquisitionToken },
}
