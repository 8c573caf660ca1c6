//! Screen state for one mount of the map screen.

use shared::error::AcquireError;
use shared::geo::Region;
use tracing::debug;

/// The three mutually exclusive presentations. Transitions run one way:
/// `Loading` settles into `Error` or `Ready` and stays there for the life
/// of the mount.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Loading,
    Error { message: String },
    Ready { region: Region },
}

impl ScreenState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Identifies the single acquisition run belonging to one mount. A result
/// carrying a stale token is dropped instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionToken(u64);

/// Owns the screen state between mount and unmount. Created fresh per
/// mount, never shared, never persisted.
#[derive(Debug)]
pub struct MountedScreen {
    state: ScreenState,
    run: u64,
}

impl MountedScreen {
    pub fn mount() -> (Self, AcquisitionToken) {
        let screen = Self {
            state: ScreenState::Loading,
            run: 0,
        };
        let token = AcquisitionToken(screen.run);
        (screen, token)
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    /// Applies the outcome of an acquisition run. Returns `false` when the
    /// result arrived too late to matter: the token is stale or the state
    /// already settled.
    pub fn resolve(
        &mut self,
        token: AcquisitionToken,
        outcome: Result<Region, AcquireError>,
    ) -> bool {
        if token.0 != self.run || self.state.is_terminal() {
            debug!(
                run = token.0,
                current = self.run,
                "dropping superseded acquisition result"
            );
            return false;
        }
        self.state = match outcome {
            Ok(region) => ScreenState::Ready { region },
            Err(err) => ScreenState::Error {
                message: err.user_message().to_string(),
            },
        };
        true
    }

    /// Fresh mount: back to `Loading` with a new run token. Any in-flight
    /// run from before is invalidated rather than cancelled.
    pub fn remount(&mut self) -> AcquisitionToken {
        self.run += 1;
        self.state = ScreenState::Loading;
        AcquisitionToken(self.run)
    }
}
