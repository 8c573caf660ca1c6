//! Pure derivation of what to draw from the current screen state.

use shared::geo::{Coordinate, Region, FALLBACK_REGION};

use crate::{MapViewOptions, ScreenState};

pub const LOADING_CAPTION: &str = "Loading map...";

/// Everything the map surface needs for the Ready presentation: the visible
/// region, a single marker at its center, and the control toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub region: Region,
    pub markers: Vec<Coordinate>,
    pub options: MapViewOptions,
}

impl MapView {
    /// Builds the map presentation, substituting the fixed fallback region
    /// when no resolved region is available.
    pub fn for_region(region: Option<Region>) -> Self {
        let region = region.unwrap_or(FALLBACK_REGION);
        Self {
            region,
            markers: vec![region.center],
            options: MapViewOptions::default(),
        }
    }
}

/// One of the three presentations, as data.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Loading { caption: &'static str },
    Error { message: String },
    Map(MapView),
}

/// Pure function of the screen state; deriving twice from the same state
/// yields the same view.
pub fn view_for_state(state: &ScreenState) -> ScreenView {
    match state {
        ScreenState::Loading => ScreenView::Loading {
            caption: LOADING_CAPTION,
        },
        ScreenState::Error { message } => ScreenView::Error {
            message: message.clone(),
        },
        ScreenState::Ready { region } => ScreenView::Map(MapView::for_region(Some(*region))),
    }
}
