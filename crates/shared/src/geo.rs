use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visible map span applied whenever a concrete region is not yet known.
/// Roughly city-scale zoom.
pub const DEFAULT_LATITUDE_DELTA: f64 = 0.0922;
pub const DEFAULT_LONGITUDE_DELTA: f64 = 0.0421;

/// Display-only substitute when no resolved region exists (New York City).
/// Never stored as screen state.
pub const FALLBACK_COORDINATE: Coordinate = Coordinate {
    latitude: 40.7128,
    longitude: -74.0060,
};

pub const FALLBACK_REGION: Region = Region {
    center: FALLBACK_COORDINATE,
    latitude_delta: DEFAULT_LATITUDE_DELTA,
    longitude_delta: DEFAULT_LONGITUDE_DELTA,
};

/// WGS84 degrees as reported by the device location API; not validated or
/// transformed on the way through.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Visible span of the map around a center coordinate. Deltas are positive
/// spans in degrees, not display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Region at `center` with the default city-scale spans.
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitude_delta: DEFAULT_LATITUDE_DELTA,
            longitude_delta: DEFAULT_LONGITUDE_DELTA,
        }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (coordinate.latitude - self.center.latitude).abs() <= half_lat
            && (coordinate.longitude - self.center.longitude).abs() <= half_lon
    }
}

/// One position fix as delivered by a location backend: the coordinate plus
/// the accuracy and timestamp most backends report alongside it. Only the
/// coordinate participates in region construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    pub accuracy_meters: Option<f64>,
    pub acquired_at: DateTime<Utc>,
}

impl PositionFix {
    pub fn now(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            accuracy_meters: None,
            acquired_at: Utc::now(),
        }
    }
}
