use std::{collections::HashMap, fs, path::Path, sync::Arc};

use location_core::providers::{
    FixedLocationProvider, StaticPermissionGate, UnavailableLocationProvider,
};
use location_core::{LocationProvider, PermissionProvider};
use shared::geo::Coordinate;

pub const DEFAULT_SETTINGS_FILE: &str = "pinpoint.toml";

/// Which location backend the app talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Fixed,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub permission_granted: bool,
    pub provider: ProviderKind,
    pub fixed_latitude: f64,
    pub fixed_longitude: f64,
    pub fixed_accuracy_meters: Option<f64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            permission_granted: true,
            provider: ProviderKind::Fixed,
            fixed_latitude: 51.5074,
            fixed_longitude: -0.1278,
            fixed_accuracy_meters: Some(25.0),
        }
    }
}

/// Defaults, overridden by the settings file when present, overridden in
/// turn by environment variables (`PINPOINT_*`, with `APP__*` aliases).
pub fn load_settings(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let file = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
    if let Ok(raw) = fs::read_to_string(file) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_entries(&mut settings, &file_cfg);
        }
    }

    let mut env_cfg = HashMap::new();
    for key in [
        "permission",
        "provider",
        "fixed_latitude",
        "fixed_longitude",
        "fixed_accuracy_meters",
    ] {
        if let Ok(v) = std::env::var(format!("PINPOINT_{}", key.to_uppercase())) {
            env_cfg.insert(key.to_string(), v);
        }
        if let Ok(v) = std::env::var(format!("APP__{}", key.to_uppercase())) {
            env_cfg.insert(key.to_string(), v);
        }
    }
    apply_entries(&mut settings, &env_cfg);

    settings
}

fn apply_entries(settings: &mut Settings, entries: &HashMap<String, String>) {
    if let Some(v) = entries.get("permission") {
        settings.permission_granted = !v.eq_ignore_ascii_case("denied");
    }
    if let Some(v) = entries.get("provider") {
        if v.eq_ignore_ascii_case("unavailable") {
            settings.provider = ProviderKind::Unavailable;
        } else if v.eq_ignore_ascii_case("fixed") {
            settings.provider = ProviderKind::Fixed;
        }
    }
    if let Some(v) = entries.get("fixed_latitude").and_then(|v| v.parse().ok()) {
        settings.fixed_latitude = v;
    }
    if let Some(v) = entries.get("fixed_longitude").and_then(|v| v.parse().ok()) {
        settings.fixed_longitude = v;
    }
    if let Some(v) = entries
        .get("fixed_accuracy_meters")
        .and_then(|v| v.parse().ok())
    {
        settings.fixed_accuracy_meters = Some(v);
    }
}

pub fn build_providers(
    settings: &Settings,
) -> (Arc<dyn PermissionProvider>, Arc<dyn LocationProvider>) {
    let permissions: Arc<dyn PermissionProvider> = if settings.permission_granted {
        Arc::new(StaticPermissionGate::granted())
    } else {
        Arc::new(StaticPermissionGate::denied())
    };

    let coordinate = Coordinate::new(settings.fixed_latitude, settings.fixed_longitude);
    let locations: Arc<dyn LocationProvider> = match settings.provider {
        ProviderKind::Fixed => match settings.fixed_accuracy_meters {
            Some(accuracy) => Arc::new(FixedLocationProvider::with_accuracy(coordinate, accuracy)),
            None => Arc::new(FixedLocationProvider::new(coordinate)),
        },
        ProviderKind::Unavailable => Arc::new(UnavailableLocationProvider),
    };

    (permissions, locations)
}
