use anyhow::Result;
use clap::Parser;

use location_core::providers::{
    FixedLocationProvider, StaticPermissionGate, UnavailableLocationProvider,
};
use location_core::{acquire_region, LocationProvider};
use shared::geo::Coordinate;

/// One-shot location probe: runs the same permission -> fix sequence the
/// map screen uses and prints the outcome.
#[derive(Parser, Debug)]
struct Args {
    /// Answer the permission prompt with a denial.
    #[arg(long)]
    deny_permission: bool,
    /// Simulate a host without any positioning backend.
    #[arg(long)]
    unavailable: bool,
    #[arg(long, default_value_t = 51.5074)]
    latitude: f64,
    #[arg(long, default_value_t = -0.1278)]
    longitude: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let permissions = if args.deny_permission {
        StaticPermissionGate::denied()
    } else {
        StaticPermissionGate::granted()
    };
    let locations: Box<dyn LocationProvider> = if args.unavailable {
        Box::new(UnavailableLocationProvider)
    } else {
        Box::new(FixedLocationProvider::new(Coordinate::new(
            args.latitude,
            args.longitude,
        )))
    };

    match acquire_region(&permissions, locations.as_ref()).await {
        Ok(region) => println!(
            "region: center=({:.4}, {:.4}) span=({}, {})",
            region.center.latitude,
            region.center.longitude,
            region.latitude_delta,
            region.longitude_delta
        ),
        Err(err) => println!("{}", err.user_message()),
    }

    Ok(())
}
