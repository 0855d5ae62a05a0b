//! Build stores from configuration

use notefleet_domain::Vehicle;
use notefleet_infra::FleetLoader;
use notefleet_store::{LogisticSystem, Notebook};
use notefleet_types::Result;
use tracing::info;

use crate::config::Config;

/// Empty notebook issuing ids from the configured start
pub fn open_notebook(config: &Config) -> Notebook {
    Notebook::new().starting_at(config.first_note_id)
}

/// Order store with the configured fleet
///
/// A fleet file takes precedence over `fleet_size`.
pub fn open_logistics(config: &Config) -> Result<LogisticSystem> {
    let vehicles = match config.fleet_file {
        Some(ref path) => {
            let loader = FleetLoader::load_from_file(path)?;
            info!(path = %path.display(), vehicles = loader.count(), "fleet file loaded");
            loader.into_vehicles()
        }
        None => Vehicle::numbered_fleet(config.fleet_size),
    };
    info!(vehicles = vehicles.len(), "fleet ready");
    Ok(LogisticSystem::with_first_order_id(
        vehicles,
        config.first_order_id,
    ))
}
