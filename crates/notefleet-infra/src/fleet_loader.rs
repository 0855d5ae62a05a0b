//! Fleet loader from TOML configuration

use notefleet_domain::Vehicle;
use notefleet_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetConfig {
    #[serde(default)]
    vehicles: Vec<FleetEntry>,
}

#[derive(Debug, Deserialize)]
struct FleetEntry {
    id: u32,
    #[serde(default = "default_true")]
    available: bool,
}

fn default_true() -> bool {
    true
}

/// Fleet loaded from TOML, in file order
#[derive(Debug)]
pub struct FleetLoader {
    vehicles: Vec<Vehicle>,
}

impl FleetLoader {
    /// Load a fleet from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load a fleet from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: FleetConfig = toml::from_str(toml_content)?;

        let mut seen = HashSet::new();
        let mut vehicles = Vec::with_capacity(config.vehicles.len());
        for entry in config.vehicles {
            if !seen.insert(entry.id) {
                return Err(ConfigError::ParseError(format!(
                    "Duplicate vehicle id in fleet: {}",
                    entry.id
                ))
                .into());
            }
            let mut vehicle = Vehicle::new(entry.id);
            if !entry.available {
                vehicle.mark_unavailable();
            }
            vehicles.push(vehicle);
        }

        debug!(count = vehicles.len(), "fleet loaded");
        Ok(Self { vehicles })
    }

    /// Get the total number of vehicles
    pub fn count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn into_vehicles(self) -> Vec<Vehicle> {
        self.vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TEST_TOML: &str = r#"
[[vehicles]]
id = 11

[[vehicles]]
id = 4
available = false

[[vehicles]]
id = 7
"#;

    #[test]
    fn test_load_from_str() {
        let loader = FleetLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 3);
    }

    #[test]
    fn test_keeps_file_order() {
        let ids: Vec<u32> = FleetLoader::load_from_str(TEST_TOML)
            .unwrap()
            .into_vehicles()
            .iter()
            .map(|v| v.id.0)
            .collect();
        assert_eq!(ids, vec![11, 4, 7]);
    }

    #[test]
    fn test_availability_flag() {
        let available: Vec<bool> = FleetLoader::load_from_str(TEST_TOML)
            .unwrap()
            .into_vehicles()
            .iter()
            .map(|v| v.is_available())
            .collect();
        assert_eq!(available, vec![true, false, true]);
    }

    #[test]
    fn test_invalid_toml() {
        let result = FleetLoader::load_from_str("[[vehicles]]
id = \"one\"\n");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_empty_fleet() {
        let loader = FleetLoader::load_from_str("").unwrap();
        assert_eq!(loader.count(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let toml = "[[vehicles]]\nid = 1\n\n[[vehicles]]\nid = 1\n";
        let err = FleetLoader::load_from_str(toml).unwrap_err();
        assert!(err.to_string().contains("Duplicate vehicle id"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();
        let loader = FleetLoader::load_from_file(file.path()).unwrap();
        assert_eq!(loader.count(), 3);
    }

    #[test]
    fn test_missing_file() {
        let result = FleetLoader::load_from_file(Path::new("/nonexistent/fleet.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }
}
