use serde::{Deserialize, Serialize};

use super::LifeCore;

pub const DEFAULT_GRID_SIZE: u32 = 40;
pub const DEFAULT_TICK_MS: u32 = 100;
pub const DEFAULT_CELL_SIZE_PX: u32 = 20;
pub const MAX_GRID_SIZE: u32 = 1024;

/// Construction-time settings. Fixed for the lifetime of a `Life`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LifeConfig {
    /// Board is `grid_size` × `grid_size` cells
    pub grid_size: u32,
    /// Period of the evolution timer
    pub tick_ms: u32,
    /// Rendering only; the core never reads it
    pub cell_size_px: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
        }
    }
}

impl LifeConfig {
    pub fn with_grid_size(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LifeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain integers only, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(format!(
                "gridSize must be in 1..={}, got {}",
                MAX_GRID_SIZE, self.grid_size
            ));
        }
        if self.tick_ms == 0 {
            return Err("tickMs must be at least 1".to_string());
        }
        if self.cell_size_px == 0 {
            return Err("cellSizePx must be at least 1".to_string());
        }
        Ok(())
    }
}

pub(super) fn get_config(world: &LifeCore) -> LifeConfig {
    world.config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_board() {
        let config = LifeConfig::default();
        assert_eq!(config.grid_size, 40);
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.cell_size_px, 20);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = LifeConfig::from_json(r#"{ "gridSize": 10 }"#).unwrap();
        assert_eq!(config.grid_size, 10);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(LifeConfig::from_json(r#"{ "gridSize": 0 }"#).is_err());
        assert!(LifeConfig::from_json(r#"{ "gridSize": 5000 }"#).is_err());
        assert!(LifeConfig::from_json(r#"{ "tickMs": 0 }"#).is_err());
        assert!(LifeConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trips_through_ui() {
        let config = LifeConfig {
            grid_size: 12,
            tick_ms: 250,
            cell_size_px: 8,
        };
        assert_eq!(LifeConfig::from_json(&config.to_json()).unwrap(), config);
    }
}
