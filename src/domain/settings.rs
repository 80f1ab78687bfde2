//! Simulation settings - the runtime configuration record
//!
//! Fixed at construction. Grid dimensions are derived from the world size
//! and the cell size by integer division, so the defaults (1000x700 at cell
//! size 4) produce a 250x175 grid.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimSettings {
    /// World width in display units.
    pub width: u32,
    /// World height in display units.
    pub height: u32,
    /// Edge length of one grid cell in display units.
    pub cell_size: u32,
    /// Side length of the square brush stamp.
    pub spawn_matrix_size: u32,
    /// Per-cell fill chance of the brush, percent.
    pub spawn_probability: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            cell_size: 4,
            spawn_matrix_size: 5,
            spawn_probability: 75,
        }
    }
}

impl SimSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: SimSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err("world dimensions must be non-zero".to_string());
        }
        if self.cell_size == 0 {
            return Err("cell size must be non-zero".to_string());
        }
        if self.cell_size > self.width || self.cell_size > self.height {
            return Err("cell size must not exceed world dimensions".to_string());
        }
        if self.spawn_matrix_size == 0 {
            return Err("spawn matrix size must be non-zero".to_string());
        }
        if self.spawn_probability > 100 {
            return Err("spawn probability must be 0-100".to_string());
        }
        Ok(())
    }

    /// Grid columns derived from world width.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.width / self.cell_size
    }

    /// Grid rows derived from world height.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.height / self.cell_size
    }

    /// Half-extent of the brush stamp (integer division, so 5 -> 2).
    #[inline]
    pub fn brush_extent(&self) -> i32 {
        (self.spawn_matrix_size / 2) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_derive_the_expected_grid() {
        let settings = SimSettings::default();
        assert_eq!(settings.cols(), 250);
        assert_eq!(settings.rows(), 175);
        assert_eq!(settings.brush_extent(), 2);
    }

    #[test]
    fn json_round_trip() {
        let settings = SimSettings {
            width: 320,
            height: 240,
            cell_size: 8,
            spawn_matrix_size: 3,
            spawn_probability: 50,
        };
        let parsed = SimSettings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn json_uses_defaults_for_missing_fields() {
        let parsed = SimSettings::from_json(r#"{"width":400,"height":400}"#).unwrap();
        assert_eq!(parsed.cell_size, 4);
        assert_eq!(parsed.spawn_probability, 75);
        assert_eq!(parsed.cols(), 100);
    }

    #[test]
    fn rejects_zero_cell_size() {
        assert!(SimSettings {
            cell_size: 0,
            ..SimSettings::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn rejects_probability_over_100() {
        assert!(SimSettings {
            spawn_probability: 101,
            ..SimSettings::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn rejects_cell_size_larger_than_world() {
        assert!(SimSettings {
            width: 2,
            height: 2,
            cell_size: 4,
            ..SimSettings::default()
        }
        .validate()
        .is_err());
    }
}
