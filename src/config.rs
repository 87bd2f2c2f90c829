use error_chain::bail;
use serde_derive::Deserialize;
use std::time::Duration;

use crate::errors::*;
use crate::grid::Grid;
use crate::units::{Height, Width};

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_STEP_INTERVAL_MILLIS: u64 = 33;

/// Settings a host exposes for the automaton.
///
/// `step_interval_millis` only means something to whatever schedules `Grid::step`, the grid
/// itself never reads it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub step_interval_millis: u64,
}

impl Default for LifeConfig {
    fn default() -> LifeConfig {
        LifeConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            step_interval_millis: DEFAULT_STEP_INTERVAL_MILLIS,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            bail!(ErrorKind::InvalidDimension(self.width, self.height));
        }
        Ok(())
    }

    #[inline]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_millis)
    }

    /// Build an all dead grid with the configured dimensions.
    pub fn build_grid(&self) -> Result<Grid> {
        self.validate()?;
        Grid::new(Width(self.width), Height(self.height))
    }

    /// Bring an existing grid to the configured dimensions.
    /// Does nothing if the grid already has them.
    pub fn apply_to(&self, grid: &mut Grid) -> Result<()> {
        self.validate()?;
        grid.resize(Width(self.width), Height(self.height)).map(|_| ())
    }
}

#[cfg(test)]
mod tests {

    use serde::de::value::{Error as ValueError, MapDeserializer};
    use serde::Deserialize;

    use super::*;

    #[test]
    fn defaults() {
        let config = LifeConfig::default();
        assert_eq!((config.width, config.height), (10, 10));
        assert_eq!(config.step_interval(), Duration::from_millis(33));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_invalid() {
        let config = LifeConfig { width: 0, ..LifeConfig::default() };
        match config.validate() {
            Err(e) => assert!(matches!(*e.kind(), ErrorKind::InvalidDimension(0, 10))),
            Ok(_) => panic!("zero width accepted"),
        }
        assert!(LifeConfig { height: 0, ..LifeConfig::default() }.build_grid().is_err());
    }

    #[test]
    fn zero_interval_is_valid() {
        let config = LifeConfig { step_interval_millis: 0, ..LifeConfig::default() };
        assert!(config.validate().is_ok());
        assert_eq!(config.step_interval(), Duration::from_millis(0));
    }

    #[test]
    fn build_and_apply() {
        let config = LifeConfig { width: 4, height: 6, step_interval_millis: 5 };
        let mut grid = config.build_grid().unwrap();
        assert_eq!((grid.width(), grid.height()), (Width(4), Height(6)));

        let bigger = LifeConfig { width: 8, ..config };
        bigger.apply_to(&mut grid).unwrap();
        assert_eq!(grid.size(), 48);

        let invalid = LifeConfig { width: 0, ..config };
        assert!(invalid.apply_to(&mut grid).is_err());
        assert_eq!(grid.size(), 48);
    }

    #[test]
    fn deserialize_fills_missing_fields_with_defaults() {
        let entries = vec![("width", 4u64), ("step_interval_millis", 0u64)];
        let deserializer = MapDeserializer::<_, ValueError>::new(entries.into_iter());
        let config = LifeConfig::deserialize(deserializer).unwrap();
        assert_eq!(config, LifeConfig { width: 4, height: 10, step_interval_millis: 0 });
    }
}
