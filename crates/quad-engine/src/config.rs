//! Board configuration.
//!
//! Every field has a default matching the standard 16x16 board, so an empty
//! configuration file describes the standard game.

use crate::geometry::BoardGeometry;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted board side, in cells.
pub const MAX_BOARD_SIZE: i32 = 256;

/// Largest accepted cell side, in pixels. Keeps wall intersection arithmetic
/// inside `i64`.
pub const MAX_CELL_SIZE: i32 = 4096;

/// Errors in a board configuration that make it impossible to build a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board size must be positive, got {0}")]
    InvalidSize(i32),

    #[error("board size {0} exceeds the maximum of {max}", max = MAX_BOARD_SIZE)]
    SizeTooLarge(i32),

    #[error("margin {margin} leaves no playable area on a board of size {size}")]
    InvalidMargin { margin: i32, size: i32 },

    #[error("fortress size {fortress} does not fit a board of size {size}")]
    InvalidFortress { fortress: i32, size: i32 },

    #[error("cell size must be between 1 and {max}, got {0}", max = MAX_CELL_SIZE)]
    InvalidCellSize(i32),
}

/// A wall segment given by the grid corners it joins.
///
/// Wall endpoints live on cell corners, so valid coordinates run from `0` to
/// `size` inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSpec {
    pub start: [i32; 2],
    pub end: [i32; 2],
}

impl WallSpec {
    pub const fn new(start: [i32; 2], end: [i32; 2]) -> Self {
        WallSpec { start, end }
    }
}

/// Dimensions, pixel metrics and walls of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length of the square grid, in cells.
    pub size: i32,
    /// Thickness of the inactive border, in cells.
    pub margin: i32,
    /// Side length of each corner fortress, in cells.
    pub fortress_size: i32,
    /// Side length of a cell, in pixels.
    pub cell_size: i32,
    /// Screen offset of the board's top-left corner, in pixels.
    pub padding: [i32; 2],
    /// Wall segments. `None` selects the four standard fortress walls.
    pub walls: Option<Vec<WallSpec>>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: 16,
            margin: 2,
            fortress_size: 4,
            cell_size: 32,
            padding: [20, 80],
            walls: None,
        }
    }
}

impl BoardConfig {
    /// Checks that the dimensions describe a usable board.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::SizeTooLarge(self.size));
        }
        if self.margin < 0 || self.margin > (self.size - 1) / 2 {
            return Err(ConfigError::InvalidMargin {
                margin: self.margin,
                size: self.size,
            });
        }
        if self.fortress_size < 0 || self.fortress_size > self.size {
            return Err(ConfigError::InvalidFortress {
                fortress: self.fortress_size,
                size: self.size,
            });
        }
        if self.cell_size <= 0 || self.cell_size > MAX_CELL_SIZE {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Returns the configured walls, or the standard ones if none are set.
    pub fn wall_specs(&self) -> Vec<WallSpec> {
        self.walls
            .clone()
            .unwrap_or_else(|| Self::standard_walls(self.size))
    }

    /// The four standard walls: each one closes one side of a corner
    /// fortress, turning around the board.
    pub fn standard_walls(size: i32) -> Vec<WallSpec> {
        vec![
            WallSpec::new([0, 4], [4, 4]),
            WallSpec::new([4, size - 4], [4, size]),
            WallSpec::new([size - 4, size - 4], [size, size - 4]),
            WallSpec::new([size - 4, 0], [size - 4, 4]),
        ]
    }

    /// Pixel metrics derived from this configuration.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(self.cell_size, self.padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: BoardConfig = toml::from_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn parse_custom_walls() {
        let config: BoardConfig = toml::from_str(
            r#"
size = 12
margin = 1

[[walls]]
start = [0, 3]
end = [3, 3]
"#,
        )
        .unwrap();
        assert_eq!(config.size, 12);
        assert_eq!(config.margin, 1);
        assert_eq!(config.fortress_size, 4);
        assert_eq!(config.wall_specs(), vec![WallSpec::new([0, 3], [3, 3])]);
    }

    #[test]
    fn explicit_empty_wall_list_means_no_walls() {
        let config: BoardConfig = toml::from_str("walls = []").unwrap();
        assert!(config.wall_specs().is_empty());
    }

    #[test]
    fn standard_walls_for_16() {
        let walls = BoardConfig::default().wall_specs();
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[1], WallSpec::new([4, 12], [4, 16]));
        assert_eq!(walls[2], WallSpec::new([12, 12], [16, 12]));
        assert_eq!(walls[3], WallSpec::new([12, 0], [12, 4]));
    }

    #[test]
    fn invalid_dimensions() {
        let mut config = BoardConfig {
            size: 0,
            ..BoardConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSize(0)));

        config.size = 4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));

        config.size = 16;
        config.fortress_size = 17;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFortress { .. })
        ));

        config.fortress_size = 4;
        config.cell_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidCellSize(0)));
    }

    #[test]
    fn margin_bounds() {
        let mut config = BoardConfig {
            margin: 7,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_ok());
        config.margin = 8;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));
        config.size = 15;
        config.margin = 7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));
    }

    #[test]
    fn huge_values_are_rejected_without_overflow() {
        let config: BoardConfig = toml::from_str("margin = 2000000000").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));

        let config: BoardConfig = toml::from_str("size = 50000").unwrap();
        assert_eq!(config.validate(), Err(ConfigError::SizeTooLarge(50000)));

        let config: BoardConfig = toml::from_str("cell_size = 2000000000").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidCellSize(2_000_000_000))
        );

        let config = BoardConfig {
            size: MAX_BOARD_SIZE,
            ..BoardConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
