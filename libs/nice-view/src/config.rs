use crate::common::{CANVAS_SIZE, Direction, Geometry, Palette, RotationConfig, STRIDE_ALIGN};
use crate::error::{CanvasResult, Error};
use log::info;
use serde::Deserialize;

const DEFAULT_DIRECTION: Direction = Direction::Clockwise;
const DEFAULT_EDGE_OFFSET: i32 = 0;

/// Panel settings. Unset fields fall back to the nice!view defaults.
///
/// Direction and edge offset depend on how the panel is mounted and are
/// expected to be tuned against the physical display.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct DisplayConfig {
    pub canvas_size: Option<u32>,
    pub stride_align: Option<u32>,
    pub direction: Option<Direction>,
    pub edge_offset: Option<i32>,
    pub inverted: Option<bool>,
}

/// Validated settings, ready to build a canvas and rotator from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub geometry: Geometry,
    pub rotation: RotationConfig,
    pub palette: Palette,
}

impl DisplayConfig {
    pub fn resolve(&self) -> CanvasResult<ResolvedConfig> {
        let size = self.canvas_size.unwrap_or(CANVAS_SIZE);
        let align = self.stride_align.unwrap_or(STRIDE_ALIGN);
        let direction = self.direction.unwrap_or(DEFAULT_DIRECTION);
        let edge_offset = self.edge_offset.unwrap_or(DEFAULT_EDGE_OFFSET);
        let inverted = self.inverted.unwrap_or(false);

        let geometry = Geometry::new(size, align)?;
        if edge_offset.unsigned_abs() >= size {
            return Err(Error::EdgeOffsetOutOfRange {
                offset: edge_offset,
                size,
            });
        }

        info!(
            "Display: {size}x{size} canvas, stride {stride}, {direction:?} rotation, edge offset {edge_offset}{inv}",
            stride = geometry.stride(),
            inv = if inverted { ", inverted" } else { "" },
        );

        Ok(ResolvedConfig {
            geometry,
            rotation: RotationConfig::new(direction).with_edge_offset(edge_offset),
            palette: Palette { inverted },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MAX_CANVAS_SIZE;

    #[test]
    fn test_defaults_match_nice_view() {
        let resolved = DisplayConfig::default().resolve().unwrap();
        assert_eq!(resolved.geometry, Geometry::NICE_VIEW);
        assert_eq!(resolved.rotation, RotationConfig::default());
        assert_eq!(resolved.palette, Palette::default());
    }

    #[test]
    fn test_parse_from_json() {
        let config: DisplayConfig = serde_json::from_str(
            r#"{"stride_align": 4, "direction": "counter-clockwise", "edge_offset": -1, "inverted": true}"#,
        )
        .unwrap();
        let resolved = config.resolve().unwrap();

        assert_eq!(resolved.geometry.size(), 68);
        assert_eq!(resolved.geometry.stride(), 12);
        assert_eq!(resolved.rotation.direction, Direction::CounterClockwise);
        assert_eq!(resolved.rotation.edge_offset, -1);
        assert!(resolved.palette.inverted);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<DisplayConfig, _> = serde_json::from_str(r#"{"rotation": 90}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_errors() {
        let config = DisplayConfig {
            stride_align: Some(6),
            ..DisplayConfig::default()
        };
        assert_eq!(config.resolve(), Err(Error::UnsupportedAlignment(6)));

        let config = DisplayConfig {
            canvas_size: Some(0),
            ..DisplayConfig::default()
        };
        assert_eq!(config.resolve(), Err(Error::ZeroSize));

        let config = DisplayConfig {
            canvas_size: Some(1 << 20),
            ..DisplayConfig::default()
        };
        assert_eq!(
            config.resolve(),
            Err(Error::CanvasTooLarge {
                size: 1 << 20,
                max: MAX_CANVAS_SIZE
            })
        );

        let config = DisplayConfig {
            stride_align: Some(1 << 31),
            ..DisplayConfig::default()
        };
        assert_eq!(config.resolve(), Err(Error::UnsupportedAlignment(1 << 31)));

        let config = DisplayConfig {
            edge_offset: Some(-68),
            ..DisplayConfig::default()
        };
        assert_eq!(
            config.resolve(),
            Err(Error::EdgeOffsetOutOfRange {
                offset: -68,
                size: 68
            })
        );
    }
}
