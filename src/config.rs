use std::path::Path;

use serde::Deserialize;

use crate::document::Point;
use crate::layout::SearchDirection;

/// Operation the CLI runs on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Arrange,
    Place,
}

/// Defaults resolved from an optional config file. Command-line flags win
/// over anything set here.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub mode: Option<Mode>,
    pub direction: Option<SearchDirection>,
    pub viewport_center: Option<Point>,
    pub pretty: bool,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    mode: Option<ModeName>,
    direction: Option<DirectionName>,
    viewport_center: Option<PointFile>,
    pretty: Option<bool>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum ModeName {
    Arrange,
    Place,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum DirectionName {
    Right,
    Bottom,
    Diagonal,
}

#[derive(Debug, Deserialize, Clone, Copy)]
struct PointFile {
    x: f32,
    y: f32,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    // json5 keeps hand-written files forgiving: comments and trailing
    // commas parse fine.
    let parsed: ConfigFile = json5::from_str(&contents)?;

    if let Some(mode) = parsed.mode {
        config.mode = Some(match mode {
            ModeName::Arrange => Mode::Arrange,
            ModeName::Place => Mode::Place,
        });
    }
    if let Some(direction) = parsed.direction {
        config.direction = Some(match direction {
            DirectionName::Right => SearchDirection::Right,
            DirectionName::Bottom => SearchDirection::Bottom,
            DirectionName::Diagonal => SearchDirection::Diagonal,
        });
    }
    if let Some(center) = parsed.viewport_center {
        config.viewport_center = Some(Point::new(center.x, center.y));
    }
    if let Some(pretty) = parsed.pretty {
        config.pretty = pretty;
    }

    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
