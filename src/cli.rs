use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::{Config, Mode, load_config};
use crate::document::{Document, Point};
use crate::layout::{SearchDirection, auto_arrange, default_node_position, find_non_overlapping_position};

#[derive(Parser, Debug)]
#[command(name = "fcv", version, about = "Canvas placement for node-graph documents")]
pub struct Args {
    /// Input document (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Operation to run on the document
    #[arg(short = 'm', long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    /// Candidate search direction for place mode
    #[arg(short = 'd', long = "direction", value_enum)]
    pub direction: Option<DirectionArg>,

    /// Position "x,y" to search from in place mode
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// Viewport center "x,y" used when placing into an empty document
    #[arg(long = "viewportCenter")]
    pub viewport_center: Option<String>,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short = 'p', long = "pretty")]
    pub pretty: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    Arrange,
    Place,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Arrange => Mode::Arrange,
            ModeArg::Place => Mode::Place,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum DirectionArg {
    Right,
    Bottom,
    Diagonal,
}

impl From<DirectionArg> for SearchDirection {
    fn from(direction: DirectionArg) -> Self {
        match direction {
            DirectionArg::Right => SearchDirection::Right,
            DirectionArg::Bottom => SearchDirection::Bottom,
            DirectionArg::Diagonal => SearchDirection::Diagonal,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let document = Document::from_json(&input)?;
    for edge in document.dangling_edges() {
        log::warn!(
            "edge {} -> {} references a missing node",
            edge.source,
            edge.target
        );
    }

    let mode = resolved_mode(&args, &config);
    let pretty = args.pretty || config.pretty;

    match mode {
        Mode::Arrange => {
            let nodes = auto_arrange(&document.nodes, &document.edges);
            log::info!("arranged {} nodes", nodes.len());
            let output = Document {
                nodes,
                edges: document.edges,
            };
            write_json(&output, args.output.as_deref(), pretty)
        }
        Mode::Place => {
            let direction = args
                .direction
                .map(SearchDirection::from)
                .or(config.direction)
                .unwrap_or_default();
            let viewport_center = match args.viewport_center.as_deref() {
                Some(raw) => Some(parse_point(raw)?),
                None => config.viewport_center,
            };
            let position = match args.target.as_deref() {
                Some(raw) => {
                    let target = parse_point(raw)?;
                    find_non_overlapping_position(target, &document.nodes, direction)
                }
                None => default_node_position(&document.nodes, viewport_center),
            };
            write_json(&position, args.output.as_deref(), pretty)
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_json<T: Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    match path {
        Some(path) => std::fs::write(path, json)?,
        None => io::stdout().write_all(json.as_bytes())?,
    }
    Ok(())
}

fn parse_point(raw: &str) -> Result<Point> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| anyhow::anyhow!("expected \"x,y\", got {raw:?}"))?;
    Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
}

fn resolved_mode(args: &Args, config: &Config) -> Mode {
    args.mode.map(Mode::from).or(config.mode).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points_with_spaces() {
        let point = parse_point("120, -40.5").unwrap();
        assert_eq!(point, Point::new(120.0, -40.5));
    }

    #[test]
    fn rejects_points_without_a_comma() {
        assert!(parse_point("120 40").is_err());
        assert!(parse_point("").is_err());
    }

    #[test]
    fn rejects_non_numeric_coordinates() {
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_flags_override_config_mode() {
        let args = Args::parse_from(["fcv", "--mode", "place"]);
        let config = Config {
            mode: Some(Mode::Arrange),
            ..Config::default()
        };
        assert_eq!(resolved_mode(&args, &config), Mode::Place);

        let args = Args::parse_from(["fcv"]);
        assert_eq!(resolved_mode(&args, &config), Mode::Arrange);
        assert_eq!(resolved_mode(&args, &Config::default()), Mode::Arrange);
    }
}
