//! trueno-raster: rasterize a line or circle from the command line
//!
//! Examples:
//! - `trueno-raster line 0,0 40,-25 --terminal braille`
//! - `trueno-raster circle 0,0 30,40 --output circle.png`
//! - `trueno-raster --points -- 2,1 -7,3` (`--` before a point that starts with `-`)

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use trueno_raster::config::Config;
use trueno_raster::prelude::*;

/// Terminal rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TerminalStyle {
    Ascii,
    Braille,
}

impl From<TerminalStyle> for TerminalMode {
    fn from(style: TerminalStyle) -> Self {
        match style {
            TerminalStyle::Ascii => Self::Ascii,
            TerminalStyle::Braille => Self::Braille,
        }
    }
}

/// trueno-raster: exact integer line and circle rasterization
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize a Bresenham line or midpoint circle between two points", long_about = None)]
struct Cli {
    /// `[line|circle] A B`, points written as `x,y` or `(x,y)`
    #[arg(num_args = 2..=3, required = true, value_name = "ARGS")]
    command: Vec<String>,

    /// Write the surface to a PNG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the surface to the terminal
    #[arg(short, long, value_enum)]
    terminal: Option<TerminalStyle>,

    /// Maximum characters per terminal line
    #[arg(long)]
    columns: Option<u32>,

    /// Print the model-space cells, one per line
    #[arg(short, long)]
    points: bool,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Model y grows upward
    #[arg(long)]
    y_up: bool,

    /// Do not draw the axes
    #[arg(long)]
    no_axes: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// File settings with command-line overrides applied.
    fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                Config::load(path).with_context(|| format!("loading {}", path.display()))?
            }
            None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.y_up {
            config.y_axis = YAxis::Up;
        }
        if self.no_axes {
            config.axes = false;
        }
        Ok(config)
    }

    fn request(&self, default_mode: DrawMode) -> Result<DrawRequest> {
        let (mode, a, b) = match self.command.as_slice() {
            [a, b] => (default_mode, a, b),
            [mode, a, b] => (mode.parse::<DrawMode>()?, a, b),
            _ => bail!("expected [line|circle] A B"),
        };
        let a = parse_point(a).with_context(|| format!("first point '{a}'"))?;
        let b = parse_point(b).with_context(|| format!("second point '{b}'"))?;
        Ok(DrawRequest::new(mode, a, b))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.config()?;
    let request = cli.request(config.mode)?;
    log::info!("{} from {} to {}", request.mode, request.a, request.b);

    if cli.points {
        for p in request.shape()?.points() {
            println!("{} {}", p.x, p.y);
        }
    }

    if cli.output.is_none() && cli.terminal.is_none() && cli.points {
        return Ok(());
    }

    let mut sketch = config.sketch()?;
    sketch.draw(&request)?;

    if let Some(path) = &cli.output {
        PngEncoder::write_to_file(sketch.framebuffer(), path)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if cli.terminal.is_some() || cli.output.is_none() {
        let mut encoder = TerminalEncoder::new()
            .mode(cli.terminal.map_or(TerminalMode::Braille, TerminalMode::from))
            .background(sketch.palette().background);
        if let Some(columns) = cli.columns {
            encoder = encoder.width(columns);
        }
        encoder.print(sketch.framebuffer());
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trueno-raster").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "width: 100\nheight: 70\nmode: circle\n").unwrap();
        let path = path.to_str().unwrap();

        let config = cli(&["0,0", "1,1", "--config", path]).config().unwrap();
        assert_eq!((config.width, config.height), (100, 70));
        assert_eq!(config.y_axis, YAxis::Down);
        assert!(config.axes);

        let config = cli(&["0,0", "1,1", "--config", path, "--width", "50", "--y-up", "--no-axes"])
            .config()
            .unwrap();
        assert_eq!((config.width, config.height), (50, 70));
        assert_eq!(config.y_axis, YAxis::Up);
        assert!(!config.axes);
        assert_eq!(config.mode, DrawMode::Circle);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");
        let args = cli(&["0,0", "1,1", "--config", path.to_str().unwrap()]);
        assert!(args.config().is_err());
    }

    #[test]
    fn test_request_uses_default_mode_for_two_points() {
        let request = cli(&["0,0", "(3, 4)"]).request(DrawMode::Circle).unwrap();
        assert_eq!(request, DrawRequest::new(DrawMode::Circle, Point::ORIGIN, Point::new(3, 4)));
    }

    #[test]
    fn test_request_named_mode_wins() {
        let request = cli(&["line", "0,0", "3,4"]).request(DrawMode::Circle).unwrap();
        assert_eq!(request.mode, DrawMode::Line);
    }

    #[test]
    fn test_request_negative_point_after_separator() {
        let request = cli(&["--", "-2,1", "7,-3"]).request(DrawMode::Line).unwrap();
        assert_eq!(request.a, Point::new(-2, 1));
        assert_eq!(request.b, Point::new(7, -3));
    }

    #[test]
    fn test_request_errors() {
        assert!(cli(&["spline", "0,0", "1,1"]).request(DrawMode::Line).is_err());
        assert!(cli(&["0,0", "1;1"]).request(DrawMode::Line).is_err());
        assert!(Cli::try_parse_from(["trueno-raster", "0,0"]).is_err());
        assert!(Cli::try_parse_from(["trueno-raster", "line", "0,0", "1,1", "2,2"]).is_err());
    }
}
