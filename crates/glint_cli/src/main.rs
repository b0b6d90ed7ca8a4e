//! glint: render a scene file (or the built-in demo scene) to a PNG.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use glint_core::{demo_scene, load_scene, Scene};
use glint_renderer::{PixelLayout, RenderConfig, Renderer, ShadeConfig, SHADOW_EPSILON};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Bottom view row first, byte-compatible with older renders
    Legacy,
    /// Upright image
    TopDown,
}

impl From<Layout> for PixelLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Legacy => PixelLayout::Legacy,
            Layout::TopDown => PixelLayout::TopDown,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(version)]
#[command(about = "Render spheres and point lights with a Whitted ray tracer")]
struct Cli {
    /// JSON scene description; renders the demo scene when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output image width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output image height in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Pixel buffer layout
    #[arg(long, value_enum, default_value_t = Layout::TopDown)]
    layout: Layout,

    /// Shadow ray self-intersection tolerance
    #[arg(long, default_value_t = SHADOW_EPSILON)]
    shadow_epsilon: f64,

    /// Output PNG path
    #[arg(short, long, default_value = "glint.png")]
    output: PathBuf,

    /// Set logging level (RUST_LOG still applies per module)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            layout: self.layout.into(),
            shade: ShadeConfig {
                shadow_epsilon: self.shadow_epsilon,
            },
        }
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.scene {
            Some(path) => load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display())),
            None => {
                log::info!("No scene given, rendering the demo scene");
                demo_scene()
                    .into_scene()
                    .context("Failed to build the demo scene")
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .init();

    let scene = cli.load_scene()?;
    log::info!(
        "Scene: {} objects, {} lights",
        scene.object_count(),
        scene.light_count()
    );

    log::info!("Rendering {}x{}...", cli.width, cli.height);
    let start = Instant::now();
    let buffer = Renderer::new(cli.render_config())
        .render(&scene, cli.width, cli.height)
        .context("Render failed")?;
    log::info!("Rendered in {:?}", start.elapsed());

    buffer
        .to_image()
        .save(&cli.output)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;
    log::info!("Saved to {}", cli.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["glint"]).unwrap();
        assert_eq!(cli.scene, None);
        assert_eq!((cli.width, cli.height), (640, 480));
        assert_eq!(cli.output, PathBuf::from("glint.png"));

        let config = cli.render_config();
        assert_eq!(config.layout, PixelLayout::TopDown);
        assert_eq!(config.shade, ShadeConfig::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "glint",
            "--scene",
            "scenes/demo.json",
            "--width",
            "320",
            "--height",
            "200",
            "--layout",
            "legacy",
            "--shadow-epsilon",
            "0.01",
            "-o",
            "out.png",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.scene, Some(PathBuf::from("scenes/demo.json")));
        assert_eq!((cli.width, cli.height), (320, 200));
        assert_eq!(cli.log_level, LogLevel::Debug);

        let config = cli.render_config();
        assert_eq!(config.layout, PixelLayout::Legacy);
        assert_eq!(config.shade.shadow_epsilon, 0.01);
    }

    #[test]
    fn test_demo_scene_without_file() {
        let cli = Cli::try_parse_from(["glint"]).unwrap();
        let scene = cli.load_scene().unwrap();
        assert_eq!(scene.object_count(), 3);
    }

    #[test]
    fn test_missing_scene_file() {
        let cli = Cli::try_parse_from(["glint", "--scene", "/nonexistent/glint/scene.json"]).unwrap();
        let err = cli.load_scene().unwrap_err();
        assert!(err.to_string().contains("Failed to load scene"));
    }
}
