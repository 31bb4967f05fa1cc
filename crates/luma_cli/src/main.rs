mod config;
mod demo;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use luma_core::load_obj;
use luma_renderer::{
    colors, CullMode, LightingMode, Material, RenderConfig, Renderer, Scene, ToneMap,
};

use demo::DemoScene;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<ModeArg> for LightingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::ObservedArea => LightingMode::ObservedArea,
            ModeArg::Radiance => LightingMode::Radiance,
            ModeArg::Brdf => LightingMode::Brdf,
            ModeArg::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ToneMapArg {
    Clamp,
    MaxToOne,
}

impl From<ToneMapArg> for ToneMap {
    fn from(tone_map: ToneMapArg) -> Self {
        match tone_map {
            ToneMapArg::Clamp => ToneMap::Clamp,
            ToneMapArg::MaxToOne => ToneMap::MaxToOne,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "luma", version, about = "Render a scene with the Luma CPU ray tracer")]
struct Args {
    /// JSON scene file. Renders a built-in demo when omitted
    scene: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    /// Built-in demo scene, used when no scene file is given
    demo: DemoScene,

    #[arg(long)]
    /// Image width in pixels
    width: Option<u32>,

    #[arg(long)]
    /// Image height in pixels
    height: Option<u32>,

    #[arg(short, long, value_enum)]
    /// Lighting mode
    mode: Option<ModeArg>,

    #[arg(long)]
    /// Disable shadow rays
    no_shadows: bool,

    #[arg(long, value_enum)]
    tone_map: Option<ToneMapArg>,

    #[arg(long)]
    /// Add an OBJ mesh (white Lambert, no culling) to the scene
    obj: Option<PathBuf>,

    #[arg(short, long, default_value = "luma.png")]
    /// Output image (.png, .bmp or .ppm)
    output: PathBuf,

    #[arg(short, long)]
    /// Log at debug level
    verbose: bool,
}

impl Args {
    /// Command-line flags win over the scene file's `render` block.
    fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(mode) = self.mode {
            config.lighting_mode = mode.into();
        }
        if self.no_shadows {
            config.shadows_enabled = false;
        }
        if let Some(tone_map) = self.tone_map {
            config.tone_map = tone_map.into();
        }
    }
}

fn load_scene(args: &Args) -> Result<(Scene, RenderConfig)> {
    match &args.scene {
        Some(path) => {
            let file = config::load_scene_file(path)?;
            let base_dir = path.parent().unwrap_or(Path::new("."));
            let scene = Scene::from_description(&file.scene, base_dir)
                .with_context(|| format!("Invalid scene in {}", path.display()))?;
            Ok((scene, file.render))
        }
        None => {
            let scene = args
                .demo
                .build()
                .with_context(|| format!("Failed to build {:?} demo", args.demo))?;
            Ok((scene, RenderConfig::default()))
        }
    }
}

fn add_obj(scene: &mut Scene, path: &Path) -> Result<()> {
    let data = load_obj(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let material = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    let mesh = data
        .into_mesh(CullMode::NoCulling, material)
        .with_context(|| format!("Invalid mesh in {}", path.display()))?;

    log::info!(
        "Added {}: {} triangles, {} vertices",
        path.display(),
        mesh.triangle_count(),
        mesh.vertex_count()
    );
    scene.add_mesh(mesh)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!("Starting Luma");

    let (mut scene, mut config) = load_scene(&args)?;
    args.apply_overrides(&mut config);

    if let Some(path) = &args.obj {
        add_obj(&mut scene, path)?;
    }

    let renderer = Renderer::new(config);
    let frame = renderer.render(&mut scene).context("Render failed")?;

    output::save(&frame, &args.output)?;

    Ok(())
}
