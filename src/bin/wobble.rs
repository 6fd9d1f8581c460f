use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wobble", version)]
struct Cli {
    /// Log generator activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print (or write) the filter markup and CSS for the configuration.
    Code(CodeArgs),
    /// Animate an SVG file; files not ending in `.svg` are ignored.
    Animate(AnimateArgs),
    /// Animate one of the bundled preset assets.
    PresetAsset(PresetAssetArgs),
    /// Render a single keyframe of an SVG file as a PNG.
    Frame(FrameArgs),
    /// Print the preset table as JSON.
    Presets,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON file with (some) configuration fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Preset to apply (strength1 .. strength5); keeps the loop flag.
    #[arg(long)]
    preset: Option<String>,

    /// Turbulence base frequency.
    #[arg(long)]
    base_frequency: Option<f64>,

    /// Turbulence octave count.
    #[arg(long)]
    num_octaves: Option<u32>,

    /// Turbulence type (fractalNoise or turbulence).
    #[arg(long)]
    turbulence_type: Option<wobble::TurbulenceType>,

    /// Per-keyframe displacement scales, comma separated.
    #[arg(long, value_delimiter = ',')]
    scales: Option<Vec<f64>>,

    /// Cycle duration in seconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Play the animation once instead of looping.
    #[arg(long)]
    once: bool,

    /// Target width in pixels.
    #[arg(long)]
    img_width: Option<u32>,
}

#[derive(Args, Debug)]
struct CodeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Write the filter markup here instead of stdout.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Write the CSS here instead of stdout.
    #[arg(long)]
    css: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Input SVG file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Directory for the animated file.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct PresetAssetArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Bundled asset path, e.g. img/star.svg.
    #[arg(long)]
    asset: String,

    /// Directory holding the bundled assets.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Directory for the animated file.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Input SVG file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Keyframe index (0-based).
    #[arg(long)]
    keyframe: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Code(args) => cmd_code(args),
        Command::Animate(args) => cmd_animate(args),
        Command::PresetAsset(args) => cmd_preset_asset(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Presets => cmd_presets(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_store(args: &ConfigArgs) -> anyhow::Result<wobble::ConfigStore> {
    let mut store = wobble::ConfigStore::new();

    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let config = wobble::Config::from_json(&text)
            .with_context(|| format!("parse config '{}'", path.display()))?;
        store.replace(config);
    }
    if let Some(id) = &args.preset {
        store.apply_preset_by_name(id)?;
    }

    let mut fields = Vec::new();
    if let Some(v) = args.base_frequency {
        fields.push(wobble::ConfigField::BaseFrequency(v));
    }
    if let Some(v) = args.num_octaves {
        fields.push(wobble::ConfigField::NumOctaves(v));
    }
    if let Some(v) = args.turbulence_type {
        fields.push(wobble::ConfigField::TurbulenceType(v));
    }
    if let Some(scales) = &args.scales {
        anyhow::ensure!(
            scales.len() == wobble::KEYFRAME_COUNT,
            "--scales needs {} values, got {}",
            wobble::KEYFRAME_COUNT,
            scales.len()
        );
        fields.extend(
            scales
                .iter()
                .enumerate()
                .map(|(index, &value)| wobble::ConfigField::Scale { index, value }),
        );
    }
    if let Some(v) = args.duration {
        fields.push(wobble::ConfigField::Duration(v));
    }
    if args.once {
        fields.push(wobble::ConfigField::Infinite(false));
    }
    if let Some(v) = args.img_width {
        fields.push(wobble::ConfigField::ImgWidth(v));
    }
    for field in fields {
        store.set(field)?;
    }

    Ok(store)
}

fn write_or_print(path: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn cmd_code(args: CodeArgs) -> anyhow::Result<()> {
    let store = build_store(&args.config)?;
    let artifacts = wobble::Artifacts::regenerate(&store.snapshot());

    write_or_print(args.html.as_deref(), &artifacts.filter_code)?;
    if args.html.is_none() && args.css.is_none() {
        println!();
    }
    write_or_print(args.css.as_deref(), &artifacts.css_code)?;
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let store = build_store(&args.config)?;

    let name = args
        .in_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("input '{}' has no file name", args.in_path.display()))?;
    if !wobble::has_svg_extension(&name) {
        tracing::debug!(%name, "not an svg file, nothing to do");
        return Ok(());
    }

    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read svg '{}'", args.in_path.display()))?;
    let mut slot = wobble::UploadSlot::default();
    slot.offer(name, text);

    let Some(download) = slot.download(&store.snapshot())? else {
        return Ok(());
    };
    let path = download.write_into(&args.out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_preset_asset(args: PresetAssetArgs) -> anyhow::Result<()> {
    let store = build_store(&args.config)?;
    let source = wobble::DirSource::new(&args.assets);
    let mut control = wobble::ExportControl::new("Download");

    let download = wobble::export_preset(&store, &source, &mut control, &args.asset)?;
    let path = download.write_into(&args.out_dir)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let store = build_store(&args.config)?;
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read svg '{}'", args.in_path.display()))?;
    let svg = wobble::ForeignSvg::parse(&text)?;

    let still = wobble::render_keyframe(&store.snapshot(), &svg, args.keyframe)?;
    still.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(wobble::presets()).context("serialize presets")?;
    println!("{json}");
    Ok(())
}
