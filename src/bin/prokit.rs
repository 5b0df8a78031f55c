use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prokit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the default design configuration as JSON.
    Default,
    /// Render a design configuration to SVG (and optionally PNG).
    Render(RenderArgs),
    /// Ask a generative model for a themed design.
    Synthesize(SynthesizeArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input design configuration JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output SVG path.
    #[arg(long)]
    out: PathBuf,

    /// Also rasterize to this PNG path.
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG width in pixels.
    #[arg(long, default_value_t = 974)]
    width: u32,

    /// Also dump the scene graph as JSON.
    #[arg(long)]
    scene_json: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SynthesizeArgs {
    /// Free-text theme, e.g. "Neon Tokyo Night".
    #[arg(long)]
    theme: String,

    /// Base configuration to merge into. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the merged configuration here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Override the model id.
    #[arg(long)]
    model: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Default => cmd_default(),
        Command::Render(args) => cmd_render(args),
        Command::Synthesize(args) => cmd_synthesize(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<prokit::DesignConfiguration> {
    match path {
        Some(p) => prokit::DesignConfiguration::from_path(p)
            .with_context(|| format!("load design configuration '{}'", p.display())),
        None => Ok(prokit::DesignConfiguration::default()),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_default() -> anyhow::Result<()> {
    println!("{}", prokit::DesignConfiguration::default().to_json_pretty()?);
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let scene = prokit::render(&config);
    let svg = prokit::to_svg(&scene);
    write_output(&args.out, svg.as_bytes())?;

    if let Some(png_path) = &args.png {
        let png = prokit::rasterize_png(
            &svg,
            prokit::RasterOpts {
                width: args.width,
                background: None,
            },
        )
        .context("rasterize scene")?;
        write_output(png_path, &png)?;
    }

    if let Some(json_path) = &args.scene_json {
        let json = serde_json::to_vec_pretty(&scene).context("encode scene json")?;
        write_output(json_path, &json)?;
    }

    eprintln!("fingerprint {}", scene.fingerprint());
    Ok(())
}

fn cmd_synthesize(args: SynthesizeArgs) -> anyhow::Result<()> {
    let base = load_config(args.config.as_deref())?;

    let mut gemini = prokit::GeminiConfig::from_env();
    if let Some(model) = args.model {
        gemini.model = model;
    }
    if gemini.api_key.is_empty() {
        anyhow::bail!("no API key: set GEMINI_API_KEY (or API_KEY)");
    }
    let provider = prokit::GeminiProvider::new(gemini)?;
    let synth = prokit::Synthesizer::new(Arc::new(provider));

    let runtime = tokio::runtime::Runtime::new().context("start async runtime")?;
    let partial = runtime.block_on(synth.synthesize(&args.theme));
    if partial.is_empty() {
        eprintln!("synthesis produced no changes; keeping the base design");
    }

    let merged = base.merge(&partial);
    let json = merged.to_json_pretty()?;
    match &args.out {
        Some(path) => write_output(path, json.as_bytes())?,
        None => println!("{json}"),
    }
    Ok(())
}
