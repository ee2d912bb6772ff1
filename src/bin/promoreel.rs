use std::{
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "promoreel", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    List,
    /// Print a composition's JSON config.
    Config(Source),
    /// Print scene and transition windows.
    Timeline(Source),
    /// Print the render tree of one frame as JSON.
    Frame(FrameArgs),
    /// Print render trees for a frame range, one JSON object per line.
    Frames(FramesArgs),
}

/// Where the composition comes from.
#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct Source {
    /// Registered composition id.
    #[arg(long)]
    id: Option<String>,

    /// Composition config JSON file.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Global frame index (0-based); past-the-end frames clamp to the last frame.
    #[arg(long)]
    frame: u64,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    source: Source,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// End frame (exclusive); defaults to the composition length.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for --parallel.
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per parallel batch.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Config(source) => cmd_config(&source),
        Command::Timeline(source) => cmd_timeline(&source),
        Command::Frame(args) => cmd_frame(&args),
        Command::Frames(args) => cmd_frames(&args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(source: &Source) -> anyhow::Result<promoreel::CompositionConfig> {
    let root = promoreel::Root::with_defaults();
    if let Some(path) = &source.in_path {
        return Ok(promoreel::CompositionConfig::from_path(path)?);
    }
    let id = source.id.as_deref().unwrap_or(promoreel::PROMO_ID);
    root.get(id)
        .cloned()
        .with_context(|| format!("unknown composition '{id}'"))
}

fn load(source: &Source) -> anyhow::Result<promoreel::Composition> {
    let config = load_config(source)?;
    let comp = config
        .build(&promoreel::SceneRegistry::with_builtin())
        .with_context(|| format!("build composition '{}'", config.id))?;
    tracing::info!(
        id = comp.id(),
        frames = comp.duration(),
        fps = comp.fps().as_f64(),
        "loaded composition"
    );
    Ok(comp)
}

fn cmd_list() -> anyhow::Result<()> {
    let root = promoreel::Root::with_defaults();
    for id in root.ids() {
        let comp = root.build(id).with_context(|| format!("build composition '{id}'"))?;
        println!(
            "{id}\t{} frames\t{}/{} fps\t{}x{}",
            comp.duration(),
            comp.fps().num,
            comp.fps().den,
            comp.width(),
            comp.height()
        );
    }
    Ok(())
}

fn cmd_config(source: &Source) -> anyhow::Result<()> {
    let config = load_config(source)?;
    println!("{}", config.to_json_pretty()?);
    Ok(())
}

fn cmd_timeline(source: &Source) -> anyhow::Result<()> {
    let comp = load(source)?;
    let timeline = comp.timeline();
    for (i, entry) in timeline.scenes().iter().enumerate() {
        println!(
            "scene {i}\t{}\t{}..{}",
            entry.scene.name(),
            entry.range.start.0,
            entry.range.end.0
        );
    }
    for w in timeline.transition_windows() {
        println!(
            "transition {}->{}\t{}\t{}..{}",
            w.from,
            w.from + 1,
            serde_json::to_string(&w.presentation)?,
            w.range.start.0,
            w.range.end.0
        );
    }
    println!("total\t{} frames", timeline.total_frames());
    Ok(())
}

fn cmd_frame(args: &FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let frame = comp.render_frame(promoreel::FrameIndex(args.frame));
    if frame.was_clamped() {
        tracing::warn!(
            requested = args.frame,
            frame = frame.frame.0,
            "frame past the end, clamped"
        );
    }
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: &FramesArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let end = args.end.unwrap_or(comp.duration());
    let range =
        promoreel::FrameRange::new(promoreel::FrameIndex(args.start), promoreel::FrameIndex(end))?;
    let threading = promoreel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let frames = comp.render_frames(range, &threading)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for frame in &frames {
        serde_json::to_writer(&mut out, frame).context("serialize frame")?;
        out.write_all(b"\n").context("write stdout")?;
    }
    out.flush().context("flush stdout")?;
    tracing::info!(frames = frames.len(), "frames written");
    Ok(())
}
