use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use spriteforge::{
    AnimationState, CharacterType, EditorSession, FrameRenderer, Playback, Rng64, SpriteConfig,
    SpriteDocument, SpriteGenerator,
};

#[derive(Parser, Debug)]
#[command(name = "spriteforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll a character and save its sprite document as JSON.
    Generate(GenerateArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a sprite sheet PNG.
    Sheet(SheetArgs),
    /// Export trimmed frames as a ZIP of PNGs.
    Export(ExportArgs),
    /// Simulate preview playback and print every frame shown.
    Play(PlayArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Sprite config JSON; defaults to a 32x32 sprite at scale 10.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the character roll; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Character type.
    #[arg(long = "type", default_value = "warrior")]
    character_type: CharacterType,

    /// Palette name, e.g. "knight" or "ruby".
    #[arg(long)]
    theme: Option<String>,

    /// Output sprite document path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input sprite document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation state.
    #[arg(long, default_value = "idle")]
    state: AnimationState,

    /// Frame index within the state (0-based).
    #[arg(long, default_value_t = 0)]
    frame: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SheetArgs {
    /// Input sprite document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Only this state's frames; every frame when omitted.
    #[arg(long)]
    state: Option<AnimationState>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input sprite document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// States to export (repeatable); every configured state when omitted.
    #[arg(long)]
    state: Vec<AnimationState>,

    /// Output ZIP path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Input sprite document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Animation state.
    #[arg(long, default_value = "idle")]
    state: AnimationState,

    /// Simulated duration in milliseconds.
    #[arg(long, default_value_t = 1000)]
    duration_ms: u64,

    /// Simulated refresh rate.
    #[arg(long, default_value_t = 60)]
    hz: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sheet(args) => cmd_sheet(args),
        Command::Export(args) => cmd_export(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<SpriteDocument> {
    SpriteDocument::load(path).with_context(|| format!("load sprite '{}'", path.display()))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SpriteConfig::from_path(path)?,
        None => SpriteConfig::default(),
    };
    let generator = SpriteGenerator::new(config)?;
    let rng = match args.seed {
        Some(seed) => Rng64::new(seed),
        None => Rng64::from_entropy(),
    };
    let sprite = generator.generate_random(rng, Some(args.character_type), args.theme.as_deref());

    ensure_parent(&args.out)?;
    SpriteDocument::new(sprite).save(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let sprite = &doc.sprite;
    let pos = sprite.position_of(args.state, args.frame).with_context(|| {
        format!(
            "sprite has no frame {} for state '{}'",
            args.frame, args.state
        )
    })?;

    let renderer = FrameRenderer::new(&sprite.config)?;
    let bitmap = renderer.render(&sprite.frames[pos]);

    ensure_parent(&args.out)?;
    spriteforge::encode::write_png(&bitmap, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sheet(args: SheetArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let sprite = &doc.sprite;
    let renderer = FrameRenderer::new(&sprite.config)?;
    let sheet = match args.state {
        Some(state) => renderer.render_sheet(sprite.frames_of(state))?,
        None => renderer.render_sheet(&sprite.frames)?,
    };

    ensure_parent(&args.out)?;
    spriteforge::encode::write_png(&sheet, &args.out)?;
    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        sheet.width,
        sheet.height
    );
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let sprite = &doc.sprite;
    let states: Vec<AnimationState> = if args.state.is_empty() {
        sprite.config.animations.iter().map(|a| a.state).collect()
    } else {
        args.state
    };

    let renderer = FrameRenderer::new(&sprite.config)?;
    let bytes = spriteforge::encode::export_animations(&renderer, sprite, &states)?;

    ensure_parent(&args.out)?;
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write zip '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let doc = load(&args.in_path)?;
    let mut session = EditorSession::from_sprite(doc.sprite)?;
    session.select_state(args.state)?;

    let step = Duration::from_secs(1) / args.hz.max(1);
    let end = Duration::from_millis(args.duration_ms);
    let mut playback = Playback::new();
    let mut now = Duration::ZERO;
    playback.start(now);
    println!("{}", session.frame_info());
    while now < end {
        now += step;
        if playback.tick(&mut session, now) {
            println!("{}", session.frame_info());
        }
    }
    playback.stop();
    Ok(())
}
