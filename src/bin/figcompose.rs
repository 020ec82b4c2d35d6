use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;

#[derive(Parser, Debug)]
#[command(name = "figcompose", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose images into a labeled grid figure.
    Compose(ComposeArgs),
    /// Convert a single image (e.g. TIFF) to PNG.
    Convert(ConvertArgs),
    /// Print which font captions would be drawn with.
    Fonts(FontArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Input images, in figure order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output path (.jpg for opaque backgrounds, .png for transparent).
    #[arg(long)]
    out: PathBuf,

    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum images per row.
    #[arg(long)]
    max_columns: Option<u32>,

    /// Common image height in pixels.
    #[arg(long)]
    base_height: Option<u32>,

    /// Outer margin and spacing in pixels.
    #[arg(long)]
    padding: Option<u32>,

    /// Caption font size in pixels.
    #[arg(long)]
    font_size: Option<u32>,

    /// Palette name (white, light_gray, cream, light_blue, light_green, transparent) or #RRGGBB.
    #[arg(long)]
    background: Option<String>,

    /// number, letter, roman, parenthesis, or none to disable captions.
    #[arg(long)]
    label_style: Option<String>,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = 95)]
    quality: u8,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    #[command(flatten)]
    fonts: FontArgs,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(clap::Args, Debug)]
struct FontArgs {
    /// Caption font file to try first (repeatable, in priority order).
    #[arg(long = "font")]
    fonts: Vec<PathBuf>,

    /// Do not fall back to the system font database.
    #[arg(long)]
    no_system_fonts: bool,
}

impl FontArgs {
    fn source(&self) -> figcompose::FontSource {
        figcompose::FontSource {
            candidates: self.fonts.clone(),
            default_candidates: true,
            system_fonts: !self.no_system_fonts,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Fonts(args) => cmd_fonts(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(args: &ComposeArgs) -> anyhow::Result<figcompose::CompositionConfig> {
    let mut cfg = match &args.config {
        Some(path) => figcompose::CompositionConfig::from_json_path(path)?,
        None => figcompose::CompositionConfig::default(),
    };

    if let Some(v) = args.max_columns {
        cfg.max_columns = v;
    }
    if let Some(v) = args.base_height {
        cfg.base_height = v;
    }
    if let Some(v) = args.padding {
        cfg.padding = v;
    }
    if let Some(v) = args.font_size {
        cfg.font_size = v;
    }
    if let Some(bg) = &args.background {
        cfg.background = bg.parse()?;
    }
    if let Some(style) = &args.label_style {
        if style.trim().eq_ignore_ascii_case("none") {
            cfg.show_labels = false;
        } else {
            let Ok(parsed) = style.parse::<figcompose::LabelStyle>();
            cfg.label_style = parsed;
            cfg.show_labels = true;
        }
    }

    cfg.validate()?;
    Ok(cfg)
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let cfg = build_config(&args)?;

    let images = args
        .images
        .iter()
        .map(|p| figcompose::open_image(p))
        .collect::<Result<Vec<_>, _>>()?;

    let composer = figcompose::FigureComposer::new(figcompose::ComposerOpts {
        threads: args.threads,
        fonts: args.fonts.source(),
        ..Default::default()
    })?;
    let figure = composer.compose(images, &cfg)?;

    let expected = figure.format().extension();
    let actual = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let extension_matches = match actual.as_deref() {
        Some("jpeg") => expected == "jpg",
        Some(ext) => ext == expected,
        None => false,
    };
    if !extension_matches {
        tracing::warn!(
            out = %args.out.display(),
            format = expected,
            "output extension does not match the encoded format"
        );
    }

    let opts = figcompose::EncodeOpts {
        jpeg_quality: args.quality,
        ..Default::default()
    };
    figure.write_to(&args.out, &opts)?;

    eprintln!(
        "wrote {} ({}x{}, {} images, {} labels)",
        args.out.display(),
        figure.width(),
        figure.height(),
        figure.placements().len(),
        figure.labels().len()
    );
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let png = figcompose::convert_to_png(&bytes)?;

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_fonts(args: FontArgs) -> anyhow::Result<()> {
    let provider = figcompose::FontProvider::new(args.source());
    let Some(font) = provider.resolve() else {
        println!("no font resolved; captions would be skipped");
        return Ok(());
    };

    println!("family:  {}", font.family());
    println!("faces:   {}", font.face_count());
    match font.origin() {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("read font '{}'", path.display()))?;
            println!("source:  {}", path.display());
            println!("sha256:  {}", sha256_hex(&bytes));
        }
        None => println!("source:  (in-memory)"),
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
