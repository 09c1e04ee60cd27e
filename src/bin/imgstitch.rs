use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "imgstitch", version)]
struct Cli {
    /// Log pipeline steps to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Stitch two images and write the result.
    Stitch(StitchArgs),
    /// Print the computed layout as JSON without touching pixels.
    Plan(PlanArgs),
}

#[derive(Parser, Debug)]
struct StitchArgs {
    /// First image (left, or top).
    #[arg(long)]
    first: PathBuf,

    /// Second image (right, or bottom).
    #[arg(long)]
    second: PathBuf,

    /// Output path. Defaults to `stitched_<unix-seconds>.<ext>` in the working directory.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Options JSON; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Concatenation axis.
    #[arg(long, value_enum)]
    direction: Option<DirectionChoice>,

    /// Cross-axis alignment.
    #[arg(long = "align", value_enum)]
    alignment: Option<AlignChoice>,

    /// Output format. Inferred from `--out` when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// JPEG quality (0-100).
    #[arg(long)]
    quality: Option<u8>,

    /// Background colour as RRGGBB or RRGGBBAA hex.
    #[arg(long, value_parser = parse_hex_rgba)]
    background: Option<[u8; 4]>,

    /// Swap the two inputs.
    #[arg(long)]
    swap: bool,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// First image (left, or top).
    #[arg(long)]
    first: PathBuf,

    /// Second image (right, or bottom).
    #[arg(long)]
    second: PathBuf,

    /// Concatenation axis.
    #[arg(long, value_enum, default_value_t = DirectionChoice::Horizontal)]
    direction: DirectionChoice,

    /// Cross-axis alignment.
    #[arg(long = "align", value_enum, default_value_t = AlignChoice::Start)]
    alignment: AlignChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionChoice {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlignChoice {
    Start,
    Center,
    End,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    #[value(alias = "jpg")]
    Jpeg,
    Bmp,
}

impl From<DirectionChoice> for imgstitch::LayoutDirection {
    fn from(value: DirectionChoice) -> Self {
        match value {
            DirectionChoice::Horizontal => imgstitch::LayoutDirection::Horizontal,
            DirectionChoice::Vertical => imgstitch::LayoutDirection::Vertical,
        }
    }
}

impl From<AlignChoice> for imgstitch::AlignmentMode {
    fn from(value: AlignChoice) -> Self {
        match value {
            AlignChoice::Start => imgstitch::AlignmentMode::Start,
            AlignChoice::Center => imgstitch::AlignmentMode::Center,
            AlignChoice::End => imgstitch::AlignmentMode::End,
        }
    }
}

impl From<FormatChoice> for imgstitch::OutputFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Png => imgstitch::OutputFormat::Png,
            FormatChoice::Jpeg => imgstitch::OutputFormat::Jpeg,
            FormatChoice::Bmp => imgstitch::OutputFormat::Bmp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Stitch(args) => cmd_stitch(args),
        Command::Plan(args) => cmd_plan(args),
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

fn resolve_opts(args: &StitchArgs) -> anyhow::Result<imgstitch::StitchOpts> {
    let mut opts = match &args.config {
        Some(path) => imgstitch::StitchOpts::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => imgstitch::StitchOpts::default(),
    };

    if let Some(d) = args.direction {
        opts.direction = d.into();
    }
    if let Some(a) = args.alignment {
        opts.alignment = a.into();
    }
    if let Some(q) = args.quality {
        opts.jpeg_quality = q;
    }
    if let Some(bg) = args.background {
        opts.background = bg;
    }
    opts.format = match (args.format, &args.out) {
        (Some(f), _) => f.into(),
        (None, Some(out)) if out.extension().is_some() => {
            imgstitch::OutputFormat::from_path(out)?
        }
        (None, _) => opts.format,
    };
    Ok(opts)
}

fn cmd_stitch(args: StitchArgs) -> anyhow::Result<()> {
    let opts = resolve_opts(&args)?;

    let (first_path, second_path) = if args.swap {
        (&args.second, &args.first)
    } else {
        (&args.first, &args.second)
    };
    let first = imgstitch::load_image(first_path)?;
    let second = imgstitch::load_image(second_path)?;

    let stitched = imgstitch::stitch(&first, &second, &opts)?;

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| imgstitch::default_output_name(opts.format));
    imgstitch::write_encoded(&out, &stitched.encoded, !args.no_overwrite)?;

    eprintln!(
        "wrote {} ({}x{})",
        out.display(),
        stitched.layout.canvas.width,
        stitched.layout.canvas.height
    );
    Ok(())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let layout = plan_from_paths(
        &args.first,
        &args.second,
        args.direction.into(),
        args.alignment.into(),
    )?;
    let json = serde_json::to_string_pretty(&layout).context("serialize layout")?;
    println!("{json}");
    Ok(())
}

fn plan_from_paths(
    first: &Path,
    second: &Path,
    direction: imgstitch::LayoutDirection,
    alignment: imgstitch::AlignmentMode,
) -> anyhow::Result<imgstitch::StitchLayout> {
    let a = imgstitch::probe_size(first)?;
    let b = imgstitch::probe_size(second)?;
    Ok(imgstitch::plan_layout(a, b, direction, alignment)?)
}

fn parse_hex_rgba(s: &str) -> Result<[u8; 4], String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return Err(format!("expected RRGGBB or RRGGBBAA, got '{s}'"));
    }
    let mut out = [255u8; 4];
    for (i, slot) in out.iter_mut().enumerate().take(hex.len() / 2) {
        *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|e| format!("invalid hex colour '{s}': {e}"))?;
    }
    Ok(out)
}
