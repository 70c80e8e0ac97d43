use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use slidemath::{
    ComplexTrack, ControlsConfig, Point, Size, SliderId, TrackKind, TrackMapper,
    track::{audit, create_mapper},
};

#[derive(Parser, Debug)]
#[command(name = "slidemath", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Map a cursor position to its value.
    Value(ValueArgs),
    /// Map a value to its cursor position.
    Cursor(CursorArgs),
    /// Check round-trip and monotonicity at every cursor of a track.
    Sweep(SweepArgs),
    /// Drop-tool circle radius for an anchor and pointer.
    Radius(RadiusArgs),
    /// Rectangle of an asset placed inside a drawn circle.
    Fit(FitArgs),
    /// Print the built-in controls config as JSON.
    Presets,
}

#[derive(Args, Debug)]
struct MapperArgs {
    /// Controls config JSON; selects the mapper with `--slider`.
    #[arg(long, conflicts_with_all = ["kind", "cap_offset", "max_value"])]
    config: Option<PathBuf>,

    /// Slider to take from the config (or the built-in presets).
    #[arg(long, value_enum)]
    slider: Option<SliderChoice>,

    /// Mapper scale.
    #[arg(long, value_enum)]
    kind: Option<KindChoice>,

    /// Handle footprint in pixels.
    #[arg(long)]
    cap_offset: Option<f64>,

    /// Value at the last cursor.
    #[arg(long)]
    max_value: Option<f64>,

    /// Track length in pixels; defaults to the slider's configured track.
    #[arg(long)]
    track_size: Option<f64>,
}

#[derive(Args, Debug)]
struct ValueArgs {
    #[command(flatten)]
    mapper: MapperArgs,

    #[arg(long, allow_hyphen_values = true)]
    cursor: f64,
}

#[derive(Args, Debug)]
struct CursorArgs {
    #[command(flatten)]
    mapper: MapperArgs,

    #[arg(long, allow_hyphen_values = true)]
    value: f64,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    mapper: MapperArgs,

    /// Exit with an error when the sweep finds a violation.
    #[arg(long)]
    strict: bool,
}

#[derive(Args, Debug)]
struct RadiusArgs {
    /// Anchor as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    anchor: Point,

    /// Pointer as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    pointer: Point,

    #[arg(long, default_value_t = 1.0)]
    stroke_width: f64,
}

#[derive(Args, Debug)]
struct FitArgs {
    /// Asset width in pixels.
    #[arg(long)]
    width: f64,

    /// Asset height in pixels.
    #[arg(long)]
    height: f64,

    /// Circle center as `x,y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    center: Point,

    #[arg(long)]
    radius: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SliderChoice {
    Scale,
    Time,
    Effect,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindChoice {
    Linear,
    Complex,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Value(args) => cmd_value(args),
        Command::Cursor(args) => cmd_cursor(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Radius(args) => cmd_radius(args),
        Command::Fit(args) => cmd_fit(args),
        Command::Presets => print_json(&ControlsConfig::default()),
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Point::new(x, y))
}

fn print_json<T: serde::Serialize>(v: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(v)?);
    Ok(())
}

struct Resolved {
    kind: TrackKind,
    mapper: Box<dyn TrackMapper>,
    track_size: f64,
}

/// Resolve the mapper and track size from inline flags, a config file or the presets.
fn resolve_mapper(args: &MapperArgs) -> anyhow::Result<Resolved> {
    if let Some(kind) = args.kind {
        let kind = match kind {
            KindChoice::Linear => TrackKind::Linear,
            KindChoice::Complex => TrackKind::Complex,
        };
        let cap_offset = args
            .cap_offset
            .context("--cap-offset is required with --kind")?;
        let max_value = args.max_value.context("--max-value is required with --kind")?;
        let track_size = args
            .track_size
            .context("--track-size is required with --kind")?;
        return Ok(Resolved {
            kind,
            mapper: create_mapper(kind, cap_offset, max_value)?,
            track_size,
        });
    }

    let cfg = match &args.config {
        Some(path) => ControlsConfig::load(path)?,
        None => ControlsConfig::default(),
    };
    let id = match args.slider.unwrap_or(SliderChoice::Scale) {
        SliderChoice::Scale => SliderId::Scale,
        SliderChoice::Time => SliderId::Time,
        SliderChoice::Effect => SliderId::Effect,
    };
    let slider = cfg.slider(id);
    Ok(Resolved {
        kind: slider.kind,
        mapper: slider.build()?,
        track_size: args.track_size.unwrap_or(slider.track_length),
    })
}

fn cmd_value(args: ValueArgs) -> anyhow::Result<()> {
    let Resolved {
        mapper, track_size, ..
    } = resolve_mapper(&args.mapper)?;
    let value = mapper.track_value(args.cursor, track_size);
    print_json(&serde_json::json!({
        "cursor": args.cursor,
        "track_size": track_size,
        "max_cursor": mapper.max_cursor(track_size),
        "value": value,
    }))
}

fn cmd_cursor(args: CursorArgs) -> anyhow::Result<()> {
    let Resolved {
        mapper, track_size, ..
    } = resolve_mapper(&args.mapper)?;
    let cursor = mapper.track_cursor(args.value, track_size);
    print_json(&serde_json::json!({
        "value": args.value,
        "track_size": track_size,
        "max_cursor": mapper.max_cursor(track_size),
        "cursor": cursor,
    }))
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let Resolved {
        kind,
        mapper,
        track_size,
    } = resolve_mapper(&args.mapper)?;
    let report = audit(mapper.as_ref(), track_size)?;
    let context = match kind {
        TrackKind::Complex => {
            Some(ComplexTrack::new(mapper.cap_offset(), mapper.max_value())?.context(track_size))
        }
        TrackKind::Linear => None,
    };
    print_json(&serde_json::json!({
        "report": &report,
        "context": context,
    }))?;

    if args.strict && !report.is_clean() {
        anyhow::bail!(
            "sweep found {} round-trip misses, {} value regressions, {} cursor regressions",
            report.round_trip_misses.len(),
            report.value_regressions.len(),
            report.cursor_regressions.len()
        );
    }
    Ok(())
}

fn cmd_radius(args: RadiusArgs) -> anyhow::Result<()> {
    let radius = slidemath::drop_radius(args.anchor, args.pointer, args.stroke_width);
    print_json(&serde_json::json!({
        "radius": radius,
        "min_radius": slidemath::min_radius(args.stroke_width),
    }))
}

fn cmd_fit(args: FitArgs) -> anyhow::Result<()> {
    let rect = slidemath::placement::try_fit_rect_in_circle(
        Size::new(args.width, args.height),
        args.center,
        args.radius,
    )?;
    print_json(&rect)
}
