// SPDX-License-Identifier: MIT
//
// okramp — command-line front end for the okramp palette engine.
//
// Wires the two library crates to a shell:
//
//   okramp-color   → hex parsing, sRGB ⇄ OKLCH conversion
//   okramp-palette → ten-step tonal palettes
//
// Every subcommand is one library call plus formatting. Library errors
// surface through anyhow with the offending input in the message; the
// process exits non-zero on any failure.
//
// Logging goes to stderr via tracing-subscriber. `RUST_LOG` wins when set;
// otherwise `-v` selects debug and the default is warn.

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use okramp_color::{Oklch, Rgb, oklch_to_rgb, parse_rgb};
use okramp_palette::{Palette, PaletteSeed, make_palette};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "okramp")]
#[command(about = "OKLCH tonal palettes and sRGB ⇄ OKLCH conversion")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a ten-step palette from a seed color or a hue/saturation pair
    #[command(group(ArgGroup::new("input").required(true).args(["seed", "hue"])))]
    Palette {
        /// Seed color as `#rrggbb` (lowercase)
        seed: Option<String>,

        /// Hue in degrees
        #[arg(long, allow_negative_numbers = true, requires = "saturation")]
        hue: Option<f64>,

        /// Saturation factor applied to the chroma curve (usually 0–1)
        #[arg(long, allow_negative_numbers = true, requires = "hue")]
        saturation: Option<f64>,

        /// Keep out-of-gamut channels in the rendered hex instead of clipping
        #[arg(long)]
        no_clip: bool,
    },

    /// Convert an OKLCH color to sRGB
    ToRgb {
        /// Lightness (0–1)
        #[arg(allow_negative_numbers = true)]
        l: f64,

        /// Chroma
        #[arg(allow_negative_numbers = true)]
        c: f64,

        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        h: f64,

        /// Clamp channels into 0–255
        #[arg(long)]
        clip: bool,
    },

    /// Convert a `#rrggbb` color to OKLCH
    ToOklch {
        /// Color as `#rrggbb` (lowercase)
        hex: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

// ─── Rendering ──────────────────────────────────────────────────────────────

fn render_palette(palette: &Palette, clip: bool, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(palette).context("serializing palette"),
        Format::Text => {
            let mut out = format!(
                "# hue {:.2}  saturation {:.4}  curve {}\n",
                palette.hue(),
                palette.saturation(),
                palette.curve().name()
            );
            for ((step, color), (_, rgb)) in palette.iter().zip(palette.to_rgb(clip)) {
                out.push_str(&format!("{step}  {color}  {rgb}\n"));
            }
            Ok(out)
        }
    }
}

fn render_rgb(rgb: &Rgb, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(rgb).context("serializing rgb"),
        Format::Text => Ok(format!("{rgb}  rgb({}, {}, {})\n", rgb.r, rgb.g, rgb.b)),
    }
}

fn render_oklch(color: &Oklch, format: Format) -> Result<String> {
    match format {
        Format::Json => serde_json::to_string_pretty(color).context("serializing oklch"),
        Format::Text => Ok(format!("{color}\n")),
    }
}

// ─── Dispatch ───────────────────────────────────────────────────────────────

fn seed_for(
    seed: Option<String>,
    hue: Option<f64>,
    saturation: Option<f64>,
) -> Result<PaletteSeed> {
    match (seed, hue, saturation) {
        (Some(hex), None, None) => Ok(PaletteSeed::Hex(hex)),
        (None, Some(hue), Some(saturation)) => Ok(PaletteSeed::HueSat { hue, saturation }),
        _ => anyhow::bail!("give either a seed color or both --hue and --saturation"),
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Command::Palette {
            seed,
            hue,
            saturation,
            no_clip,
        } => {
            let seed = seed_for(seed, hue, saturation)?;
            let palette =
                make_palette(&seed).with_context(|| format!("building palette from {seed:?}"))?;
            tracing::info!(hue = palette.hue(), curve = palette.curve().name(), "palette built");
            render_palette(&palette, !no_clip, cli.format)
        }
        Command::ToRgb { l, c, h, clip } => render_rgb(&oklch_to_rgb(l, c, h, clip), cli.format),
        Command::ToOklch { hex } => {
            let rgb = parse_rgb(&hex).context("reading color")?;
            render_oklch(&rgb.to_oklch(), cli.format)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = run(cli)?;
    print!("{out}");
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
