//! Create a properly sized logo for an adaptive app icon.
//!
//! The logo is scaled into a transparent square canvas so it sits inside the
//! launcher safe zone (center 66%), then written as PNG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconpad::cli::{display_percent, init_logging, run, CommonArgs};
use iconpad::{Background, CompositionParameters, CompositionProfile, Operation, ICON_BACKGROUND};

/// Scale a logo into the middle of a transparent adaptive icon canvas.
#[derive(Parser, Debug)]
#[command(name = "icon_logo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source logo image.
    #[arg(short, long, default_value = "assets/notesimages/loankinglogo.jpeg")]
    input: PathBuf,

    /// Destination PNG.
    #[arg(short, long, default_value = "assets/notesimages/loankinglogo_icon.png")]
    output: PathBuf,

    /// Side length of the square canvas in pixels.
    #[arg(long, value_name = "PX")]
    canvas_size: Option<u32>,

    /// Share of the canvas the logo occupies, in percent.
    #[arg(long, value_name = "PERCENT")]
    logo_percent: Option<f64>,

    /// Flatten transparent sources onto the brand purple (#6A1B9A) before
    /// scaling. An explicit --background wins.
    #[arg(long)]
    flatten: bool,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.common.verbose);

    let mut overrides = CompositionProfile::new();
    overrides.canvas_size = args.canvas_size;
    overrides.logo_size_percent = args.logo_percent;
    if args.flatten {
        overrides.background = Some(Background::Solid(ICON_BACKGROUND));
    }

    run(
        Operation::CenteredIcon,
        CompositionParameters::default(),
        &args.common,
        overrides,
        &args.input,
        &args.output,
        |report| {
            println!("[OK] Created icon logo: {}", report.output_path.display());
            println!("  Canvas size: {}", report.output);
            println!(
                "  Logo size: {}x{} (~{}% of canvas, fits in safe zone)",
                report.content.width,
                report.content.height,
                display_percent(report.params.content_fraction)
            );
            println!("  Logo offset: ({}, {})", report.content.x, report.content.y);
            println!();
            println!("Next steps:");
            println!("1. Use '{}' as the adaptive icon foreground", report.output_path.display());
            println!("2. Regenerate launcher icons");
            println!("3. Rebuild your app");
        },
    )
}
