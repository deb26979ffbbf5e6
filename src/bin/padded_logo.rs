//! Create a padded version of a logo for an app icon.
//!
//! A uniform border keeps the logo inside the launcher safe zone; transparency
//! is flattened and the result is written as JPEG.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use iconpad::cli::{init_logging, run, CommonArgs};
use iconpad::{Background, CompositionParameters, CompositionProfile, Operation, WHITE};

/// Surround a logo with a uniform solid border.
#[derive(Parser, Debug)]
#[command(name = "padded_logo")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source logo image.
    #[arg(short, long, default_value = "assets/notesimages/logo2.jpeg")]
    input: PathBuf,

    /// Destination JPEG.
    #[arg(short, long, default_value = "assets/notesimages/logo2_padded.jpeg")]
    output: PathBuf,

    /// Border thickness as a percentage of the smaller source side.
    #[arg(long, value_name = "PERCENT")]
    padding_percent: Option<f64>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.common.verbose);

    let mut overrides = CompositionProfile::new();
    overrides.padding_percent = args.padding_percent;

    let defaults = CompositionParameters::default().with_background(Background::Solid(WHITE));
    run(
        Operation::PaddedBorder,
        defaults,
        &args.common,
        overrides,
        &args.input,
        &args.output,
        |report| {
            println!("[OK] Created padded logo: {}", report.output_path.display());
            println!("  Original size: {}", report.source);
            println!("  Padded size: {}", report.output);
            println!("  Padding: {}px on each side", report.padding());
            println!();
            println!("Next steps:");
            println!("1. Point your launcher icon config at '{}'", report.output_path.display());
            println!("2. Regenerate launcher icons");
            println!("3. Rebuild your app");
        },
    )
}
