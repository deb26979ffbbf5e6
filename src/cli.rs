//! Command-line plumbing shared by the `icon_logo` and `padded_logo` binaries.
//!
//! Only available with the `cli` feature (on by default).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::compose::{Background, CompositionParameters};
use crate::composer::{CompositionReport, Configurable, IconComposer, Operation};
use crate::error::Error;
use crate::profile::CompositionProfile;

/// Arguments both binaries accept.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Fill color: "transparent" or a hex color such as "#6A1B9A".
    #[arg(short, long, value_name = "COLOR")]
    pub background: Option<Background>,

    /// JSON profile with composition settings; explicit flags win.
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at info, or debug
/// with `verbose`.
pub fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("iconpad={log_level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Builds a composer from defaults, an optional profile, then explicit flags.
pub fn build_composer(
    operation: Operation,
    defaults: CompositionParameters,
    common: &CommonArgs,
    overrides: CompositionProfile,
) -> anyhow::Result<IconComposer> {
    let mut composer = IconComposer::new(operation).with_params(defaults);

    if let Some(path) = &common.profile {
        let profile = CompositionProfile::from_path(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?;
        composer.apply_profile(&profile);
    }

    let overrides = match common.background {
        Some(background) => overrides.with_background(background),
        None => overrides,
    };
    composer.apply_profile(&overrides);

    Ok(composer)
}

/// Builds the composer and runs it, reporting setup errors like run errors.
pub fn run(
    operation: Operation,
    defaults: CompositionParameters,
    common: &CommonArgs,
    overrides: CompositionProfile,
    input: &Path,
    output: &Path,
    summarize: impl FnOnce(&CompositionReport),
) -> ExitCode {
    match build_composer(operation, defaults, common, overrides) {
        Ok(composer) => execute(&composer, input, output, summarize),
        Err(err) => fail(err),
    }
}

/// Prints an error chain on stderr and returns a failing exit code.
///
/// Written directly rather than through `tracing` so the message shows up
/// whatever `RUST_LOG` filters.
pub fn fail(err: anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}

/// Runs the composer and maps the outcome to a process exit code.
///
/// A missing or unreadable input prints a short message on stderr and exits 1
/// before any output is created. On success `summarize` prints the dimensions
/// used.
pub fn execute(
    composer: &IconComposer,
    input: &Path,
    output: &Path,
    summarize: impl FnOnce(&CompositionReport),
) -> ExitCode {
    match composer.run(input, output) {
        Ok(report) => {
            summarize(&report);
            ExitCode::SUCCESS
        }
        Err(Error::InputNotFound { path, .. }) => {
            eprintln!("Error: {} not found!", path.display());
            ExitCode::FAILURE
        }
        Err(err) => fail(anyhow::Error::new(err).context("Failed to create icon asset")),
    }
}

/// Converts a fraction to a percentage rounded to one decimal place.
///
/// Keeps summaries free of float noise such as `7.000000000000001`.
pub fn display_percent(fraction: f64) -> f64 {
    (fraction * 1000.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{ICON_BACKGROUND, WHITE};
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("iconpad-cli-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn common(profile: Option<PathBuf>) -> CommonArgs {
        CommonArgs {
            background: None,
            profile,
            verbose: false,
        }
    }

    #[test]
    fn missing_input_exits_with_failure() {
        let dir = scratch_dir("missing");
        let output = dir.join("out").join("icon.png");
        let composer = IconComposer::new(Operation::CenteredIcon);
        let mut summarized = false;

        let code = execute(&composer, &dir.join("absent.jpeg"), &output, |_| summarized = true);

        assert_eq!(code, ExitCode::FAILURE);
        assert!(!summarized);
        assert!(!output.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn bad_profile_exits_with_failure() {
        let dir = scratch_dir("profile");
        let output = dir.join("icon.png");
        let args = common(Some(dir.join("no-such-profile.json")));

        let code = run(
            Operation::CenteredIcon,
            CompositionParameters::default(),
            &args,
            CompositionProfile::new(),
            &dir.join("logo.png"),
            &output,
            |_| {},
        );

        assert_eq!(code, ExitCode::FAILURE);
        assert!(!output.exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn flags_override_profile() {
        let dir = scratch_dir("override");
        let profile = dir.join("profile.json");
        fs::write(&profile, r#"{ "canvasSize": 512, "logoSizePercent": 50 }"#).unwrap();
        let mut args = common(Some(profile));
        args.background = Some(Background::Transparent);

        let composer = build_composer(
            Operation::CenteredIcon,
            CompositionParameters::default(),
            &args,
            CompositionProfile::new().with_canvas_size(256),
        )
        .unwrap();

        assert_eq!(composer.params.target_canvas_size, 256);
        assert_eq!(composer.params.content_fraction, 0.5);
        assert_eq!(composer.params.background, Background::Transparent);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn explicit_background_beats_flatten_color() {
        let flatten = CompositionProfile::new().with_background(Background::Solid(ICON_BACKGROUND));

        let flattened = build_composer(
            Operation::CenteredIcon,
            CompositionParameters::default(),
            &common(None),
            flatten.clone(),
        )
        .unwrap();
        assert_eq!(flattened.params.background, Background::Solid(ICON_BACKGROUND));

        let mut args = common(None);
        args.background = Some(Background::Solid(WHITE));
        let explicit =
            build_composer(Operation::CenteredIcon, CompositionParameters::default(), &args, flatten)
                .unwrap();
        assert_eq!(explicit.params.background, Background::Solid(WHITE));
    }

    #[test]
    fn percent_display_is_rounded() {
        assert_eq!(display_percent(0.07), 7.0);
        assert_eq!(display_percent(0.6), 60.0);
        assert_eq!(display_percent(0.125), 12.5);
        assert_eq!(format!("{}", display_percent(0.07)), "7");
    }
}
