//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs dataset assembly and diagnostics
//! - prints the summary/table/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, GenArgs};
use crate::domain::{ErrorParams, GenConfig, WalkParams};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `pairsynth` binary.
pub fn run() -> Result<(), AppError> {
    // We want `pairsynth` and `pairsynth -d 30` to behave like
    // `pairsynth generate ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Generate(args) => handle_generate(args, OutputMode::Full),
        Command::Summary(args) => handle_generate(args, OutputMode::SummaryOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    SummaryOnly,
}

fn handle_generate(args: GenArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = gen_config_from_args(&args);
    let run = pipeline::run_generation(&config)?;

    // Print terminal output.
    if mode == OutputMode::Full {
        println!("{}", crate::report::format_run_summary(&run.set, &config));
    }

    println!("{}", crate::report::format_pair_table(&run.diagnostics));

    if mode == OutputMode::Full && config.plot {
        if let Some(pair) = run.set.pairs.first() {
            println!(
                "{}",
                crate::plot::render_pair_plot(pair, config.plot_width, config.plot_height)
            );
            println!(
                "{}",
                crate::plot::render_spread_plot(pair, config.plot_width, config.plot_height)
            );
        }
    }

    // Optional exports.
    if let Some(path) = &config.output {
        crate::io::write_dataset_csv(path, &run.set.dataset)?;
    }
    if let Some(path) = &config.manifest {
        crate::io::write_manifest(path, &run.set)?;
    }

    Ok(())
}

pub fn gen_config_from_args(args: &GenArgs) -> GenConfig {
    GenConfig {
        n_days: args.days,
        n_pairs: args.pairs,
        seed: args.seed,
        start_date: args.start_date,
        walk: WalkParams {
            drift: args.drift,
            volatility: args.volatility,
        },
        error: ErrorParams {
            persistence: args.persistence,
            innovation_vol: args.noise_vol,
        },
        control: WalkParams {
            drift: args.control_drift,
            volatility: args.control_volatility,
        },
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        output: args.output.clone(),
        manifest: args.manifest.clone(),
    }
}

/// Rewrite argv so `pairsynth` defaults to `pairsynth generate`.
///
/// Rules:
/// - `pairsynth`                    -> `pairsynth generate`
/// - `pairsynth -d 30 ...`          -> `pairsynth generate -d 30 ...`
/// - `pairsynth --help/--version`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("generate".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "generate" | "summary");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "generate flags".
    if arg1.starts_with('-') {
        argv.insert(1, "generate".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
