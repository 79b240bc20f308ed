use std::path::PathBuf;
use std::process;

use darkblue_cli::replay::replay_script;
use darkblue_cli::report::{self, SweepReport};
use darkblue_cli::sweep::{run_sweep, SweepConfig};
use darkblue_sky::console::COMMAND_NAMES;
use darkblue_sky::inspect::describe_sky;
use darkblue_sky::profile::load_profile_file;
use darkblue_sky::{AltitudeVisualMapper, CurveProfile, GameState, SkyDome};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut profile_path: Option<PathBuf> = None;
    let mut script_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut compare_path: Option<PathBuf> = None;
    let mut tolerance = 1e-4f32;
    let mut legacy = false;
    let mut config = SweepConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--profile" => {
                i += 1;
                profile_path = Some(PathBuf::from(value(&args, i, "--profile")));
            }
            "--legacy" => legacy = true,
            "--baseline" => {
                i += 1;
                config.cloud_baseline = parse(&args, i, "--baseline");
            }
            "--from" => {
                i += 1;
                config.from_m = parse(&args, i, "--from");
            }
            "--to" => {
                i += 1;
                config.to_m = parse(&args, i, "--to");
            }
            "--step" => {
                i += 1;
                config.step_m = parse(&args, i, "--step");
            }
            "--script" => {
                i += 1;
                script_path = Some(PathBuf::from(value(&args, i, "--script")));
            }
            "--output" => {
                i += 1;
                output_path = Some(PathBuf::from(value(&args, i, "--output")));
            }
            "--compare" => {
                i += 1;
                compare_path = Some(PathBuf::from(value(&args, i, "--compare")));
            }
            "--tolerance" => {
                i += 1;
                tolerance = parse(&args, i, "--tolerance");
            }
            "--help" | "-h" => {
                eprintln!("Usage: darkblue [OPTIONS]");
                eprintln!("  --profile <path>    Load curve profile from RON (default: canonical)");
                eprintln!("  --legacy            Use the legacy built-in profile");
                eprintln!("  --baseline <f>      Cloud coverage baseline (default: 0.5)");
                eprintln!("  --from <m>          First altitude in metres (default: 0)");
                eprintln!("  --to <m>            Last altitude in metres (default: 15000)");
                eprintln!("  --step <m>          Altitude step in metres (default: 1000)");
                eprintln!("  --script <path>     Replay console commands against an in-memory sky");
                eprintln!("  --output <path>     Save the sweep as JSON");
                eprintln!("  --compare <path>    Compare the sweep against a saved JSON sweep");
                eprintln!("  --tolerance <f>     Largest allowed parameter change (default: 0.0001)");
                eprintln!();
                eprintln!("Script lines: {} or tick <altitude>", COMMAND_NAMES.join(", "));
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let profile = match (&profile_path, legacy) {
        (Some(path), _) => load_profile_file(path).unwrap_or_else(|e| {
            eprintln!("ERROR: {e}");
            process::exit(1);
        }),
        (None, true) => CurveProfile::legacy(),
        (None, false) => CurveProfile::canonical(),
    };
    let mapper = AltitudeVisualMapper::new(profile);

    if let Some(ref path) = script_path {
        let script = std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("ERROR: cannot read {}: {e}", path.display());
            process::exit(1);
        });
        let state = GameState {
            in_level: true,
            in_designer: false,
            paused: false,
        };
        let sky = SkyDome::default().with_cloud_coverage(config.cloud_baseline);
        match replay_script(&script, mapper, sky, state) {
            Ok(outcome) => {
                log::info!("Replayed {} applied steps", outcome.steps.len());
                match outcome.sky {
                    Some(sky) => println!("{}", describe_sky(&sky)),
                    None => println!("No sky bound"),
                }
            }
            Err(e) => {
                eprintln!("ERROR: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let rows = run_sweep(&mapper, &config).unwrap_or_else(|e| {
        eprintln!("ERROR: {e}");
        process::exit(1);
    });

    println!("\n## Altitude sweep ({})\n", mapper.profile().name);
    println!("{}", report::format_markdown(&rows));

    if let Some(ref path) = compare_path {
        if let Some(saved) = report::load_report(path) {
            let drifts = report::compare(&rows, &saved, tolerance);
            println!("{}", report::format_comparison(&drifts, tolerance));
            if !drifts.is_empty() {
                eprintln!(
                    "ERROR: {} altitudes changed against {}",
                    drifts.len(),
                    path.display()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Saved sweep not found: {}", path.display());
        }
    }

    if let Some(ref path) = output_path {
        let sweep = SweepReport {
            profile: mapper.profile().name.clone(),
            cloud_baseline: config.cloud_baseline,
            rows,
        };
        if let Err(e) = report::save_report(path, &sweep) {
            eprintln!("ERROR: failed to save report: {e}");
            process::exit(1);
        }
        log::info!("Saved sweep to {}", path.display());
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {flag}");
            process::exit(1);
        }
    }
}

fn parse(args: &[String], i: usize, flag: &str) -> f32 {
    value(args, i, flag).parse().unwrap_or_else(|_| {
        eprintln!("Invalid {flag} value");
        process::exit(1);
    })
}
