use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use tunescan::access::{AlwaysGranted, PermissionGate};
use tunescan::config::Settings;
use tunescan::coordinator::ScanCoordinator;
use tunescan::files::{delete_local_track, local_file_url};
use tunescan::scanner::ScanOutcome;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = load_settings();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("url") => match args.get(1) {
            Some(path) => {
                let outcome = local_file_url(path);
                print_json(&outcome, settings.output.pretty);
                exit_code(outcome.success)
            }
            None => usage(),
        },
        Some("rm") => match args.get(1) {
            Some(path) => {
                let outcome = delete_local_track(path);
                print_json(&outcome, settings.output.pretty);
                exit_code(outcome.success)
            }
            None => usage(),
        },
        Some("scan") => scan(args.get(1).map(String::as_str), &settings),
        Some(dir) => scan(Some(dir), &settings),
        None => scan(None, &settings),
    }
}

fn scan(root: Option<&str>, settings: &Settings) -> ExitCode {
    let root = root.map(str::to_string).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(str::to_string))
            .unwrap_or_else(|| ".".to_string())
    });

    // Permission negotiation is the host's job; a CLI run already has
    // whatever access its user has.
    let gate = AlwaysGranted;
    if !gate.has_access() {
        eprintln!("tunescan: storage access not granted");
        return ExitCode::FAILURE;
    }

    let coordinator = ScanCoordinator::new(settings.scanner.clone());
    let outcome = ScanOutcome::from_result(coordinator.start_full_scan(Path::new(&root)));
    print_json(&outcome, settings.output.pretty);
    exit_code(outcome.success)
}

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!(%msg, "invalid config, using defaults");
                Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a scan.
            warn!(error = %e, "failed to load config, using defaults");
            Settings::default()
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match rendered {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("tunescan: failed to render result: {e}"),
    }
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn usage() -> ExitCode {
    eprintln!("usage: tunescan [scan] [DIR] | tunescan url PATH | tunescan rm PATH");
    ExitCode::FAILURE
}
