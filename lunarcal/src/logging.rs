use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Targets of the binary and the calendar crates it drives.
const TARGETS: &[&str] = &["lunarcal", "lc_core", "lc_time", "lc_lunar", "lc_events"];

/// Level for `-v` repeated `verbosity` times; quiet runs only show warnings.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `EnvFilter` directives enabling `level` for the calendar targets only, so
/// dependencies stay silent.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber.
///
/// `RUST_LOG`, when set and valid, replaces the `-v` level. Output goes to
/// stderr so that `--json` on stdout stays parseable.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}
