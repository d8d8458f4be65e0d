use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the library logs warnings, or
/// everything down to `debug` with `verbose`.
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "xcstrings_csv=debug,xcstrings_csv_cli=debug"
    } else {
        "xcstrings_csv=warn,xcstrings_csv_cli=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
