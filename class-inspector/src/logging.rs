use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber; stdout carries the report itself.
///
/// `RUST_LOG` wins over `verbosity` when set.
pub fn init_cli_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "class_inspector=info,warn",
        2 => "class_inspector=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
