use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日誌；輸出到 stderr，避免與查詢結果混在 stdout。`RUST_LOG` 優先
pub fn init_logger(verbose: bool, level: Option<&str>, json: bool) {
    let default_directive = match (verbose, level) {
        (true, _) => "brickset=debug,info".to_string(),
        (false, Some(level)) => format!("brickset={}", level),
        (false, None) => "brickset=info".to_string(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
