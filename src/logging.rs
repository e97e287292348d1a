pub fn setup_logging() {
    let mut builder = env_logger::Builder::new();

    // Keep third-party noise out of the interactive session.
    builder.filter(None, log::LevelFilter::Warn);
    builder.filter(Some("movie_catalog"), log::LevelFilter::Info);
    builder.format_timestamp(None);

    if let Ok(rust_log) = std::env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }

    builder.init();
}
