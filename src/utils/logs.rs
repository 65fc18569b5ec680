// Lambda ships stdout to CloudWatch, which adds its own timestamps and chokes on ANSI codes.
pub fn setup_tracing(lambda: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if lambda {
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    } else {
        builder.init();
    }
}
