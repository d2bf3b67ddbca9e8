/// Console subscriber shared by the sample binaries: file, line and level, no target.
pub fn init_tracing() {
    tracing_subscriber::fmt::SubscriberBuilder::default()
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_target(false)
        .init();
}
