use log::*;
use ownerlog::*;

#[test]
fn test_say_survives_glob_import_next_to_log() {
    let logger = Logger::with_options(
        "App",
        LoggerOptions::default().output_target(OutputTarget::PlainConsole),
    );

    say!(logger, "listening on port {}", 8080);
    info!("the log crate macros stay usable too");

    assert_eq!(logger.owner(), "App");
}
