use ownerlog::{say, Level, Logger, LoggerOptions, OutputTarget};
use std::sync::Arc;
use std::thread;

fn logger(target: OutputTarget) -> Logger {
    Logger::with_options("App", LoggerOptions::default().output_target(target))
}

#[test]
fn test_example_lines() {
    let logger = logger(OutputTarget::PlainConsole);
    let mut out = Vec::new();

    logger.write_to(&mut out, "Hello", Level::Info).unwrap();
    logger.write_to(&mut out, "Line1\nLine2", Level::Info).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<App> Hello\n<App> Line1\n      Line2\n"
    );
}

#[test]
fn test_every_level_carries_the_tag() {
    for target in [OutputTarget::Terminal, OutputTarget::PlainConsole] {
        let logger = logger(target);

        for level in Level::ALL {
            let line = logger.render("multi\nline", level).unwrap();
            assert!(line.contains("<App> multi\n      line"));
            assert_eq!(line.contains('\x1b'), target.is_terminal());
        }
    }
}

#[test]
fn test_leveled_methods_print() {
    let logger = logger(OutputTarget::PlainConsole);

    logger.debug("debug");
    logger.d("d");
    logger.success("success");
    logger.s("s");
    logger.info("info");
    logger.information("information");
    logger.i("i");
    logger.warn("warn");
    logger.warning("warning");
    logger.w("w");
    logger.severe("severe");
    logger.sv("sv");
    logger.fatal("fatal");
    logger.f("f");
    logger.call(3.5);
    say!(logger, "{} + {} = {}", 1, 2, 3);
}

#[test]
fn test_quiet_toggle_across_threads() {
    let logger = Arc::new(logger(OutputTarget::PlainConsole));

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                logger.set_quiet(true);
                logger.info(format!("from thread {n}"));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(logger.is_quiet());
    assert_eq!(logger.render("x", Level::Fatal), None);

    logger.set_quiet(false);
    assert_eq!(logger.render("x", Level::Info).unwrap(), "<App> x");
}

#[test]
fn test_install_as_log_backend() {
    ownerlog::install(logger(OutputTarget::PlainConsole)).unwrap();

    log::info!("routed through the log facade");
    log::error!("errors show up as severe");

    assert!(ownerlog::install(Logger::new("Other")).is_err());
}
