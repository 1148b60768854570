//! No-mock integration test for global logging initialisation.
//!
//! Kept in its own test binary: the subscriber is process-global, so the
//! install-then-reinstall sequence must run in a single test.

use bk_common::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use bk_common::Error;

#[test]
fn init_once_then_reject_second_install() {
    let config = LogConfig::default()
        .with_format(LogFormat::Jsonl)
        .with_level(LogLevel::Debug);

    init_logging(&config).expect("first init should succeed");
    tracing::debug!(target: "bk_common", samples = 3, "logging initialised");

    let err = init_logging(&config.clone().with_format(LogFormat::Human))
        .expect_err("second init must fail");
    assert!(matches!(err, Error::LoggingInit(_)));
    assert_eq!(err.code(), "logging_init");
}
