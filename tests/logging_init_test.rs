//! Global subscriber installation.
//!
//! Kept in its own test binary: the subscriber installed here stays in
//! place for the rest of the process.
#![allow(clippy::unwrap_used)]

use downloadable_export::Error;
use downloadable_export::observability::{LogFormat, LoggingConfig, init_logging};

#[test]
fn test_init_logging_only_once() {
    let config = LoggingConfig::default().with_format(LogFormat::Json);
    init_logging(&config).unwrap();

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(
        err,
        Error::OperationFailed { ref operation, .. } if operation == "logging_init"
    ));
}
