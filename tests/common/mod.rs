//! Shared helpers for integration tests.

#![allow(dead_code)]

pub use signed_values::test_utils::init_test_logging;

/// Marks the start of a named test phase in the log.
macro_rules! test_phase {
    ($name:expr) => {
        tracing::info!(test = $name, "test phase start");
    };
}

/// Marks successful completion of a named test.
macro_rules! test_complete {
    ($name:expr) => {
        tracing::info!(test = $name, "test complete");
    };
}

/// Asserts `cond`, logging expected and actual values on failure.
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let ok = $cond;
        let expected = &$expected;
        let actual = &$actual;
        if !ok {
            tracing::error!(expected = ?expected, actual = ?actual, "{}", $msg);
        }
        assert!(ok, "{}: expected {:?}, actual {:?}", $msg, expected, actual);
    }};
}
