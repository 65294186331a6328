use anyhow::Error;
use fisher::error::is_invalid_input;

/// [`assert`]s that the result is an invalid input error.
#[track_caller]
pub fn assert_invalid_input<T>(result: Result<T, Error>) {
    match result {
        Ok(_) => panic!("expected invalid input, got success"),
        Err(error) => assert!(
            is_invalid_input(&error),
            "expected invalid input, got: {error:#}"
        ),
    }
}

/// [`assert`]s that the result is an [`Error`] whose message chain contains the given message.
#[track_caller]
pub fn assert_error_message_contains<T>(result: Result<T, Error>, message: &str) {
    assert!(result.is_err_and(|error| format!("{error:#}").contains(message)))
}
