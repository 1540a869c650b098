//! Test utilities and mock factories.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::PasteError;
use crate::remote::InvocationOutcome;
use crate::traits::{MockPasteService, MockRemoteExecutor};

/// Create a mock executor that returns `outcome` for exactly one call.
#[must_use]
pub fn mock_executor(outcome: InvocationOutcome) -> MockRemoteExecutor {
    let mut mock = MockRemoteExecutor::new();
    mock.expect_invoke()
        .times(1)
        .returning(move |_payload, _timeout| outcome.clone());
    mock
}

/// Create a mock paste service that uploads once and returns `url`.
#[must_use]
pub fn mock_paste_success(url: impl Into<String>) -> MockPasteService {
    let url = url.into();
    let mut mock = MockPasteService::new();
    mock.expect_upload_code()
        .times(1)
        .returning(move |_text| Ok(url.clone()));
    mock
}

/// Create a mock paste service whose single upload fails with `error`.
#[must_use]
pub fn mock_paste_failure(error: PasteError) -> MockPasteService {
    let mut mock = MockPasteService::new();
    mock.expect_upload_code()
        .times(1)
        .returning(move |_text| Err(error.clone()));
    mock
}
