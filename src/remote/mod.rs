//! Decompile service invocation.
//!
//! The client issues one POST per invocation, bounded by a hard timeout,
//! and classifies the result into an [`InvocationOutcome`]:
//!
//! | Result                         | Outcome          |
//! |--------------------------------|------------------|
//! | 2xx or 400                     | `Success(body)`  |
//! | budget expired                 | `Timeout`        |
//! | connect / I/O failure          | `TransportError` |
//! | any other status               | `ServerError`    |
//!
//! There are no retries at this layer.

mod client;
mod types;

pub use client::DecompileClient;
pub use types::{accepts_status, InvocationOutcome};
