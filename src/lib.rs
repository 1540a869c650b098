//! IL Relay
//!
//! Sends C# snippets to a remote decompile service and renders the IL it
//! returns as a size-bounded chat result.
//!
//! # Features
//!
//! - Code fence stripping with a 1000-character input cap
//! - One bounded POST per invocation (30s default), no retries
//! - Outcome classification: success (2xx/400), timeout, transport, server
//! - Oversized results offloaded to a Hastebin-compatible paste service
//!
//! # Quick Start
//!
//! ```bash
//! REPL_TOKEN=xxx ./il-relay 'Console.WriteLine("hi");'
//! ```
//!
//! # Architecture
//!
//! ```text
//! raw ──▶ sanitize ──▶ encode ──▶ DecompileClient ──▶ ResultRenderer ──▶ ReplySink
//!                                   (POST, 30s)           │
//!                                                         ▼ (> 990 chars)
//!                                                   HastebinClient
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod command;
pub mod config;
pub mod error;
pub mod format;
pub mod paste;
pub mod pipeline;
pub mod remote;
pub mod render;
pub mod traits;

#[cfg(test)]
mod test_utils;
