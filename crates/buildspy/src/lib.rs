//! # buildspy
//!
//! A build-lifecycle event spy: typed lifecycle events go in, a
//! tree-structured XML execution report comes out, consumed downstream by
//! a separate aggregation process.
//!
//! This crate is the facade over the workspace:
//!
//! - [`BuildSpy`] — the stock handler set wired to a report sink; feed it
//!   [`BuildEvent`]s and close it when the session ends
//! - [`SpyConfig`] — environment-driven setup (`BUILDSPY_DISABLED`,
//!   `BUILDSPY_REPORTS_DIR`)
//! - re-exports of the event model, element type, reporters, and the
//!   handler seam for hosts that wire their own sets
//!
//! Dispatch is by event kind: one handler per kind, uniqueness asserted
//! at registration, a single catch-all for execution kinds with no
//! dedicated handler. Events nobody claims are reported as unconsumed,
//! never as errors.

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod spy;

pub use buildspy_core::extensions::{ExtensionResolver, StandardExtensions};
pub use buildspy_core::model;
pub use buildspy_core::{BuildEvent, Element, EventKind};
pub use buildspy_handlers::{EventHandler, HandlerRegistry};
pub use buildspy_report::{BufferReporter, EventReporter, FileReporter, NullReporter};
pub use config::SpyConfig;
pub use errors::{Result, SpyError};
pub use spy::BuildSpy;
