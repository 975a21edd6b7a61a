//! # buildspy-report
//!
//! Report sinks for the buildspy pipeline. Handlers hand finished
//! [`Element`](buildspy_core::Element)s to an [`EventReporter`]; the
//! implementations here decide what "the report" is:
//!
//! - [`FileReporter`] — a pretty-printed XML document on disk, written
//!   atomically (a `.tmp` file renamed on close)
//! - [`BufferReporter`] — an in-memory buffer, the standard test
//!   collaborator
//! - [`NullReporter`] — discards everything, wired when the spy is
//!   disabled
//!
//! Append is the only operation on the build's event path and each
//! reporter guards its interior state, so hosts that emit events from more
//! than one thread stay safe without extra coordination.

#![deny(unsafe_code)]

pub mod buffer;
pub mod errors;
pub mod file;
pub mod reporter;

pub use buffer::BufferReporter;
pub use errors::{ReportError, Result};
pub use file::FileReporter;
pub use reporter::{EventReporter, NullReporter};
