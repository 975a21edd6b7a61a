//! # buildspy-handlers
//!
//! Typed event dispatch for the buildspy pipeline:
//!
//! - [`handler`] — the [`EventHandler`](handler::EventHandler) trait every
//!   handler implements
//! - [`registry`] — the [`HandlerRegistry`](registry::HandlerRegistry),
//!   keyed by [`EventKind`](buildspy_core::EventKind), with uniqueness
//!   asserted at registration time
//! - [`elements`] — the field-to-tree builders shared by all handlers,
//!   including descriptor-alias normalization
//! - [`project`], [`mojo`], [`session`], [`dependency`], [`fallback`] —
//!   the stock handler set, one handler per lifecycle kind plus a
//!   catch-all for execution kinds with no dedicated handler
//!
//! A handler consumes exactly one event kind. Dispatch performs a safe
//! runtime test (kind equality plus pattern match) and reports unmatched
//! events as unconsumed; it never fails on a kind mismatch.

#![deny(unsafe_code)]

pub mod dependency;
pub mod elements;
pub mod errors;
pub mod fallback;
pub mod handler;
pub mod mojo;
pub mod project;
pub mod registry;
pub mod session;

pub use errors::{HandlerError, Result};
pub use handler::EventHandler;
pub use registry::HandlerRegistry;
