//! # buildspy-core
//!
//! Shared building blocks for the buildspy report pipeline:
//!
//! - [`event`] — the [`BuildEvent`](event::BuildEvent) enum with its
//!   [`EventKind`](event::EventKind) discriminant
//! - [`model`] — read-only payload models (projects, plugins, mojo
//!   executions, artifacts, failures)
//! - [`xml`] — the [`Element`](xml::Element) tree node and its
//!   pretty-printed XML rendering
//! - [`text`] — ANSI color-escape stripping for captured build output
//! - [`extensions`] — artifact-type to file-extension resolution
//!
//! Events enter from the host build runtime, handlers turn their payloads
//! into elements, and a reporter serializes the elements. This crate owns
//! the vocabulary; dispatch and emission live in the sibling crates.

#![deny(unsafe_code)]

pub mod event;
pub mod extensions;
pub mod model;
pub mod text;
pub mod xml;

pub use event::{BuildEvent, EventKind};
pub use xml::Element;
