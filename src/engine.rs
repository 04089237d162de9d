//! Patch loading engine.
//!
//! This module is the operational core of the crate: it turns raw patch
//! text into string-replacement registrations against an externally
//! owned registry.
//!
//! ## How the parts work together
//!
//! Loading a patch is a short pipeline:
//!
//! ```text
//! patch text ── Loader::run            (loader.rs)
//!                 - stream lines, skip blanks/comments
//!                 - dispatch [NAME] headers to a handler
//!                       │
//!                       v
//!               SectionHandler          (section.rs)
//!                 - start: validate the header token
//!                 - parse_line: KEY = VALUE, table lookup
//!                       │            (assignment.rs, crate::tables)
//!                       v
//!               ReplacementRegistry     (registry.rs)
//!                 - add_string_replacement(original, text)
//!                 - last write wins per original
//! ```
//!
//! Nothing in here is fatal: a malformed header or line records a
//! warning on the diagnostic context and processing continues with the
//! next line. The worst possible outcome of a broken patch is an empty
//! registry.
//!
//! ## Responsibilities by module
//!
//! - `assignment.rs`: the `KEY = VALUE` line grammar.
//! - `section.rs`: the closed set of section handlers and the
//!   `[STRINGS]` lifecycle (start / parse_line / end).
//! - `loader.rs`: line streaming, header dispatch, and the
//!   source-locator-carrying diagnostic context.
//! - `registry.rs`: the replacement-store seam and its default
//!   implementation.

#[path = "engine/assignment.rs"]
mod assignment;
#[path = "engine/loader.rs"]
mod loader;
#[path = "engine/registry.rs"]
pub(crate) mod registry;
#[path = "engine/section.rs"]
mod section;

pub(crate) use assignment::parse_assignment;
pub(crate) use loader::{DiagContext, Loader};
#[allow(unused_imports)]
pub(crate) use section::{STRINGS_HEADER, SectionHandler, StringsSection};
