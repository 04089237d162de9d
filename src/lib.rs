extern crate self as patchling;

#[macro_use]
mod macros;
mod api;
mod engine;
mod tables;

pub mod text;

pub use api::{Context, Diagnostic, LoadResult, Options, Replacement, load, load_into, load_with};
pub use engine::registry::{ReplacementRegistry, StringReplacer};
pub use tables::{MnemonicEntry, MnemonicTable, Tables};
pub use text::{StringId, TextBank};
