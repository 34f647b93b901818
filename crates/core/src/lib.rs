//! Core types and classification logic for passage-archive.
//!
//! This crate is pure: it never touches the store. Callers hand it the
//! records they loaded and append whatever it returns.

mod classify;
mod clock;
pub mod constants;
pub mod env_config;
mod error;
mod record;
mod submission;
mod text;

pub use classify::*;
pub use clock::*;
pub use constants::*;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use error::*;
pub use record::*;
pub use submission::*;
pub use text::*;
