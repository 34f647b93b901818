//! Service layer for passage-archive
//!
//! Sits between the HTTP/CLI front ends and the record store: loads the sheet,
//! runs the classifier, appends the result.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod registration_service;

pub use error::ServiceError;
pub use registration_service::{MockExamOptions, RegistrationService, SubmitOutcome};
