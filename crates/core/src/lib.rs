//! `ordermill-core` — shared workflow building blocks.
//!
//! This crate contains the pieces every other crate leans on: the typed
//! product identifier and the workflow error model. No IO happens here.

pub mod error;
pub mod id;

pub use error::{WorkflowError, WorkflowResult};
pub use id::ProductId;
