//! Contact workflow: every read and mutation is scoped to the calling user.
//!
//! A contact owned by someone else is reported exactly like a missing one.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ContactService;
