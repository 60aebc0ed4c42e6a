//! Service layer for the contact API.
//! - Each workflow (user, contact, address) validates input, enforces
//!   ownership and delegates storage to a repository trait.
//! - `repo::seaorm` backs the traits with the database; `memory` backs them
//!   with an in-process store for tests and examples.

pub mod errors;
pub mod validation;
pub mod user;
pub mod contact;
pub mod address;
pub mod repo;
pub mod memory;
#[cfg(test)]
pub mod test_support;
